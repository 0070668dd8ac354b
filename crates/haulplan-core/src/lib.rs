//! # Haulplan Core
//!
//! 核心資料模型與類型定義

pub mod filter;
pub mod params;
pub mod shipment;

// Re-export 主要類型
pub use filter::{FilterConfig, Selection, SortField};
pub use params::FleetParams;
pub use shipment::{Derived, Grain, LoadStatus, Priority, ShipmentRecord};

/// 排程引擎錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum HaulError {
    #[error("無效的裝載量: {0}（必須大於零）")]
    InvalidAllocation(rust_decimal::Decimal),

    #[error("無效的運距: {0} km（不可為負）")]
    InvalidDistance(f64),

    #[error("無效的車隊參數 {name}: {value}（必須大於零）")]
    InvalidFleetParam { name: &'static str, value: String },

    #[error("找不到貨載記錄: {0}")]
    RecordNotFound(u32),

    #[error("卡車數量超出允許範圍: {0}（限 1 到 50）")]
    TruckCountOutOfRange(u32),

    #[error("調整帳冊錯誤: {0}")]
    LedgerError(String),

    #[error("計算錯誤: {0}")]
    CalculationError(String),
}

pub type Result<T> = std::result::Result<T, HaulError>;
