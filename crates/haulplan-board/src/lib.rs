//! # Haulplan Board
//!
//! 排程看板控制器：集合的唯一持有者與唯一變更入口。

pub mod adjustments;
pub mod board;
pub mod mock;

// Re-export 主要類型
pub use adjustments::{AdjustmentLedger, AdjustmentSummary, ManualAdjustment};
pub use board::ScheduleBoard;
pub use mock::sample_shipments;
