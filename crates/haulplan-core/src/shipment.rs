//! 貨載記錄模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 穀物種類
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grain {
    /// 大豆
    Soybean,
    /// 玉米
    Corn,
    /// 小麥
    Wheat,
    /// 稻米
    Rice,
    /// 高粱
    Sorghum,
    /// 其他穀物（自由命名）
    Other(String),
}

impl Grain {
    /// 顯示名稱
    pub fn name(&self) -> &str {
        match self {
            Grain::Soybean => "Soybean",
            Grain::Corn => "Corn",
            Grain::Wheat => "Wheat",
            Grain::Rice => "Rice",
            Grain::Sorghum => "Sorghum",
            Grain::Other(name) => name,
        }
    }
}

impl std::fmt::Display for Grain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 貨載生命週期狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadStatus {
    /// 已排程
    Scheduled,
    /// 運送中
    InTransit,
    /// 已交付
    Delivered,
}

impl std::fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LoadStatus::Scheduled => "Scheduled",
            LoadStatus::InTransit => "InTransit",
            LoadStatus::Delivered => "Delivered",
        };
        write!(f, "{}", label)
    }
}

/// 優先級（依利潤率分段，僅供顯示）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    /// 低（利潤率 ≤ 10%）
    Low,
    /// 中（10% < 利潤率 ≤ 20%）
    Medium,
    /// 高（利潤率 > 20%）
    High,
}

/// 可覆寫的衍生值
///
/// `Computed` 由推導引擎寫入；`Overridden` 由使用者手動設定。
/// `manually_adjusted` 旗標直接由變體決定，不會與欄位脫鉤。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Derived<T> {
    /// 引擎計算值
    Computed(T),
    /// 手動覆寫值
    Overridden(T),
}

impl<T: Copy> Derived<T> {
    /// 取出目前值
    pub fn value(&self) -> T {
        match self {
            Derived::Computed(v) | Derived::Overridden(v) => *v,
        }
    }

    /// 是否為手動覆寫
    pub fn is_overridden(&self) -> bool {
        matches!(self, Derived::Overridden(_))
    }
}

/// 貨載記錄
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentRecord {
    /// 貨載ID（建立時指派，不重複使用）
    pub id: u32,

    /// 排定日期（可被手動改期）
    pub scheduled_date: Derived<NaiveDate>,

    /// 買方
    pub buyer: String,

    /// 賣方
    pub seller: String,

    /// 穀物種類
    pub grain: Grain,

    /// 分配量（袋）
    pub allocated_amount: Decimal,

    /// 賣方到買方運距（km）
    pub distance_km: f64,

    /// 所需趟次（衍生）
    pub trips_required: u32,

    /// 所需卡車數（衍生，可被手動覆寫）
    pub trucks_required: Derived<u32>,

    /// 營運天數（衍生）
    pub operation_days: u32,

    /// 單卡車每日趟次（衍生中間值）
    pub trips_per_truck_per_day: u32,

    /// 單趟來回時數（衍生中間值）
    pub round_trip_hours: f64,

    /// 每袋運費
    pub freight_per_unit: Decimal,

    /// 利潤率（%）
    pub profit_margin_pct: f64,

    /// 生命週期狀態
    pub status: LoadStatus,
}

impl ShipmentRecord {
    /// 創建新的貨載記錄
    ///
    /// 衍生欄位先以最小合法值填入，待推導引擎寫入實際值。
    pub fn new(
        id: u32,
        scheduled_date: NaiveDate,
        grain: Grain,
        allocated_amount: Decimal,
        distance_km: f64,
    ) -> Self {
        Self {
            id,
            scheduled_date: Derived::Computed(scheduled_date),
            buyer: String::new(),
            seller: String::new(),
            grain,
            allocated_amount,
            distance_km,
            trips_required: 1,
            trucks_required: Derived::Computed(1),
            operation_days: 1,
            trips_per_truck_per_day: 1,
            round_trip_hours: 0.0,
            freight_per_unit: Decimal::ZERO,
            profit_margin_pct: 0.0,
            status: LoadStatus::Scheduled,
        }
    }

    /// 建構器模式：設置買賣雙方
    pub fn with_parties(mut self, buyer: String, seller: String) -> Self {
        self.buyer = buyer;
        self.seller = seller;
        self
    }

    /// 建構器模式：設置每袋運費
    pub fn with_freight_per_unit(mut self, freight: Decimal) -> Self {
        self.freight_per_unit = freight;
        self
    }

    /// 建構器模式：設置利潤率
    pub fn with_profit_margin(mut self, margin_pct: f64) -> Self {
        self.profit_margin_pct = margin_pct;
        self
    }

    /// 建構器模式：設置狀態
    pub fn with_status(mut self, status: LoadStatus) -> Self {
        self.status = status;
        self
    }

    /// 是否帶有手動調整
    pub fn manually_adjusted(&self) -> bool {
        self.trucks_required.is_overridden() || self.scheduled_date.is_overridden()
    }

    /// 依利潤率分段的優先級
    pub fn priority(&self) -> Priority {
        if self.profit_margin_pct > 20.0 {
            Priority::High
        } else if self.profit_margin_pct > 10.0 {
            Priority::Medium
        } else {
            Priority::Low
        }
    }
}
