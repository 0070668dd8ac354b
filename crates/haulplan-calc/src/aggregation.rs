//! 圖表彙總

use haulplan_core::{Grain, ShipmentRecord};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 收入加成係數（固定 1.2 加價）
pub fn revenue_multiplier() -> Decimal {
    Decimal::new(12, 1)
}

/// 單筆記錄的收入 = 分配量 × 每袋運費 × 加成
pub fn record_revenue(record: &ShipmentRecord) -> Decimal {
    record.allocated_amount * record.freight_per_unit * revenue_multiplier()
}

/// 依穀物彙總
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrainSummary {
    /// 穀物
    pub grain: Grain,
    /// 總分配量（袋）
    pub total_amount: Decimal,
    /// 總收入（含加成）
    pub total_revenue: Decimal,
    /// 記錄筆數
    pub count: usize,
}

/// 依月份彙總
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// 月份標籤（%b/%y，例如 Jun/25）
    pub label: String,
    /// 年
    pub year: i32,
    /// 月
    pub month: u32,
    /// 總趟次
    pub total_trips: u64,
    /// 總卡車數
    pub total_trucks: u64,
}

/// 依穀物分組彙總分配量、收入與筆數
///
/// 結果順序為分組鍵首次出現的順序（僅影響顯示，不影響正確性）。
pub fn aggregate_by_grain(records: &[ShipmentRecord]) -> Vec<GrainSummary> {
    let mut summaries: Vec<GrainSummary> = Vec::new();

    for record in records {
        match summaries.iter_mut().find(|s| s.grain == record.grain) {
            Some(summary) => {
                summary.total_amount += record.allocated_amount;
                summary.total_revenue += record_revenue(record);
                summary.count += 1;
            }
            None => summaries.push(GrainSummary {
                grain: record.grain.clone(),
                total_amount: record.allocated_amount,
                total_revenue: record_revenue(record),
                count: 1,
            }),
        }
    }

    summaries
}

/// 依排定月份分組彙總趟次與卡車數
///
/// 分組鍵為（年, 月），同月不同日合併。
pub fn aggregate_by_month(records: &[ShipmentRecord]) -> Vec<MonthSummary> {
    use chrono::Datelike;

    let mut summaries: Vec<MonthSummary> = Vec::new();

    for record in records {
        let date = record.scheduled_date.value();
        let (year, month) = (date.year(), date.month());

        match summaries
            .iter_mut()
            .find(|s| s.year == year && s.month == month)
        {
            Some(summary) => {
                summary.total_trips += u64::from(record.trips_required);
                summary.total_trucks += u64::from(record.trucks_required.value());
            }
            None => summaries.push(MonthSummary {
                label: date.format("%b/%y").to_string(),
                year,
                month,
                total_trips: u64::from(record.trips_required),
                total_trucks: u64::from(record.trucks_required.value()),
            }),
        }
    }

    summaries
}
