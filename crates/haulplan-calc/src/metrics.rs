//! 看板摘要指標

use haulplan_core::ShipmentRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregation::record_revenue;

/// 看板頂部的摘要指標
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    /// 貨載筆數
    pub total_loads: usize,
    /// 總袋數
    pub total_sacks: Decimal,
    /// 總卡車數
    pub total_trucks: u64,
    /// 總收入（含加成）
    pub total_revenue: Decimal,
    /// 總運費（不含加成）
    pub total_freight: Decimal,
    /// 手動調整筆數
    pub manual_adjustments: usize,
}

/// 計算摘要指標（單趟掃描）
pub fn dashboard_metrics(records: &[ShipmentRecord]) -> DashboardMetrics {
    let mut metrics = DashboardMetrics {
        total_loads: records.len(),
        total_sacks: Decimal::ZERO,
        total_trucks: 0,
        total_revenue: Decimal::ZERO,
        total_freight: Decimal::ZERO,
        manual_adjustments: 0,
    };

    for record in records {
        metrics.total_sacks += record.allocated_amount;
        metrics.total_trucks += u64::from(record.trucks_required.value());
        metrics.total_revenue += record_revenue(record);
        metrics.total_freight += record.allocated_amount * record.freight_per_unit;
        if record.manually_adjusted() {
            metrics.manual_adjustments += 1;
        }
    }

    metrics
}

/// 分配量前 n 名（遞減）
pub fn top_by_volume(records: &[ShipmentRecord], n: usize) -> Vec<ShipmentRecord> {
    let mut sorted: Vec<ShipmentRecord> = records.to_vec();
    sorted.sort_by(|a, b| b.allocated_amount.cmp(&a.allocated_amount));
    sorted.truncate(n);
    sorted
}

/// 運距前 n 名（遞減）
pub fn top_by_distance(records: &[ShipmentRecord], n: usize) -> Vec<ShipmentRecord> {
    let mut sorted: Vec<ShipmentRecord> = records.to_vec();
    sorted.sort_by(|a, b| b.distance_km.total_cmp(&a.distance_km));
    sorted.truncate(n);
    sorted
}
