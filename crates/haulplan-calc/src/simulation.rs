//! 情境模擬

use haulplan_core::{FleetParams, Result, ShipmentRecord};
use rayon::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::derivation::DerivationCalculator;

/// 模擬用的簡化運費費率（每 km）
pub const SIM_FREIGHT_RATE: f64 = 0.15;

/// 單筆記錄的模擬結果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulatedFigures {
    /// 記錄ID
    pub record_id: u32,
    /// 模擬趟次
    pub trips_required: u32,
    /// 模擬卡車數
    pub trucks_required: u32,
    /// 模擬營運天數
    pub operation_days: u32,
    /// 模擬每袋運費（= 運距 × 0.15，與量體無關）
    pub freight_per_unit: f64,
}

/// 情境總計：趟次與卡車數加總、天數與運費取平均
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioTotals {
    /// 總趟次
    pub total_trips: u64,
    /// 總卡車數
    pub total_trucks: u64,
    /// 平均營運天數
    pub average_days: f64,
    /// 平均每袋運費
    pub average_freight_per_unit: f64,
}

impl ScenarioTotals {
    /// 由模擬結果彙總
    pub fn from_simulated(figures: &[SimulatedFigures]) -> Self {
        let count = figures.len();
        let total_trips = figures.iter().map(|f| u64::from(f.trips_required)).sum();
        let total_trucks = figures.iter().map(|f| u64::from(f.trucks_required)).sum();
        let (average_days, average_freight_per_unit) = if count == 0 {
            (0.0, 0.0)
        } else {
            (
                figures.iter().map(|f| f64::from(f.operation_days)).sum::<f64>() / count as f64,
                figures.iter().map(|f| f.freight_per_unit).sum::<f64>() / count as f64,
            )
        };

        Self {
            total_trips,
            total_trucks,
            average_days,
            average_freight_per_unit,
        }
    }

    /// 由記錄現值彙總（基準情境）
    pub fn baseline_of(records: &[ShipmentRecord]) -> Self {
        let count = records.len();
        let total_trips = records.iter().map(|r| u64::from(r.trips_required)).sum();
        let total_trucks = records
            .iter()
            .map(|r| u64::from(r.trucks_required.value()))
            .sum();
        let (average_days, average_freight_per_unit) = if count == 0 {
            (0.0, 0.0)
        } else {
            (
                records.iter().map(|r| f64::from(r.operation_days)).sum::<f64>() / count as f64,
                records
                    .iter()
                    .map(|r| r.freight_per_unit.to_f64().unwrap_or(0.0))
                    .sum::<f64>()
                    / count as f64,
            )
        };

        Self {
            total_trips,
            total_trucks,
            average_days,
            average_freight_per_unit,
        }
    }
}

/// 模擬報告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// 報告ID
    pub id: Uuid,
    /// 逐筆模擬結果（與輸入同序）
    pub per_record: Vec<SimulatedFigures>,
    /// 模擬情境總計
    pub totals: ScenarioTotals,
    /// 基準情境總計
    pub baseline: ScenarioTotals,
    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl SimulationReport {
    /// 基準 vs 模擬的逐指標差異
    pub fn comparison(&self) -> ScenarioComparison {
        compare(&self.baseline, &self.totals)
    }
}

/// 差異百分比；基準為零時回報「不適用」而非 ±∞
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Delta {
    /// 相對基準的變化（%）
    Change(f64),
    /// 基準為零，無法計算
    NotApplicable,
}

impl Delta {
    /// 取一位小數的百分比值
    pub fn rounded(&self) -> Option<f64> {
        match self {
            Delta::Change(pct) => Some((pct * 10.0).round() / 10.0),
            Delta::NotApplicable => None,
        }
    }
}

impl std::fmt::Display for Delta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.rounded() {
            Some(pct) => write!(f, "{:+.1}%", pct),
            None => write!(f, "n/a"),
        }
    }
}

/// 逐指標差異
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    /// 總趟次差異
    pub total_trips: Delta,
    /// 總卡車數差異
    pub total_trucks: Delta,
    /// 平均天數差異
    pub average_days: Delta,
    /// 平均運費差異
    pub average_freight_per_unit: Delta,
}

/// 差異百分比 = (模擬 − 基準) / 基準 × 100
pub fn delta(baseline: f64, simulated: f64) -> Delta {
    if baseline == 0.0 {
        Delta::NotApplicable
    } else {
        Delta::Change((simulated - baseline) / baseline * 100.0)
    }
}

/// 比較兩組情境總計
pub fn compare(baseline: &ScenarioTotals, simulated: &ScenarioTotals) -> ScenarioComparison {
    ScenarioComparison {
        total_trips: delta(baseline.total_trips as f64, simulated.total_trips as f64),
        total_trucks: delta(baseline.total_trucks as f64, simulated.total_trucks as f64),
        average_days: delta(baseline.average_days, simulated.average_days),
        average_freight_per_unit: delta(
            baseline.average_freight_per_unit,
            simulated.average_freight_per_unit,
        ),
    }
}

/// 以假設參數對整個集合重新推導，並與基準總計對照
///
/// 逐筆計算彼此獨立，平行展開後仍保持輸入順序。
pub fn simulate(records: &[ShipmentRecord], params: &FleetParams) -> Result<SimulationReport> {
    params.validate()?;

    let start_time = std::time::Instant::now();
    tracing::info!("開始情境模擬：{} 筆貨載", records.len());

    let per_record: Vec<SimulatedFigures> = records
        .par_iter()
        .map(|record| {
            let figures = DerivationCalculator::derive_record(record, params)?;
            Ok(SimulatedFigures {
                record_id: record.id,
                trips_required: figures.trips_required,
                trucks_required: figures.trucks_required,
                operation_days: figures.operation_days,
                freight_per_unit: record.distance_km * SIM_FREIGHT_RATE,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let totals = ScenarioTotals::from_simulated(&per_record);
    let baseline = ScenarioTotals::baseline_of(records);

    tracing::info!(
        "模擬完成，耗時 {:?}：趟次 {} → {}，卡車 {} → {}",
        start_time.elapsed(),
        baseline.total_trips,
        totals.total_trips,
        baseline.total_trucks,
        totals.total_trucks
    );

    Ok(SimulationReport {
        id: Uuid::new_v4(),
        per_record,
        totals,
        baseline,
        calculation_time_ms: Some(start_time.elapsed().as_millis()),
    })
}
