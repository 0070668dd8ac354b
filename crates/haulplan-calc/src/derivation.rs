//! 營運量推導

use haulplan_core::{FleetParams, HaulError, Result, ShipmentRecord};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 推導結果
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DerivedFigures {
    /// 所需趟次
    pub trips_required: u32,
    /// 單趟來回時數
    pub round_trip_hours: f64,
    /// 單卡車每日趟次
    pub trips_per_truck_per_day: u32,
    /// 所需卡車數
    pub trucks_required: u32,
    /// 營運天數
    pub operation_days: u32,
}

/// 營運量推導計算器
pub struct DerivationCalculator;

impl DerivationCalculator {
    /// 由裝載量、運距與車隊參數推導趟次/卡車數/營運天數
    ///
    /// 輸入先行驗證：非正的裝載量或車隊參數立即回報錯誤，
    /// 不會產出 NaN/Infinity。
    pub fn derive(
        allocated_amount: Decimal,
        distance_km: f64,
        params: &FleetParams,
    ) -> Result<DerivedFigures> {
        params.validate()?;

        if allocated_amount <= Decimal::ZERO {
            return Err(HaulError::InvalidAllocation(allocated_amount));
        }
        if !(distance_km >= 0.0) {
            return Err(HaulError::InvalidDistance(distance_km));
        }

        // 所需趟次 = ceil(裝載量 / 單車容量)，正裝載量保證至少 1 趟
        let trips_required = (allocated_amount / params.truck_capacity)
            .ceil()
            .to_u32()
            .unwrap_or(1)
            .max(1);

        // 單趟來回時數 = 去程 + 回程 + 裝卸
        let round_trip_hours =
            distance_km * 2.0 / params.average_speed_kmh + params.load_unload_hours;

        // 單卡車每日趟次；來回超過班次工時仍算 1 趟（不回報零吞吐）
        let trips_per_truck_per_day =
            ((params.work_hours_per_day / round_trip_hours).floor() as u32).max(1);

        let trucks_required = trips_required
            .div_ceil(trips_per_truck_per_day)
            .max(1);

        // 營運天數以未封頂的卡車數計算
        let daily_throughput = (trucks_required * trips_per_truck_per_day).max(1);
        let operation_days = trips_required.div_ceil(daily_throughput).max(1);

        // 收成產能限制：每日收成裝不滿的卡車不派
        let trucks_required = match params.harvest_capacity_per_day {
            Some(harvest) => {
                let cap = (harvest / params.truck_capacity)
                    .ceil()
                    .to_u32()
                    .unwrap_or(1)
                    .max(1);
                trucks_required.min(cap)
            }
            None => trucks_required,
        };

        tracing::debug!(
            "推導完成: {} 袋 / {:.1} km → {} 趟, {} 車, {} 天",
            allocated_amount,
            distance_km,
            trips_required,
            trucks_required,
            operation_days
        );

        Ok(DerivedFigures {
            trips_required,
            round_trip_hours,
            trips_per_truck_per_day,
            trucks_required,
            operation_days,
        })
    }

    /// 對既有記錄重新推導（取記錄自身的量與距離）
    pub fn derive_record(
        record: &ShipmentRecord,
        params: &FleetParams,
    ) -> Result<DerivedFigures> {
        Self::derive(record.allocated_amount, record.distance_km, params)
    }
}

/// 將推導結果寫回記錄（全部標記為引擎計算值）
pub fn apply_figures(record: &mut ShipmentRecord, figures: &DerivedFigures) {
    record.trips_required = figures.trips_required;
    record.round_trip_hours = figures.round_trip_hours;
    record.trips_per_truck_per_day = figures.trips_per_truck_per_day;
    record.trucks_required = haulplan_core::Derived::Computed(figures.trucks_required);
    record.operation_days = figures.operation_days;
}
