//! 車隊參數配置

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{HaulError, Result};

/// 車隊營運參數
///
/// 推導引擎與模擬引擎共用同一組參數；模擬時以假設值替換。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetParams {
    /// 單車容量（袋/車）
    pub truck_capacity: Decimal,

    /// 平均車速（km/h）
    pub average_speed_kmh: f64,

    /// 每日工時（小時）
    pub work_hours_per_day: f64,

    /// 裝卸時間（小時/趟）
    pub load_unload_hours: f64,

    /// 每日收成產能（袋），設定時會限制卡車數上限
    pub harvest_capacity_per_day: Option<Decimal>,
}

impl FleetParams {
    /// 創建新的車隊參數
    pub fn new(
        truck_capacity: Decimal,
        average_speed_kmh: f64,
        work_hours_per_day: f64,
        load_unload_hours: f64,
    ) -> Self {
        Self {
            truck_capacity,
            average_speed_kmh,
            work_hours_per_day,
            load_unload_hours,
            harvest_capacity_per_day: None,
        }
    }

    /// 建構器模式：設置每日收成產能
    pub fn with_harvest_capacity(mut self, capacity_per_day: Decimal) -> Self {
        self.harvest_capacity_per_day = Some(capacity_per_day);
        self
    }

    /// 檢查所有參數皆為正數
    pub fn validate(&self) -> Result<()> {
        if self.truck_capacity <= Decimal::ZERO {
            return Err(HaulError::InvalidFleetParam {
                name: "truck_capacity",
                value: self.truck_capacity.to_string(),
            });
        }
        if !(self.average_speed_kmh > 0.0) {
            return Err(HaulError::InvalidFleetParam {
                name: "average_speed_kmh",
                value: self.average_speed_kmh.to_string(),
            });
        }
        if !(self.work_hours_per_day > 0.0) {
            return Err(HaulError::InvalidFleetParam {
                name: "work_hours_per_day",
                value: self.work_hours_per_day.to_string(),
            });
        }
        if !(self.load_unload_hours > 0.0) {
            return Err(HaulError::InvalidFleetParam {
                name: "load_unload_hours",
                value: self.load_unload_hours.to_string(),
            });
        }
        if let Some(harvest) = self.harvest_capacity_per_day {
            if harvest <= Decimal::ZERO {
                return Err(HaulError::InvalidFleetParam {
                    name: "harvest_capacity_per_day",
                    value: harvest.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for FleetParams {
    /// 預設值：900 袋/車、60 km/h、10 小時/日、裝卸 2 小時
    fn default() -> Self {
        Self::new(Decimal::from(900), 60.0, 10.0, 2.0)
    }
}
