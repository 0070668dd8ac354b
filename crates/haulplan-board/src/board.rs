//! 排程看板控制器

use chrono::NaiveDate;
use haulplan_core::{Derived, FilterConfig, FleetParams, HaulError, Result, ShipmentRecord};

use crate::adjustments::{AdjustmentLedger, AdjustmentSummary, ManualAdjustment};

/// 手動卡車數的允許範圍
pub const MIN_MANUAL_TRUCKS: u32 = 1;
pub const MAX_MANUAL_TRUCKS: u32 = 50;

/// 排程看板
///
/// 集合的唯一持有者：所有變更（改期、改卡車數、還原）都經由看板，
/// 引擎以明確參數取得集合快照，不存在共享的全域狀態。
#[derive(Debug, Clone, Default)]
pub struct ScheduleBoard {
    records: Vec<ShipmentRecord>,
    ledger: AdjustmentLedger,
}

impl ScheduleBoard {
    /// 創建空看板
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            ledger: AdjustmentLedger::new(),
        }
    }

    /// 由既有集合創建看板
    pub fn from_records(records: Vec<ShipmentRecord>) -> Self {
        Self {
            records,
            ledger: AdjustmentLedger::new(),
        }
    }

    /// 載入新集合，重置帳冊
    pub fn load(&mut self, records: Vec<ShipmentRecord>) {
        tracing::info!("載入貨載集合：{} 筆", records.len());
        self.records = records;
        self.ledger.clear();
    }

    /// 目前集合
    pub fn records(&self) -> &[ShipmentRecord] {
        &self.records
    }

    /// 集合筆數
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// 集合是否為空
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 調整帳冊
    pub fn ledger(&self) -> &AdjustmentLedger {
        &self.ledger
    }

    /// 依配置產生篩選排序後的快照
    pub fn view(&self, config: &FilterConfig) -> Vec<ShipmentRecord> {
        haulplan_calc::apply_filters(&self.records, config)
    }

    /// 手動覆寫卡車數，可同時改期
    ///
    /// 覆寫值即為權威值：趟次與營運天數不重算，
    /// 直到明確呼叫 [`Self::restore_automatic`]。
    pub fn apply_manual_trucks(
        &mut self,
        record_id: u32,
        trucks: u32,
        new_date: Option<NaiveDate>,
    ) -> Result<&ShipmentRecord> {
        if !(MIN_MANUAL_TRUCKS..=MAX_MANUAL_TRUCKS).contains(&trucks) {
            return Err(HaulError::TruckCountOutOfRange(trucks));
        }

        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or(HaulError::RecordNotFound(record_id))?;

        let previous = record.trucks_required.value();
        record.trucks_required = Derived::Overridden(trucks);
        if let Some(date) = new_date {
            record.scheduled_date = Derived::Overridden(date);
        }

        self.ledger
            .record(ManualAdjustment::new(record_id, trucks, previous));

        tracing::info!(
            "手動調整貨載 {}: 卡車 {} → {}",
            record_id,
            previous,
            trucks
        );

        Ok(&*record)
    }

    /// 改期（僅日期覆寫）
    pub fn reschedule(&mut self, record_id: u32, new_date: NaiveDate) -> Result<&ShipmentRecord> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or(HaulError::RecordNotFound(record_id))?;

        record.scheduled_date = Derived::Overridden(new_date);
        tracing::info!("貨載 {} 改期至 {}", record_id, new_date);

        Ok(&*record)
    }

    /// 還原單筆為引擎計算值
    ///
    /// 依目前參數重新推導全部衍生欄位；日期維持現值但回到計算狀態。
    pub fn restore_automatic(
        &mut self,
        record_id: u32,
        params: &FleetParams,
    ) -> Result<&ShipmentRecord> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or(HaulError::RecordNotFound(record_id))?;

        let figures = haulplan_calc::DerivationCalculator::derive_record(record, params)?;
        haulplan_calc::apply_figures(record, &figures);
        record.scheduled_date = Derived::Computed(record.scheduled_date.value());

        self.ledger.remove(record_id);
        tracing::info!("貨載 {} 已還原為自動計算", record_id);

        Ok(&*record)
    }

    /// 還原全部手動調整，回傳還原筆數
    pub fn clear_overrides(&mut self, params: &FleetParams) -> Result<usize> {
        let adjusted_ids: Vec<u32> = self
            .records
            .iter()
            .filter(|r| r.manually_adjusted())
            .map(|r| r.id)
            .collect();

        for id in &adjusted_ids {
            self.restore_automatic(*id, params)?;
        }

        self.ledger.clear();
        tracing::info!("已還原全部手動調整：{} 筆", adjusted_ids.len());
        Ok(adjusted_ids.len())
    }

    /// 調整統計摘要
    pub fn adjustment_summary(&self) -> AdjustmentSummary {
        let total_loads = self.records.len();
        let adjusted_loads = self
            .records
            .iter()
            .filter(|r| r.manually_adjusted())
            .count();
        let adjusted_pct = if total_loads == 0 {
            0.0
        } else {
            adjusted_loads as f64 / total_loads as f64 * 100.0
        };

        AdjustmentSummary {
            total_loads,
            adjusted_loads,
            adjusted_pct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haulplan_core::Grain;
    use rust_decimal::Decimal;

    fn board() -> ScheduleBoard {
        let params = FleetParams::default();
        let records = crate::mock::sample_shipments(10, &params).unwrap();
        ScheduleBoard::from_records(records)
    }

    #[test]
    fn test_apply_manual_trucks() {
        let mut board = board();
        let before_days = board.records()[2].operation_days;
        let before_trips = board.records()[2].trips_required;
        let id = board.records()[2].id;

        let record = board.apply_manual_trucks(id, 9, None).unwrap();

        assert_eq!(record.trucks_required.value(), 9);
        assert!(record.manually_adjusted());
        // 覆寫不重算其他衍生欄位
        assert_eq!(record.operation_days, before_days);
        assert_eq!(record.trips_required, before_trips);
        assert_eq!(board.ledger().get(id).unwrap().manual_trucks, 9);
    }

    #[test]
    fn test_manual_trucks_with_reschedule() {
        let mut board = board();
        let id = board.records()[1].id;
        let new_date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();

        let record = board.apply_manual_trucks(id, 3, Some(new_date)).unwrap();

        assert_eq!(record.scheduled_date.value(), new_date);
        assert!(record.scheduled_date.is_overridden());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut board = board();
        let id = board.records()[0].id;

        assert!(matches!(
            board.apply_manual_trucks(id, 0, None),
            Err(HaulError::TruckCountOutOfRange(0))
        ));
        assert!(matches!(
            board.apply_manual_trucks(id, 51, None),
            Err(HaulError::TruckCountOutOfRange(51))
        ));
        // 失敗的呼叫不得留下帳冊痕跡
        assert!(board.ledger().get(id).is_none());
    }

    #[test]
    fn test_unknown_id_rejected() {
        let mut board = board();
        assert!(matches!(
            board.apply_manual_trucks(99999, 5, None),
            Err(HaulError::RecordNotFound(99999))
        ));
        assert!(matches!(
            board.reschedule(99999, NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()),
            Err(HaulError::RecordNotFound(99999))
        ));
    }

    #[test]
    fn test_restore_automatic() {
        let params = FleetParams::default();
        let mut board = board();
        let id = board.records()[4].id;
        let computed = board.records()[4].trucks_required.value();

        board.apply_manual_trucks(id, 42, None).unwrap();
        let record = board.restore_automatic(id, &params).unwrap();

        assert_eq!(record.trucks_required.value(), computed);
        assert!(!record.manually_adjusted());
        assert!(board.ledger().get(id).is_none());
    }

    #[test]
    fn test_clear_overrides() {
        let params = FleetParams::default();
        let mut board = board();
        let ids: Vec<u32> = board.records().iter().take(3).map(|r| r.id).collect();
        for id in &ids {
            board.apply_manual_trucks(*id, 7, None).unwrap();
        }

        // 範例資料本身帶一筆預先調整（第 10 筆中的 1 筆）
        let summary = board.adjustment_summary();
        assert!(summary.adjusted_loads >= 3);

        let restored = board.clear_overrides(&params).unwrap();
        assert!(restored >= 3);
        assert_eq!(board.adjustment_summary().adjusted_loads, 0);
        assert!(board.ledger().is_empty());
    }

    #[test]
    fn test_view_delegates_to_filter_engine() {
        let board = board();
        let config = FilterConfig::new(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        );

        let view = board.view(&config);
        assert_eq!(view.len(), board.len());
    }

    #[test]
    fn test_load_resets_ledger() {
        let mut board = board();
        let id = board.records()[0].id;
        board.apply_manual_trucks(id, 5, None).unwrap();
        assert!(!board.ledger().is_empty());

        let fresh = vec![ShipmentRecord::new(
            1,
            NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            Grain::Rice,
            Decimal::from(400),
            80.0,
        )];
        board.load(fresh);

        assert_eq!(board.len(), 1);
        assert!(board.ledger().is_empty());
    }
}
