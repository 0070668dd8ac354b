//! 集成測試

use chrono::NaiveDate;
use haulplan_board::ScheduleBoard;
use haulplan_core::*;
use rust_decimal::Decimal;

#[test]
fn test_full_board_flow() {
    // 場景：載入示範資料 → 篩選 → 彙總 → 評分 → 手動調整 → 模擬

    // 1. 車隊參數與示範集合
    let params = FleetParams::default();
    let records = haulplan_board::sample_shipments(152, &params).unwrap();
    let mut board = ScheduleBoard::from_records(records);
    assert_eq!(board.len(), 152);

    // 2. 篩選：七月、只看玉米、依運距遞減
    let config = FilterConfig::new(
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 7, 31).unwrap(),
    )
    .with_grains(Selection::from_values(vec![Grain::Corn]))
    .with_sort(SortField::Distance, false);

    let view = board.view(&config);
    assert!(!view.is_empty());
    for record in &view {
        assert_eq!(record.grain, Grain::Corn);
        let date = record.scheduled_date.value();
        assert!(date >= config.date_start && date <= config.date_end);
    }
    for pair in view.windows(2) {
        assert!(pair[0].distance_km >= pair[1].distance_km);
    }

    // 3. 彙總：分組總量等於逐筆總量
    let summaries = haulplan_calc::aggregate_by_grain(board.records());
    assert_eq!(summaries.len(), 4);
    let grouped: Decimal = summaries.iter().map(|s| s.total_amount).sum();
    let flat: Decimal = board.records().iter().map(|r| r.allocated_amount).sum();
    assert_eq!(grouped, flat);

    // 月份彙總涵蓋 6~8 月（基準日 6/20 起 48 天）
    let months = haulplan_calc::aggregate_by_month(board.records());
    assert_eq!(months.len(), 3);

    // 4. 評分：排名遞減
    let ranked = haulplan_calc::rank_routes(board.records());
    assert_eq!(ranked.len(), 152);
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }

    // 5. 手動調整：覆寫後摘要與帳冊同步
    let before = board.adjustment_summary();
    let target_id = board
        .records()
        .iter()
        .find(|r| !r.manually_adjusted())
        .unwrap()
        .id;
    board.apply_manual_trucks(target_id, 10, None).unwrap();

    let after = board.adjustment_summary();
    assert_eq!(after.adjusted_loads, before.adjusted_loads + 1);
    assert_eq!(board.ledger().get(target_id).unwrap().manual_trucks, 10);

    // 6. 模擬：加大容量應減少總趟次
    let bigger_trucks = FleetParams::new(Decimal::from(1200), 60.0, 10.0, 2.0);
    let report = haulplan_calc::simulate(board.records(), &bigger_trucks).unwrap();

    assert_eq!(report.per_record.len(), 152);
    assert!(report.totals.total_trips < report.baseline.total_trips);
    match report.comparison().total_trips {
        haulplan_calc::Delta::Change(pct) => assert!(pct < 0.0),
        haulplan_calc::Delta::NotApplicable => panic!("基準趟次不應為零"),
    }

    // 7. 清除全部調整後回到全自動
    let restored = board.clear_overrides(&params).unwrap();
    assert!(restored >= 1);
    assert_eq!(board.adjustment_summary().adjusted_loads, 0);
}

#[test]
fn test_manual_override_survives_filtering() {
    let params = FleetParams::default();
    let records = haulplan_board::sample_shipments(40, &params).unwrap();
    let mut board = ScheduleBoard::from_records(records);

    let id = board.records()[5].id;
    board.apply_manual_trucks(id, 25, None).unwrap();

    // 篩選快照中仍看得到覆寫值
    let config = FilterConfig::new(
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
    );
    let view = board.view(&config);
    let record = view.iter().find(|r| r.id == id).unwrap();
    assert_eq!(record.trucks_required.value(), 25);
    assert!(record.manually_adjusted());
}

#[test]
fn test_reschedule_moves_month_bucket() {
    let params = FleetParams::default();
    let records = haulplan_board::sample_shipments(5, &params).unwrap();
    let mut board = ScheduleBoard::from_records(records);

    // 全部改期到九月 → 月份彙總只剩一桶
    let ids: Vec<u32> = board.records().iter().map(|r| r.id).collect();
    for id in ids {
        board
            .reschedule(id, NaiveDate::from_ymd_opt(2025, 9, 10).unwrap())
            .unwrap();
    }

    let months = haulplan_calc::aggregate_by_month(board.records());
    assert_eq!(months.len(), 1);
    assert_eq!(months[0].label, "Sep/25");
}

#[test]
fn test_simulated_freight_formula_end_to_end() {
    let params = FleetParams::default();
    let records = haulplan_board::sample_shipments(20, &params).unwrap();

    let report = haulplan_calc::simulate(&records, &params).unwrap();
    for (record, figures) in records.iter().zip(&report.per_record) {
        // 模擬運費只看運距
        assert_eq!(figures.freight_per_unit, record.distance_km * 0.15);
    }
}
