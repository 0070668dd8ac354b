//! 排程看板操作示例

use chrono::NaiveDate;
use haulplan::{
    aggregate_by_grain, dashboard_metrics, rank_routes, sample_shipments, FilterConfig,
    FleetParams, Grain, ScheduleBoard, Selection, SortField,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== 排程看板操作示例 ===\n");

    // 載入示範集合
    let params = FleetParams::default();
    let records = sample_shipments(152, &params)?;
    let mut board = ScheduleBoard::from_records(records);

    let metrics = dashboard_metrics(board.records());
    println!("貨載筆數: {}", metrics.total_loads);
    println!("總袋數:   {}", metrics.total_sacks);
    println!("總卡車數: {}", metrics.total_trucks);
    println!("總收入:   {}", metrics.total_revenue);
    println!("手動調整: {}\n", metrics.manual_adjustments);

    // 篩選：七月的大豆，依利潤率遞減
    let config = FilterConfig::new(
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 7, 31).unwrap(),
    )
    .with_grains(Selection::from_values(vec![Grain::Soybean]))
    .with_sort(SortField::ProfitMargin, false);

    let view = board.view(&config);
    println!("七月大豆貨載: {} 筆", view.len());
    for record in view.iter().take(3) {
        println!(
            "  - #{} {} → {}：{} 袋，利潤率 {:.1}%",
            record.id,
            record.seller,
            record.buyer,
            record.allocated_amount,
            record.profit_margin_pct
        );
    }

    // 依穀物彙總
    println!("\n各穀物彙總:");
    for summary in aggregate_by_grain(board.records()) {
        println!(
            "  - {}: {} 袋 / 收入 {} / {} 筆",
            summary.grain, summary.total_amount, summary.total_revenue, summary.count
        );
    }

    // 路線排名前五
    println!("\n路線評分前五:");
    for ranked in rank_routes(board.records()).iter().take(5) {
        println!(
            "  - #{} 分數 {:.1}（{:?}）",
            ranked.record.id,
            ranked.score,
            ranked.band()
        );
    }

    // 手動調整一筆，再還原
    let id = board.records()[0].id;
    board.apply_manual_trucks(id, 8, None)?;
    println!("\n貨載 #{} 手動改為 8 車", id);
    println!("調整摘要: {:?}", board.adjustment_summary());

    board.restore_automatic(id, &params)?;
    println!("貨載 #{} 已還原自動計算", id);

    Ok(())
}
