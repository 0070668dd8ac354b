//! 情境模擬對比示例

use haulplan::{sample_shipments, simulate, FleetParams};
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== 情境模擬對比示例 ===\n");

    let baseline_params = FleetParams::default();
    let records = sample_shipments(152, &baseline_params)?;

    // 假設情境：加大車容量、延長班次
    let scenario = FleetParams::new(Decimal::from(1200), 65.0, 12.0, 1.5);

    let report = simulate(&records, &scenario)?;
    let comparison = report.comparison();

    println!("基準 → 模擬:");
    println!(
        "  總趟次:   {} → {}（{}）",
        report.baseline.total_trips, report.totals.total_trips, comparison.total_trips
    );
    println!(
        "  總卡車數: {} → {}（{}）",
        report.baseline.total_trucks, report.totals.total_trucks, comparison.total_trucks
    );
    println!(
        "  平均天數: {:.1} → {:.1}（{}）",
        report.baseline.average_days, report.totals.average_days, comparison.average_days
    );
    println!(
        "  平均運費: {:.2} → {:.2}（{}）",
        report.baseline.average_freight_per_unit,
        report.totals.average_freight_per_unit,
        comparison.average_freight_per_unit
    );

    if let Some(elapsed) = report.calculation_time_ms {
        println!("\n計算耗時: {} ms", elapsed);
    }

    Ok(())
}
