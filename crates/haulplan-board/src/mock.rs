//! 示範資料來源
//!
//! 以索引公式產生可重現的貨載集合，供示範與測試使用；
//! 正式資料由外部資料源提供。

use chrono::NaiveDate;
use haulplan_core::{Derived, FleetParams, Grain, Result, ShipmentRecord};
use haulplan_calc::{apply_figures, DerivationCalculator};
use rust_decimal::Decimal;

/// 產生 `count` 筆示範貨載
///
/// 衍生欄位以 `params` 推導寫入，每第 10 筆預掛一個手動覆寫
/// （覆寫值等於計算值，僅改變來源標記）。
pub fn sample_shipments(count: usize, params: &FleetParams) -> Result<Vec<ShipmentRecord>> {
    params.validate()?;

    let base_date = NaiveDate::from_ymd_opt(2025, 6, 20).expect("固定基準日期");
    let grains = [Grain::Soybean, Grain::Corn, Grain::Wheat, Grain::Rice];

    let mut records = Vec::with_capacity(count);
    for i in 0..count {
        let scheduled_date = base_date
            .checked_add_signed(chrono::Duration::days((i % 48) as i64))
            .expect("日期溢出");

        let buyer_letter = (b'A' + (i % 26) as u8) as char;
        let seller_letter = (b'A' + (i % 20) as u8) as char;

        let allocated_amount = Decimal::from(500 + (i as i64 * 50) % 2000);
        let distance_km = (50 + (i * 10) % 500) as f64;
        let freight_per_unit =
            Decimal::new(25, 1) + Decimal::from((i % 10) as i64) * Decimal::new(5, 1);
        let profit_margin_pct = (5 + i % 20) as f64;

        let mut record = ShipmentRecord::new(
            (i + 1) as u32,
            scheduled_date,
            grains[i % 4].clone(),
            allocated_amount,
            distance_km,
        )
        .with_parties(
            format!("Buyer {} Ltd", buyer_letter),
            format!("Seller {} Farm", seller_letter),
        )
        .with_freight_per_unit(freight_per_unit)
        .with_profit_margin(profit_margin_pct);

        let figures = DerivationCalculator::derive_record(&record, params)?;
        apply_figures(&mut record, &figures);

        if i % 10 == 0 {
            record.trucks_required = Derived::Overridden(figures.trucks_required);
        }

        records.push(record);
    }

    Ok(records)
}
