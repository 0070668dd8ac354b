//! 路線綜合評分

use haulplan_core::ShipmentRecord;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// 評分等級（僅供顯示）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    /// 分數 > 40
    Excellent,
    /// 25 ≤ 分數 ≤ 40
    Good,
    /// 分數 < 25
    Regular,
}

/// 帶分數的路線
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedRoute {
    /// 原始記錄
    pub record: ShipmentRecord,
    /// 綜合分數
    pub score: f64,
}

impl RankedRoute {
    /// 分數等級
    pub fn band(&self) -> ScoreBand {
        classify(self.score)
    }
}

/// 綜合評分
///
/// 利潤率佔 40%、運距 30%（500 km 為正規化上界）、
/// 量體 20%（2000 袋為正規化上界）、手動調整加 10 分。
/// 超出正規化上界的記錄允許出現負項，刻意不截斷。
pub fn score(record: &ShipmentRecord) -> f64 {
    let amount = record.allocated_amount.to_f64().unwrap_or(0.0);
    let manual_bonus = if record.manually_adjusted() { 10.0 } else { 0.0 };

    record.profit_margin_pct * 0.4
        + (500.0 - record.distance_km) / 500.0 * 30.0
        + (2000.0 - amount) / 2000.0 * 20.0
        + manual_bonus
}

/// 分數分級
pub fn classify(score: f64) -> ScoreBand {
    if score > 40.0 {
        ScoreBand::Excellent
    } else if score >= 25.0 {
        ScoreBand::Good
    } else {
        ScoreBand::Regular
    }
}

/// 依分數遞減排列路線（穩定排序，同分維持輸入順序）
pub fn rank_routes(records: &[ShipmentRecord]) -> Vec<RankedRoute> {
    let mut ranked: Vec<RankedRoute> = records
        .iter()
        .map(|record| RankedRoute {
            record: record.clone(),
            score: score(record),
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use haulplan_core::{Derived, Grain};
    use rust_decimal::Decimal;

    fn record(margin: f64, distance: f64, amount: i64, manual: bool) -> ShipmentRecord {
        let mut rec = ShipmentRecord::new(
            1,
            NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
            Grain::Soybean,
            Decimal::from(amount),
            distance,
        )
        .with_profit_margin(margin);
        if manual {
            rec.trucks_required = Derived::Overridden(3);
        }
        rec
    }

    #[test]
    fn test_reference_score() {
        // 20×0.4 + 400/500×30 + 1500/2000×20 = 8 + 24 + 15 = 47
        let rec = record(20.0, 100.0, 500, false);
        let s = score(&rec);
        assert!((s - 47.0).abs() < 1e-9);
        assert_eq!(classify(s), ScoreBand::Excellent);
    }

    #[test]
    fn test_manual_bonus() {
        let auto = record(20.0, 100.0, 500, false);
        let manual = record(20.0, 100.0, 500, true);
        assert!((score(&manual) - score(&auto) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_outliers_go_negative() {
        // 超過 500 km 與 2000 袋的項允許為負，不截斷
        let rec = record(0.0, 800.0, 4000, false);
        let s = score(&rec);
        assert!(s < 0.0);
    }

    #[test]
    fn test_bands() {
        assert_eq!(classify(41.0), ScoreBand::Excellent);
        assert_eq!(classify(40.0), ScoreBand::Good);
        assert_eq!(classify(25.0), ScoreBand::Good);
        assert_eq!(classify(24.9), ScoreBand::Regular);
    }

    #[test]
    fn test_ranking_descending() {
        let records = vec![
            record(5.0, 400.0, 1800, false),  // 低分
            record(25.0, 50.0, 300, false),   // 高分
            record(15.0, 200.0, 1000, false), // 中分
        ];

        let ranked = rank_routes(&records);

        assert_eq!(ranked.len(), 3);
        assert!(ranked[0].score >= ranked[1].score);
        assert!(ranked[1].score >= ranked[2].score);
        assert_eq!(ranked[0].record.profit_margin_pct, 25.0);
    }
}
