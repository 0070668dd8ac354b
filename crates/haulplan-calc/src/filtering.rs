//! 集合篩選與排序

use haulplan_core::{FilterConfig, Grain, ShipmentRecord, SortField};

/// 套用篩選與排序，回傳新的有序集合
///
/// 日期區間兩端皆含；類別條件以 AND 組合。排序為穩定排序，
/// 同鍵值維持輸入順序，因此同一配置重複套用結果不變。
pub fn apply_filters(records: &[ShipmentRecord], config: &FilterConfig) -> Vec<ShipmentRecord> {
    let mut result: Vec<ShipmentRecord> = records
        .iter()
        .filter(|r| {
            let date = r.scheduled_date.value();
            date >= config.date_start && date <= config.date_end
        })
        .filter(|r| config.grains.matches(&r.grain))
        .filter(|r| config.sellers.matches(&r.seller))
        .filter(|r| config.buyers.matches(&r.buyer))
        .cloned()
        .collect();

    result.sort_by(|a, b| {
        let ordering = match config.sort_field {
            SortField::ScheduledDate => a.scheduled_date.value().cmp(&b.scheduled_date.value()),
            SortField::Distance => a.distance_km.total_cmp(&b.distance_km),
            SortField::AllocatedAmount => a.allocated_amount.cmp(&b.allocated_amount),
            SortField::ProfitMargin => a.profit_margin_pct.total_cmp(&b.profit_margin_pct),
            SortField::FreightPerUnit => a.freight_per_unit.cmp(&b.freight_per_unit),
            SortField::TrucksRequired => {
                a.trucks_required.value().cmp(&b.trucks_required.value())
            }
        };
        if config.sort_ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });

    result
}

/// 集合中出現過的穀物（去重、排序）
pub fn unique_grains(records: &[ShipmentRecord]) -> Vec<Grain> {
    let mut grains = Vec::new();
    for record in records {
        if !grains.contains(&record.grain) {
            grains.push(record.grain.clone());
        }
    }
    grains.sort_by(|a: &Grain, b: &Grain| a.name().cmp(b.name()));
    grains
}

/// 集合中出現過的賣方（去重、排序）
pub fn unique_sellers(records: &[ShipmentRecord]) -> Vec<String> {
    let mut sellers: Vec<String> = Vec::new();
    for record in records {
        if !sellers.contains(&record.seller) {
            sellers.push(record.seller.clone());
        }
    }
    sellers.sort();
    sellers
}

/// 集合中出現過的買方（去重、排序）
pub fn unique_buyers(records: &[ShipmentRecord]) -> Vec<String> {
    let mut buyers: Vec<String> = Vec::new();
    for record in records {
        if !buyers.contains(&record.buyer) {
            buyers.push(record.buyer.clone());
        }
    }
    buyers.sort();
    buyers
}
