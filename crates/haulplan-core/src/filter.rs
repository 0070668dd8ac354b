//! 篩選與排序配置

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shipment::Grain;

/// 類別篩選的三態選擇
///
/// UI 的「全選」與「清除」會塞入全部現值而非清空集合；以顯式的
/// `Unrestricted` 變體承載「不限制」語意，空集合不再被賦予特殊意義。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection<T: Ord> {
    /// 不限制
    Unrestricted,
    /// 僅保留集合內的值
    Subset(BTreeSet<T>),
}

impl<T: Ord> Selection<T> {
    /// 由一組值建立選擇；空集合正規化為 `Unrestricted`
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        let set: BTreeSet<T> = values.into_iter().collect();
        if set.is_empty() {
            Selection::Unrestricted
        } else {
            Selection::Subset(set)
        }
    }

    /// 檢查值是否通過篩選
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::Unrestricted => true,
            Selection::Subset(set) => set.contains(value),
        }
    }

    /// 是否不限制
    pub fn is_unrestricted(&self) -> bool {
        matches!(self, Selection::Unrestricted)
    }
}

impl<T: Ord> Default for Selection<T> {
    fn default() -> Self {
        Selection::Unrestricted
    }
}

/// 排序欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    /// 排定日期
    ScheduledDate,
    /// 運距
    Distance,
    /// 分配量（袋）
    AllocatedAmount,
    /// 利潤率
    ProfitMargin,
    /// 每袋運費
    FreightPerUnit,
    /// 卡車數
    TrucksRequired,
}

/// 篩選與排序配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// 起始日期（含）
    pub date_start: NaiveDate,

    /// 結束日期（含）
    pub date_end: NaiveDate,

    /// 穀物選擇
    pub grains: Selection<Grain>,

    /// 賣方選擇
    pub sellers: Selection<String>,

    /// 買方選擇
    pub buyers: Selection<String>,

    /// 排序欄位
    pub sort_field: SortField,

    /// 是否遞增排序
    pub sort_ascending: bool,
}

impl FilterConfig {
    /// 創建新的配置（預設不限制類別、依排定日期遞增）
    pub fn new(date_start: NaiveDate, date_end: NaiveDate) -> Self {
        Self {
            date_start,
            date_end,
            grains: Selection::Unrestricted,
            sellers: Selection::Unrestricted,
            buyers: Selection::Unrestricted,
            sort_field: SortField::ScheduledDate,
            sort_ascending: true,
        }
    }

    /// 建構器模式：設置穀物選擇
    pub fn with_grains(mut self, grains: Selection<Grain>) -> Self {
        self.grains = grains;
        self
    }

    /// 建構器模式：設置賣方選擇
    pub fn with_sellers(mut self, sellers: Selection<String>) -> Self {
        self.sellers = sellers;
        self
    }

    /// 建構器模式：設置買方選擇
    pub fn with_buyers(mut self, buyers: Selection<String>) -> Self {
        self.buyers = buyers;
        self
    }

    /// 建構器模式：設置排序
    pub fn with_sort(mut self, field: SortField, ascending: bool) -> Self {
        self.sort_field = field;
        self.sort_ascending = ascending;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_unrestricted_matches_all() {
        let selection: Selection<String> = Selection::Unrestricted;
        assert!(selection.matches(&"anything".to_string()));
    }

    #[test]
    fn test_selection_subset() {
        let selection = Selection::from_values(vec![Grain::Corn, Grain::Wheat]);
        assert!(selection.matches(&Grain::Corn));
        assert!(!selection.matches(&Grain::Rice));
        assert!(!selection.is_unrestricted());
    }

    #[test]
    fn test_empty_values_normalize_to_unrestricted() {
        // 空集合等同不限制（UI「清除」塞入全集時行為一致）
        let selection: Selection<String> = Selection::from_values(Vec::new());
        assert!(selection.is_unrestricted());
        assert!(selection.matches(&"any seller".to_string()));
    }

    #[test]
    fn test_config_builder() {
        let config = FilterConfig::new(
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 8, 7).unwrap(),
        )
        .with_grains(Selection::from_values(vec![Grain::Soybean]))
        .with_sort(SortField::Distance, false);

        assert_eq!(config.sort_field, SortField::Distance);
        assert!(!config.sort_ascending);
        assert!(config.sellers.is_unrestricted());
        assert!(!config.grains.is_unrestricted());
    }
}
