//! 手動調整帳冊

use haulplan_core::{HaulError, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 一筆生效中的手動調整
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualAdjustment {
    /// 調整ID
    pub id: Uuid,

    /// 貨載記錄ID
    pub record_id: u32,

    /// 手動指定的卡車數
    pub manual_trucks: u32,

    /// 被取代的引擎計算值
    pub previous_trucks: u32,
}

impl ManualAdjustment {
    /// 創建新的調整
    pub fn new(record_id: u32, manual_trucks: u32, previous_trucks: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            record_id,
            manual_trucks,
            previous_trucks,
        }
    }
}

/// 調整統計摘要
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentSummary {
    /// 集合總筆數
    pub total_loads: usize,
    /// 帶手動調整的筆數
    pub adjusted_loads: usize,
    /// 調整比例（%）
    pub adjusted_pct: f64,
}

/// 生效中調整的帳冊（記憶體內，每筆記錄至多一項）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdjustmentLedger {
    entries: Vec<ManualAdjustment>,
}

impl AdjustmentLedger {
    /// 創建空帳冊
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// 登記調整；同一記錄的舊調整會被取代
    pub fn record(&mut self, adjustment: ManualAdjustment) {
        self.entries.retain(|e| e.record_id != adjustment.record_id);
        self.entries.push(adjustment);
    }

    /// 查詢某記錄的調整
    pub fn get(&self, record_id: u32) -> Option<&ManualAdjustment> {
        self.entries.iter().find(|e| e.record_id == record_id)
    }

    /// 移除某記錄的調整
    pub fn remove(&mut self, record_id: u32) -> Option<ManualAdjustment> {
        let index = self.entries.iter().position(|e| e.record_id == record_id)?;
        Some(self.entries.remove(index))
    }

    /// 生效中的調整
    pub fn active(&self) -> &[ManualAdjustment] {
        &self.entries
    }

    /// 清空帳冊
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// 帳冊筆數
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否為空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 匯出為 JSON（交給 UI 宿主保存）
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| HaulError::LedgerError(e.to_string()))
    }

    /// 由 JSON 匯入
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| HaulError::LedgerError(e.to_string()))
    }
}
