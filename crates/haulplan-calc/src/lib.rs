//! # Haulplan Calculation Engines
//!
//! 核心推導、篩選、彙總、評分與模擬引擎。
//! 所有引擎皆為無狀態轉換：集合進、集合/摘要出。

pub mod aggregation;
pub mod derivation;
pub mod filtering;
pub mod metrics;
pub mod scoring;
pub mod simulation;

// Re-export 主要類型
pub use aggregation::{aggregate_by_grain, aggregate_by_month, GrainSummary, MonthSummary};
pub use derivation::{apply_figures, DerivationCalculator, DerivedFigures};
pub use filtering::{apply_filters, unique_buyers, unique_grains, unique_sellers};
pub use metrics::{dashboard_metrics, top_by_distance, top_by_volume, DashboardMetrics};
pub use scoring::{rank_routes, score, RankedRoute, ScoreBand};
pub use simulation::{
    compare, delta, simulate, Delta, ScenarioComparison, ScenarioTotals, SimulatedFigures,
    SimulationReport,
};
