//! # Haulplan
//!
//! 穀物運輸排程引擎：推導、篩選、彙總、評分與情境模擬。
//! 本 crate 為門面，重新匯出各成員 crate 的主要類型。

pub use haulplan_core::{
    Derived, FilterConfig, FleetParams, Grain, HaulError, LoadStatus, Priority, Result,
    Selection, ShipmentRecord, SortField,
};

pub use haulplan_calc::{
    aggregate_by_grain, aggregate_by_month, apply_filters, compare, dashboard_metrics, delta,
    rank_routes, score, simulate, DashboardMetrics, Delta, DerivationCalculator, DerivedFigures,
    GrainSummary, MonthSummary, RankedRoute, ScenarioTotals, ScoreBand, SimulationReport,
};

pub use haulplan_board::{sample_shipments, AdjustmentLedger, ManualAdjustment, ScheduleBoard};
