//! Python 綁定實現

use chrono::NaiveDate;
use haulplan_core::{FleetParams, HaulError};
use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;
use rust_decimal::Decimal;

/// 引擎錯誤對應到 Python 例外
fn to_py_err(err: HaulError) -> PyErr {
    match err {
        HaulError::RecordNotFound(_) => PyKeyError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// 解析 ISO 日期字串
fn parse_date(value: &str) -> PyResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| PyValueError::new_err(format!("Invalid date '{}': {}", value, e)))
}

/// Python 車隊參數
#[pyclass(name = "FleetParams")]
#[derive(Clone)]
pub struct PyFleetParams {
    #[pyo3(get, set)]
    pub truck_capacity: f64,
    #[pyo3(get, set)]
    pub average_speed_kmh: f64,
    #[pyo3(get, set)]
    pub work_hours_per_day: f64,
    #[pyo3(get, set)]
    pub load_unload_hours: f64,
    #[pyo3(get, set)]
    pub harvest_capacity_per_day: Option<f64>,
}

#[pymethods]
impl PyFleetParams {
    #[new]
    #[pyo3(signature = (
        truck_capacity=900.0,
        average_speed_kmh=60.0,
        work_hours_per_day=10.0,
        load_unload_hours=2.0,
        harvest_capacity_per_day=None
    ))]
    fn new(
        truck_capacity: f64,
        average_speed_kmh: f64,
        work_hours_per_day: f64,
        load_unload_hours: f64,
        harvest_capacity_per_day: Option<f64>,
    ) -> Self {
        Self {
            truck_capacity,
            average_speed_kmh,
            work_hours_per_day,
            load_unload_hours,
            harvest_capacity_per_day,
        }
    }
}

/// 內部方法實現（不暴露給 Python）
impl PyFleetParams {
    /// 轉換為 Rust FleetParams（內部使用）
    pub(crate) fn to_rust_params(&self) -> PyResult<FleetParams> {
        let mut params = FleetParams::new(
            Decimal::try_from(self.truck_capacity).unwrap_or_default(),
            self.average_speed_kmh,
            self.work_hours_per_day,
            self.load_unload_hours,
        );
        if let Some(harvest) = self.harvest_capacity_per_day {
            params = params.with_harvest_capacity(Decimal::try_from(harvest).unwrap_or_default());
        }
        params.validate().map_err(to_py_err)?;
        Ok(params)
    }
}

/// Python 推導結果
#[pyclass(name = "DerivedFigures")]
pub struct PyDerivedFigures {
    #[pyo3(get)]
    pub trips_required: u32,
    #[pyo3(get)]
    pub round_trip_hours: f64,
    #[pyo3(get)]
    pub trips_per_truck_per_day: u32,
    #[pyo3(get)]
    pub trucks_required: u32,
    #[pyo3(get)]
    pub operation_days: u32,
}

/// 由裝載量與運距推導營運量
#[pyfunction]
pub fn derive(
    allocated_amount: f64,
    distance_km: f64,
    params: &PyFleetParams,
) -> PyResult<PyDerivedFigures> {
    let rust_params = params.to_rust_params()?;
    let figures = haulplan_calc::DerivationCalculator::derive(
        Decimal::try_from(allocated_amount).unwrap_or_default(),
        distance_km,
        &rust_params,
    )
    .map_err(to_py_err)?;

    Ok(PyDerivedFigures {
        trips_required: figures.trips_required,
        round_trip_hours: figures.round_trip_hours,
        trips_per_truck_per_day: figures.trips_per_truck_per_day,
        trucks_required: figures.trucks_required,
        operation_days: figures.operation_days,
    })
}

/// Python 排程看板
#[pyclass(name = "ScheduleBoard")]
pub struct PyScheduleBoard {
    inner: haulplan_board::ScheduleBoard,
}

#[pymethods]
impl PyScheduleBoard {
    #[new]
    fn new() -> Self {
        Self {
            inner: haulplan_board::ScheduleBoard::new(),
        }
    }

    /// 載入示範資料
    fn load_sample(&mut self, count: usize, params: &PyFleetParams) -> PyResult<usize> {
        let rust_params = params.to_rust_params()?;
        let records =
            haulplan_board::sample_shipments(count, &rust_params).map_err(to_py_err)?;
        self.inner.load(records);
        Ok(self.inner.len())
    }

    /// 集合筆數
    fn record_count(&self) -> usize {
        self.inner.len()
    }

    /// 手動覆寫卡車數；日期為 ISO 字串（可省略）
    #[pyo3(signature = (record_id, trucks, new_date=None))]
    fn apply_manual_trucks(
        &mut self,
        record_id: u32,
        trucks: u32,
        new_date: Option<&str>,
    ) -> PyResult<()> {
        let date = new_date.map(parse_date).transpose()?;
        self.inner
            .apply_manual_trucks(record_id, trucks, date)
            .map_err(to_py_err)?;
        Ok(())
    }

    /// 改期
    fn reschedule(&mut self, record_id: u32, new_date: &str) -> PyResult<()> {
        let date = parse_date(new_date)?;
        self.inner.reschedule(record_id, date).map_err(to_py_err)?;
        Ok(())
    }

    /// 還原單筆為自動計算
    fn restore_automatic(&mut self, record_id: u32, params: &PyFleetParams) -> PyResult<()> {
        let rust_params = params.to_rust_params()?;
        self.inner
            .restore_automatic(record_id, &rust_params)
            .map_err(to_py_err)?;
        Ok(())
    }

    /// 還原全部手動調整，回傳還原筆數
    fn clear_overrides(&mut self, params: &PyFleetParams) -> PyResult<usize> {
        let rust_params = params.to_rust_params()?;
        self.inner.clear_overrides(&rust_params).map_err(to_py_err)
    }

    /// 調整帳冊（JSON 字串）
    fn ledger_json(&self) -> PyResult<String> {
        self.inner.ledger().to_json().map_err(to_py_err)
    }

    /// 看板摘要指標（JSON 字串）
    fn metrics_json(&self) -> PyResult<String> {
        let metrics = haulplan_calc::dashboard_metrics(self.inner.records());
        serde_json::to_string(&metrics).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// 以假設參數模擬整個集合（JSON 字串報告）
    fn simulate_json(&self, params: &PyFleetParams) -> PyResult<String> {
        let rust_params = params.to_rust_params()?;
        let report =
            haulplan_calc::simulate(self.inner.records(), &rust_params).map_err(to_py_err)?;
        serde_json::to_string(&report).map_err(|e| PyValueError::new_err(e.to_string()))
    }
}
