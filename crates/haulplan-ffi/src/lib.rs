//! # Haulplan FFI
//!
//! Python 綁定層（PyO3），供儀表板宿主呼叫引擎

use pyo3::prelude::*;

pub mod python;

/// Python 模組註冊
#[pymodule]
fn haulplan_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyFleetParams>()?;
    m.add_class::<python::PyDerivedFigures>()?;
    m.add_class::<python::PyScheduleBoard>()?;
    m.add_function(pyo3::wrap_pyfunction!(python::derive, m)?)?;
    Ok(())
}
