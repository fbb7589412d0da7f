//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GameConfig, PlayerId};
use crate::session::GameError;

/// Convert a rejected call into a Python `ValueError`.
pub(crate) fn to_py_err(err: GameError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    #[new]
    fn new(id: u64) -> Self {
        Self(PlayerId::new(id))
    }

    /// Get the raw ID value.
    #[getter]
    fn id(&self) -> u64 {
        self.0.raw()
    }

    fn __repr__(&self) -> String {
        format!("PlayerId({})", self.0.raw())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.raw()
    }
}

/// Python wrapper for GameConfig.
#[pyclass(name = "GameConfig")]
#[derive(Clone, Debug)]
pub struct PyGameConfig(pub GameConfig);

#[pymethods]
impl PyGameConfig {
    /// Create a configuration.
    ///
    /// # Arguments
    /// - max_attempts: Attempts per game before the automatic restart
    /// - arrangement_len: Bottles per arrangement
    /// - min_bottle / max_bottle: Inclusive range of legal values
    /// - require_distinct: Reject arrangements that repeat a value
    #[new]
    #[pyo3(signature = (
        max_attempts = 5,
        arrangement_len = 5,
        min_bottle = 1,
        max_bottle = 5,
        require_distinct = false
    ))]
    fn new(
        max_attempts: u8,
        arrangement_len: usize,
        min_bottle: u8,
        max_bottle: u8,
        require_distinct: bool,
    ) -> PyResult<Self> {
        let config = GameConfig {
            max_attempts,
            arrangement_len,
            min_bottle,
            max_bottle,
            require_distinct,
        };
        // validate() panics on unplayable configs; check the same rules here
        // so Python sees an exception instead.
        if max_attempts == 0 || arrangement_len == 0 || min_bottle > max_bottle {
            return Err(PyValueError::new_err(format!("unplayable config: {:?}", config)));
        }
        if require_distinct && arrangement_len > config.bottle_values() {
            return Err(PyValueError::new_err(format!(
                "unplayable config: {} distinct bottles from {} values",
                arrangement_len,
                config.bottle_values()
            )));
        }
        Ok(Self(config))
    }

    #[getter]
    fn max_attempts(&self) -> u8 {
        self.0.max_attempts
    }

    #[getter]
    fn arrangement_len(&self) -> usize {
        self.0.arrangement_len
    }

    #[getter]
    fn require_distinct(&self) -> bool {
        self.0.require_distinct
    }

    fn __repr__(&self) -> String {
        format!(
            "GameConfig(max_attempts={}, arrangement_len={}, bottles={}..={}, distinct={})",
            self.0.max_attempts,
            self.0.arrangement_len,
            self.0.min_bottle,
            self.0.max_bottle,
            self.0.require_distinct
        )
    }
}
