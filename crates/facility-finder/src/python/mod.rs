//! Python bindings for facility search.
//!
//! Exposes the searcher and the interactive panel so a notebook can drive the
//! same search-and-select flow as the web form.

use std::{path::PathBuf, sync::Arc};

use facility_finder_data::{DataSource, FacilityId, FacilityRecord};
use pyo3::{
    exceptions::{PyKeyError, PyRuntimeError, PyValueError},
    prelude::*,
};

use crate::{FacilityPanel, FacilitySearcher, FacilitySearcherBuilder};

/// Python ints select numeric ids; strs are resolved against the store so
/// text ids such as "001" work.
fn extract_id(searcher: &FacilitySearcher, id: &Bound<'_, PyAny>) -> PyResult<FacilityId> {
    if let Ok(number) = id.extract::<i64>() {
        return Ok(FacilityId::Number(number));
    }
    id.extract::<String>()
        .map(|text| searcher.store().resolve_id(&text))
        .map_err(|_| PyValueError::new_err("Facility ID must be an int or a str"))
}

fn id_to_py(py: Python<'_>, id: &FacilityId) -> PyResult<PyObject> {
    Ok(match id {
        FacilityId::Number(n) => n.into_pyobject(py)?.into_any().unbind(),
        FacilityId::Text(s) => s.into_pyobject(py)?.into_any().unbind(),
    })
}

/// A single facility record.
#[pyclass(name = "Facility", frozen)]
#[derive(Clone)]
struct PyFacility {
    inner: FacilityRecord,
}

#[pymethods]
impl PyFacility {
    /// The facility ID, as an int or str depending on the data file.
    #[getter]
    fn id(&self, py: Python<'_>) -> PyResult<PyObject> {
        id_to_py(py, &self.inner.id)
    }

    /// The facility name.
    #[getter]
    fn name(&self) -> &str {
        &self.inner.name
    }

    /// Additional attributes from the data file as a JSON object string.
    fn attributes_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner.extra).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Facility(id={}, name={:?})", self.inner.id, self.inner.name)
    }
}

/// Keyword search and selection over a loaded facility list.
///
/// Args:
///     path: Optional path to a facilities JSON file. The embedded sample
///         dataset is used when omitted.
///
/// Raises:
///     RuntimeError: If the data file cannot be loaded.
#[pyclass(name = "FacilitySearcher", frozen)]
#[derive(Clone)]
struct PyFacilitySearcher {
    inner: Arc<FacilitySearcher>,
}

#[pymethods]
impl PyFacilitySearcher {
    #[new]
    #[pyo3(signature = (path=None))]
    fn py_new(py: Python<'_>, path: Option<PathBuf>) -> PyResult<Self> {
        let source = path.map_or(DataSource::Embedded, DataSource::File);
        py.allow_threads(|| {
            FacilitySearcherBuilder::new()
                .data_source(source)
                .build()
                .map(|inner| Self {
                    inner: Arc::new(inner),
                })
                .map_err(|e| {
                    PyRuntimeError::new_err(format!("Failed to load facility data: {e}"))
                })
        })
    }

    /// Return every facility whose name contains the keyword, ignoring case.
    ///
    /// An empty keyword returns every facility.
    fn search(&self, keyword: &str) -> Vec<PyFacility> {
        self.inner
            .search(keyword)
            .into_iter()
            .map(|record| PyFacility {
                inner: record.clone(),
            })
            .collect()
    }

    /// Return the facility with the given ID.
    ///
    /// Raises:
    ///     KeyError: If no facility has that ID.
    fn select_by_id(&self, id: &Bound<'_, PyAny>) -> PyResult<PyFacility> {
        let id = extract_id(&self.inner, id)?;
        self.inner
            .select_by_id(&id)
            .map(|record| PyFacility {
                inner: record.clone(),
            })
            .map_err(|e| PyKeyError::new_err(e.to_string()))
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        self.inner.summary()
    }
}

/// Widget-panel state for notebooks: keyword search, results text and selection.
#[pyclass(name = "FacilityPanel")]
struct PyFacilityPanel {
    inner: FacilityPanel,
}

#[pymethods]
impl PyFacilityPanel {
    #[new]
    fn py_new(searcher: &PyFacilitySearcher) -> Self {
        Self {
            inner: FacilityPanel::new(Arc::clone(&searcher.inner)),
        }
    }

    /// Dropdown options as `(name, id)` tuples.
    fn options(&self, py: Python<'_>) -> PyResult<Vec<(String, PyObject)>> {
        self.inner
            .options()
            .into_iter()
            .map(|(name, id)| Ok((name, id_to_py(py, &id)?)))
            .collect()
    }

    /// Run a search; returns the number of matches.
    fn search(&mut self, keyword: &str) -> usize {
        self.inner.search(keyword)
    }

    /// Select a facility by ID.
    ///
    /// Raises:
    ///     KeyError: If no facility has that ID. The selection is cleared.
    fn select(&mut self, id: &Bound<'_, PyAny>) -> PyResult<PyFacility> {
        let id = extract_id(self.inner.searcher(), id)?;
        self.inner
            .select(&id)
            .map(|inner| PyFacility { inner })
            .map_err(|e| PyKeyError::new_err(e.to_string()))
    }

    #[getter]
    fn keyword(&self) -> &str {
        self.inner.keyword()
    }

    #[getter]
    fn status(&self) -> &str {
        self.inner.status()
    }

    #[getter]
    fn results(&self) -> &str {
        self.inner.results()
    }

    #[getter]
    fn selected(&self) -> &str {
        self.inner.selected()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

/// Facility keyword search for Python notebooks.
#[pymodule]
fn facility_finder(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Forward Rust log records to Python logging
    pyo3_log::init();

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    m.add_class::<PyFacility>()?;
    m.add_class::<PyFacilitySearcher>()?;
    m.add_class::<PyFacilityPanel>()?;

    Ok(())
}
