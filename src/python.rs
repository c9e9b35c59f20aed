use std::collections::HashMap;
use std::path::Path;

use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::{to_file, DbfError, FritzAdr as RustFritzAdr, IoOptions};

fn to_py_err(err: DbfError) -> PyErr {
    match err {
        DbfError::InvalidSchema(_) => {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
        }
        _ => PyErr::new::<pyo3::exceptions::PyIOError, _>(err.to_string()),
    }
}

/// A Python wrapper for FritzAdr.
#[pyclass(name = "FritzAdr")]
pub struct PyFritzAdr {
    inner: RustFritzAdr,
}

#[pymethods]
impl PyFritzAdr {
    /// Create an empty table with 19 or 21 fields.
    #[new]
    #[pyo3(signature = (fields = 21, windows_1252 = false))]
    pub fn new(fields: usize, windows_1252: bool) -> PyResult<Self> {
        let options = if windows_1252 {
            IoOptions::fritz_adr()
        } else {
            IoOptions::default()
        };
        let inner = RustFritzAdr::with_options(fields, options).map_err(to_py_err)?;
        Ok(PyFritzAdr { inner })
    }

    /// Append a record given as a dict of field name to value. None values are skipped.
    pub fn add_record(&mut self, record: HashMap<String, Option<String>>) {
        self.inner.add_optional_record(record);
    }

    /// Get the complete .dbf image.
    pub fn get_database<'py>(&self, py: Python<'py>) -> Bound<'py, PyBytes> {
        PyBytes::new_bound(py, &self.inner.get_database())
    }

    /// Write the .dbf image to a file.
    pub fn to_file(&self, path: &str) -> PyResult<()> {
        to_file(&self.inner, Path::new(path)).map_err(to_py_err)
    }

    /// Get the number of records.
    pub fn __len__(&self) -> usize {
        self.inner.len()
    }
}

/// A Python module implemented in Rust.
#[pymodule]
fn fritz_adr_dbf(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyFritzAdr>()?;
    Ok(())
}
