use pyo3::exceptions::{PyIndexError, PyOSError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyType;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::MatrixError;
use crate::matrix::matrix::IntMatrix;

impl From<MatrixError> for PyErr {
    fn from(error: MatrixError) -> PyErr {
        match error {
            MatrixError::Io(e) => PyOSError::new_err(e.to_string()),
            MatrixError::RowOutOfBounds { .. } => PyIndexError::new_err(error.to_string()),
            _ => PyValueError::new_err(error.to_string()),
        }
    }
}

/// Python view of an integer matrix.
#[derive(Debug, Clone)]
#[pyclass(name = "Matrix")]
pub struct MatrixPy {
    pub inner: IntMatrix,
}

impl From<IntMatrix> for MatrixPy {
    fn from(inner: IntMatrix) -> Self {
        MatrixPy { inner }
    }
}

#[pymethods]
impl MatrixPy {
    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<i64>>) -> PyResult<Self> {
        Ok(IntMatrix::from_rows(lines)?.into())
    }

    #[classmethod]
    pub fn make_zero(_cls: &Bound<PyType>, rows: usize, cols: usize) -> PyResult<Self> {
        Ok(IntMatrix::zero(rows, cols)?.into())
    }

    #[classmethod]
    #[pyo3(signature = (rows, cols, low=0, high=10, seed=None))]
    pub fn make_random(
        _cls: &Bound<PyType>,
        rows: usize,
        cols: usize,
        low: i64,
        high: i64,
        seed: Option<u64>,
    ) -> PyResult<Self> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(IntMatrix::random(rows, cols, low, high, &mut rng)?.into())
    }

    #[classmethod]
    pub fn read_grid(_cls: &Bound<PyType>, path: &str) -> PyResult<Self> {
        Ok(IntMatrix::load(path)?.into())
    }

    pub fn save(&self, path: &str) -> PyResult<()> {
        Ok(self.inner.save(path)?)
    }

    pub fn to_list(&self) -> Vec<Vec<i64>> {
        self.inner.to_rows()
    }

    pub fn transpose(&self) -> PyResult<MatrixPy> {
        Ok(self.inner.transpose()?.into())
    }

    #[getter]
    #[allow(non_snake_case)]
    pub fn T(&self) -> PyResult<MatrixPy> {
        self.transpose()
    }

    pub fn get_rank(&self) -> (usize, usize) {
        self.inner.shape()
    }

    #[getter]
    pub fn shape(&self) -> (usize, usize) {
        self.inner.shape()
    }

    pub fn __add__(&self, rhs: &MatrixPy) -> PyResult<MatrixPy> {
        Ok((&self.inner + &rhs.inner)?.into())
    }

    pub fn __sub__(&self, rhs: &MatrixPy) -> PyResult<MatrixPy> {
        Ok((&self.inner - &rhs.inner)?.into())
    }

    pub fn __mul__(&self, rhs: &MatrixPy) -> PyResult<MatrixPy> {
        Ok((&self.inner * &rhs.inner)?.into())
    }

    pub fn __eq__(&self, rhs: &MatrixPy) -> bool {
        self.inner == rhs.inner
    }

    pub fn __getitem__(&self, idx: usize) -> PyResult<Vec<i64>> {
        match self.inner.rows_iter().nth(idx) {
            Some(row) => Ok(row.to_vec()),
            None => Err(PyIndexError::new_err("row index out of range")),
        }
    }

    pub fn __setitem__(&mut self, idx: usize, row: Vec<i64>) -> PyResult<()> {
        Ok(self.inner.set_row(idx, row)?)
    }

    pub fn __str__(&self) -> String {
        self.inner.to_text()
    }

    pub fn __repr__(&self) -> String {
        format!(
            "Matrix(rows={:?}, shape={:?})",
            self.inner.to_rows(),
            self.inner.shape()
        )
    }
}
