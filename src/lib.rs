#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod error;

pub mod matrix {
    pub mod matrix;
    #[cfg(feature = "python")]
    pub mod matrix_py;
    pub mod matrix_ops;
    pub mod matrix_text;
}

pub use error::MatrixError;
pub use matrix::matrix::{Element, IntMatrix, Matrix};

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn dense_matrix(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<matrix::matrix_py::MatrixPy>()?;
    Ok(())
}
