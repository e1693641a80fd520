use num_traits::{One, Zero};
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

use crate::error::MatrixError;

pub trait Element:  // Avoid repeating all the traits
    Clone
    + Zero
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + std::fmt::Display
    + std::fmt::Debug
{
}

impl<T> Element for T where
    T: Clone
        + Zero
        + PartialEq
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + std::fmt::Display
        + std::fmt::Debug
{
}

/// Dense row-major matrix with a fixed shape.
///
/// A matrix built with `create(m, n, false)` owns no cells until `m` rows have
/// been pushed; until then every arithmetic operation is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) cells: Vec<T>,
}

pub type IntMatrix = Matrix<i64>;

impl<T: Element> Matrix<T> {
    pub fn create(rows: usize, cols: usize, zero_fill: bool) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::Empty);
        }

        let cells = if zero_fill {
            vec![T::zero(); rows * cols]
        } else {
            Vec::with_capacity(rows * cols)
        };

        Ok(Matrix { rows, cols, cells })
    }

    /// Takes ownership of `lines`; every line must be as long as the first one.
    pub fn from_rows(lines: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let cols = lines.first().map(|l| l.len()).unwrap_or(0);

        if let Some((row, line)) = lines.iter().enumerate().find(|(_, l)| l.len() != cols) {
            return Err(MatrixError::Shape {
                row,
                expected: cols,
                found: line.len(),
            });
        }
        if lines.is_empty() || cols == 0 {
            return Err(MatrixError::Empty);
        }

        Ok(Matrix {
            rows: lines.len(),
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    pub fn zero(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Self::create(rows, cols, true)
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_populated(&self) -> bool {
        self.cells.len() == self.rows * self.cols
    }

    pub(crate) fn ensure_populated(&self) -> Result<(), MatrixError> {
        if self.is_populated() {
            Ok(())
        } else {
            Err(MatrixError::Unpopulated {
                expected: self.rows,
                filled: self.cells.len() / self.cols,
            })
        }
    }

    /// Appends a row to a matrix created without zero fill.
    pub fn push_row(&mut self, row: Vec<T>) -> Result<(), MatrixError> {
        let filled = self.cells.len() / self.cols;
        if filled == self.rows {
            return Err(MatrixError::TooManyRows { rows: self.rows });
        }
        if row.len() != self.cols {
            return Err(MatrixError::Shape {
                row: filled,
                expected: self.cols,
                found: row.len(),
            });
        }

        self.cells.extend(row);
        Ok(())
    }

    /// Drops every cell, keeping the declared shape.
    pub fn reset(&mut self) {
        self.cells.clear();
    }

    pub fn set_row(&mut self, index: usize, row: Vec<T>) -> Result<(), MatrixError> {
        let filled = self.cells.len() / self.cols;
        if index >= filled {
            return Err(MatrixError::RowOutOfBounds {
                index,
                rows: filled,
            });
        }
        if row.len() != self.cols {
            return Err(MatrixError::Shape {
                row: index,
                expected: self.cols,
                found: row.len(),
            });
        }

        for (cell, value) in self.cells[index * self.cols..(index + 1) * self.cols]
            .iter_mut()
            .zip(row)
        {
            *cell = value;
        }
        Ok(())
    }

    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col].clone()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }

    pub fn rows_iter(&self) -> std::slice::Chunks<'_, T> {
        self.cells.chunks(self.cols)
    }

    pub fn transpose(&self) -> Result<Matrix<T>, MatrixError> {
        self.ensure_populated()?;

        Ok(Matrix {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.at(r, c)))
                .collect(),
        })
    }
}

impl<T: Element + One> Matrix<T> {
    pub fn identity(n: usize) -> Result<Matrix<T>, MatrixError> {
        if n == 0 {
            return Err(MatrixError::Empty);
        }

        Ok(Matrix {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        })
    }
}

impl<T: Element + SampleUniform + PartialOrd> Matrix<T> {
    /// Every cell is drawn uniformly from `[low, high)`.
    pub fn random<R: Rng>(
        rows: usize,
        cols: usize,
        low: T,
        high: T,
        rng: &mut R,
    ) -> Result<Matrix<T>, MatrixError> {
        if low >= high {
            return Err(MatrixError::InvalidRange);
        }

        let mut mat = Self::create(rows, cols, false)?;
        for _ in 0..rows {
            mat.push_row(
                (0..cols)
                    .map(|_| rng.gen_range(low.clone()..high.clone()))
                    .collect(),
            )?;
        }
        Ok(mat)
    }

    pub fn random_default<R: Rng>(
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<Matrix<T>, MatrixError>
    where
        T: From<u8>,
    {
        Self::random(rows, cols, T::from(0u8), T::from(10u8), rng)
    }
}

impl<T> Index<usize> for Matrix<T> {
    type Output = [T];

    fn index(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    fn index_mut(&mut self, row: usize) -> &mut [T] {
        &mut self.cells[row * self.cols..(row + 1) * self.cols]
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
