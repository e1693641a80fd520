use log::trace;
use std::ops;

use crate::error::MatrixError;
use crate::matrix::matrix::{Element, Matrix};

impl<T: Element> Matrix<T> {
    fn zip_with(
        &self,
        rhs: &Matrix<T>,
        op: impl Fn(T, T) -> T,
    ) -> Result<Matrix<T>, MatrixError> {
        self.ensure_populated()?;
        rhs.ensure_populated()?;
        if self.shape() != rhs.shape() {
            return Err(MatrixError::ShapeMismatch {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| op(a.to_owned(), b.to_owned()))
                .collect(),
        })
    }
}

impl<T: Element> ops::Add<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn add(self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<T: Element> ops::Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn sub(self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<T: Element> ops::Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    /// Row-by-row dot products against the transpose of `rhs`.
    fn mul(self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.ensure_populated()?;
        rhs.ensure_populated()?;
        if self.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        trace!(
            "multiplying {:?} by {:?}",
            self.shape(),
            rhs.shape()
        );

        let rhs_t = rhs.transpose()?;

        Ok(Matrix {
            rows: self.rows,
            cols: rhs.cols,
            cells: self
                .rows_iter()
                .flat_map(|row| {
                    rhs_t.rows_iter().map(move |col| {
                        row.iter()
                            .zip(col)
                            .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
                    })
                })
                .collect(),
        })
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::error::MatrixError;
    use crate::matrix::matrix::{IntMatrix, Matrix};
    use num_bigint::BigInt;

    #[test]
    fn test_matrix_add_sub() {
        let a = IntMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let b = IntMatrix::from_rows(vec![vec![7, 8, 9], vec![10, 11, 12]]).unwrap();

        let sum = (&a + &b).unwrap();
        assert_eq!(sum.to_rows(), vec![vec![8, 10, 12], vec![14, 16, 18]]);
        assert_eq!(sum, (&b + &a).unwrap());

        assert_eq!(
            (&b - &a).unwrap().to_rows(),
            vec![vec![6, 6, 6], vec![6, 6, 6]]
        );
        assert_eq!(
            (&a - &b).unwrap().to_rows(),
            vec![vec![-6, -6, -6], vec![-6, -6, -6]]
        );
        assert_eq!((&sum - &b).unwrap(), a);
    }

    #[test]
    fn test_matrix_shape_mismatch() {
        let a = IntMatrix::zero(2, 3).unwrap();
        let b = IntMatrix::zero(3, 2).unwrap();

        assert!(matches!(
            &a + &b,
            Err(MatrixError::ShapeMismatch {
                lhs: (2, 3),
                rhs: (3, 2)
            })
        ));
        assert!(matches!(&a - &b, Err(MatrixError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_matrix_mul() {
        let a = IntMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let b = IntMatrix::from_rows(vec![vec![7, 8], vec![9, 10], vec![11, 12]]).unwrap();

        let ab = (&a * &b).unwrap();
        assert_eq!(ab.shape(), (2, 2));
        assert_eq!(ab.to_rows(), vec![vec![58, 64], vec![139, 154]]);

        let ba = (&b * &a).unwrap();
        assert_eq!(ba.shape(), (3, 3));
        assert_ne!(ab, ba);

        let id = IntMatrix::identity(3).unwrap();
        assert_eq!((&a * &id).unwrap(), a);

        assert!(matches!(
            &a * &a,
            Err(MatrixError::DimensionMismatch {
                lhs: (2, 3),
                rhs: (2, 3)
            })
        ));
    }

    #[test]
    fn test_matrix_ops_unpopulated() {
        let a = IntMatrix::create(2, 2, false).unwrap();
        let b = IntMatrix::zero(2, 2).unwrap();

        assert!(matches!(&a + &b, Err(MatrixError::Unpopulated { .. })));
        assert!(matches!(&b - &a, Err(MatrixError::Unpopulated { .. })));
        assert!(matches!(&b * &a, Err(MatrixError::Unpopulated { .. })));
    }

    #[test]
    fn test_matrix_generic() {
        let bi = |s: &str| BigInt::parse_bytes(s.as_bytes(), 10).unwrap();

        let a = Matrix::<BigInt>::identity(2).unwrap();
        let b = Matrix::<BigInt>::from_rows(vec![vec![bi("2"), bi("3")], vec![bi("4"), bi("5")]])
            .unwrap();

        let c = (&a + &b).unwrap();
        assert_eq!(
            c.to_rows(),
            vec![vec![bi("3"), bi("3")], vec![bi("4"), bi("6")]]
        );

        let a = Matrix::<BigInt>::from_rows(vec![
            vec![
                bi("100000000000000000000000000000000000000000000000000000000000006"),
                bi("-101"),
            ],
            vec![bi("1"), bi("-1")],
        ])
        .unwrap();

        let c = (&a * &b).unwrap();
        assert_eq!(
            c.to_rows(),
            vec![
                vec![
                    bi("199999999999999999999999999999999999999999999999999999999999608"),
                    bi("299999999999999999999999999999999999999999999999999999999999513")
                ],
                vec![bi("-2"), bi("-2")]
            ]
        );

        let f = Matrix::<f64>::from_rows(vec![vec![0.5, 1.5]]).unwrap();
        assert_eq!(
            (&f * &f.transpose().unwrap()).unwrap().to_rows(),
            vec![vec![2.5]]
        );
    }
}
