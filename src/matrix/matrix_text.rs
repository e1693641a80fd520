use itertools::Itertools;
use log::debug;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::MatrixError;
use crate::matrix::matrix::{Element, Matrix};

impl<T: Element> Matrix<T> {
    /// One line per row, cells separated by a single space, trailing newline.
    pub fn to_text(&self) -> String {
        self.rows_iter()
            .map(|row| row.iter().join(" ") + "\n")
            .collect()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), MatrixError> {
        let path = path.as_ref();
        debug!("saving {:?} matrix to {}", self.shape(), path.display());
        fs::write(path, self.to_text())?;
        Ok(())
    }
}

impl<T: Element + FromStr> Matrix<T> {
    pub fn parse_text(source: &str) -> Result<Matrix<T>, MatrixError> {
        let rows = source
            .lines()
            .enumerate()
            .map(|(i, line)| {
                line.split_whitespace()
                    .map(|token| {
                        token.parse::<T>().map_err(|_| MatrixError::Parse {
                            line: i + 1,
                            token: token.to_string(),
                        })
                    })
                    .collect::<Result<Vec<T>, MatrixError>>()
            })
            .collect::<Result<Vec<Vec<T>>, MatrixError>>()?;

        Matrix::from_rows(rows)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Matrix<T>, MatrixError> {
        let path = path.as_ref();
        let mat = Self::parse_text(&fs::read_to_string(path)?)?;
        debug!("loaded {:?} matrix from {}", mat.shape(), path.display());
        Ok(mat)
    }
}

impl<T: Element> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl<T: Element + FromStr> FromStr for Matrix<T> {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_text(s)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::error::MatrixError;
    use crate::matrix::matrix::{IntMatrix, Matrix};

    #[test]
    fn test_matrix_to_text() {
        let a = IntMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(a.to_text(), "1 2 3\n4 5 6\n");
        assert_eq!(format!("{}", a), a.to_text());

        let b = IntMatrix::from_rows(vec![vec![-10], vec![200]]).unwrap();
        assert_eq!(b.to_string(), "-10\n200\n");
    }

    #[test]
    fn test_matrix_parse_text() {
        let a = IntMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(IntMatrix::parse_text(&a.to_text()).unwrap(), a);

        let loose: IntMatrix = "  1\t2   3\n4 5 6".parse().unwrap();
        assert_eq!(loose, a);

        assert!(matches!(
            IntMatrix::parse_text("1 2 3\n4 5\n"),
            Err(MatrixError::Shape {
                row: 1,
                expected: 3,
                found: 2
            })
        ));
        assert!(matches!(
            IntMatrix::parse_text("1 2\n\n3 4\n"),
            Err(MatrixError::Shape { row: 1, .. })
        ));
        assert!(matches!(IntMatrix::parse_text(""), Err(MatrixError::Empty)));

        match IntMatrix::parse_text("1 2\n3 x\n") {
            Err(MatrixError::Parse { line, token }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected {:?}", other),
        }

        let f = Matrix::<f64>::parse_text("0.5 1\n-2 3.25\n").unwrap();
        assert_eq!(f.to_rows(), vec![vec![0.5, 1.0], vec![-2.0, 3.25]]);
    }

    #[test]
    fn test_matrix_save_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.txt");

        let a = IntMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        a.save(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1 2 3\n4 5 6\n");
        assert_eq!(IntMatrix::load(&path).unwrap(), a);

        assert!(matches!(
            IntMatrix::load(dir.path().join("missing.txt")),
            Err(MatrixError::Io(_))
        ));
    }
}
