//! Matrix math for homogeneous transforms
//!
//! Dense row-major matrices of `f64`. Transforms are 4x4, points are
//! 4x1 homogeneous columns.

use std::ops::Index;
use thiserror::Error;

/// Error type for matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// Operand shapes do not fit (`left` and `right` are (rows, cols))
    #[error("dimension mismatch: {left:?} x {right:?}")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
}

/// Dense row-major matrix
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self { rows, cols, data: vec![0.0; rows * cols] }
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Build from nested rows. Ragged or empty input is rejected.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, MathError> {
        let cols = rows.first().map(|r| r.len()).unwrap_or(0);
        if let Some(bad) = rows.iter().find(|r| r.len() != cols) {
            return Err(MathError::DimensionMismatch {
                left: (rows.len(), cols),
                right: (1, bad.len()),
            });
        }
        if cols == 0 {
            return Err(MathError::DimensionMismatch {
                left: (rows.len(), 0),
                right: (rows.len(), 0),
            });
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data: rows.iter().flatten().copied().collect(),
        })
    }

    /// 4x4 matrix from a fixed array
    pub fn from_array4(a: [[f64; 4]; 4]) -> Self {
        Self {
            rows: 4,
            cols: 4,
            data: a.iter().flatten().copied().collect(),
        }
    }

    /// Column vector (n x 1)
    pub fn column(values: &[f64]) -> Self {
        Self { rows: values.len(), cols: 1, data: values.to_vec() }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(row < self.rows && col < self.cols, "matrix index out of range");
        &self.data[row * self.cols + col]
    }
}

/// Standard matrix product `a * b`
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MathError> {
    if a.cols != b.rows {
        return Err(MathError::DimensionMismatch { left: a.shape(), right: b.shape() });
    }
    let mut result = Matrix::zeros(a.rows, b.cols);
    for i in 0..a.rows {
        for k in 0..a.cols {
            let lhs = a.data[i * a.cols + k];
            for j in 0..b.cols {
                result.data[i * b.cols + j] += lhs * b.data[k * b.cols + j];
            }
        }
    }
    Ok(result)
}

// =============================================================================
// 4x4 transform builders
// =============================================================================

/// Translation along Z (the view "zoom")
pub fn translation_z(z: f64) -> Matrix {
    Matrix::from_array4([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Right-handed rotation about the X axis (radians)
pub fn rotation_x(angle: f64) -> Matrix {
    let (s, c) = angle.sin_cos();
    Matrix::from_array4([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, -s, 0.0],
        [0.0, s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Right-handed rotation about the Y axis (radians)
pub fn rotation_y(angle: f64) -> Matrix {
    let (s, c) = angle.sin_cos();
    Matrix::from_array4([
        [c, 0.0, s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Pinhole projection onto a `width` x `height` viewport.
///
/// Scale is `(width / 3) / tan(fov / 2)`, X is mirrored and the principal
/// point is the viewport centre. The bottom row copies camera-space z into w.
pub fn perspective(width: usize, height: usize, fov: f64) -> Matrix {
    let s = (width as f64 / 3.0) / (fov / 2.0).tan();
    let cx = width as f64 / 2.0;
    let cy = height as f64 / 2.0;
    Matrix::from_array4([
        [-s, 0.0, cx, 0.0],
        [0.0, s, cy, 0.0],
        [0.0, 0.0, 0.0, 1.0],
        [0.0, 0.0, 1.0, 0.0],
    ])
}
