use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::error::{Error, MismatchReason, Result};
use crate::Axis;

/// Round a value to a fixed number of decimal digits.
///
/// Halfway cases round away from zero.
#[inline]
pub fn round_decimal(value: f64, digits: i32) -> f64 {
    let factor = 10_f64.powi(digits);
    (value * factor).round() / factor
}

/// A 3x3 rotation matrix.
///
/// The matrix is expected to be orthogonal with determinant +1, but this is
/// never enforced. Use [`RotationMatrix::is_proper`] to check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationMatrix(Matrix3<f64>);

impl RotationMatrix {
    /// Exact identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self(Matrix3::identity())
    }

    /// Construct the elementary rotation about `axis` by `theta` radians.
    ///
    /// Every trigonometric entry is rounded to [`crate::consts::PRECISION`]
    /// decimal digits. The angle is ignored for [`Axis::Identity`].
    pub fn elementary(axis: Axis, theta: f64) -> Self {
        let cos = round_decimal(theta.cos(), crate::consts::PRECISION);
        let sin = round_decimal(theta.sin(), crate::consts::PRECISION);
        let neg_sin = round_decimal(-theta.sin(), crate::consts::PRECISION);

        match axis {
            Axis::X => Self(Matrix3::new(
                1.0, 0.0, 0.0, //
                0.0, cos, neg_sin, //
                0.0, sin, cos,
            )),
            Axis::Y => Self(Matrix3::new(
                cos, 0.0, sin, //
                0.0, 1.0, 0.0, //
                neg_sin, 0.0, cos,
            )),
            Axis::Z => Self(Matrix3::new(
                cos, neg_sin, 0.0, //
                sin, cos, 0.0, //
                0.0, 0.0, 1.0,
            )),
            Axis::Identity => Self::identity(),
        }
    }

    /// Wrap a matrix without any checks.
    #[inline]
    pub fn from_matrix_unchecked(matrix: Matrix3<f64>) -> Self {
        Self(matrix)
    }

    /// Construct from row-major data of unknown shape.
    ///
    /// Fails with [`Error::DimensionMismatch`] naming `name` when the data is
    /// not 3x3 or holds a non-finite entry.
    pub fn from_rows(name: impl ToString, rows: &[Vec<f64>]) -> Result<Self> {
        if rows.len() != 3 {
            let cols = rows.first().map_or(0, |row| row.len());
            return Err(Error::dimension_mismatch(
                name,
                MismatchReason::Shape {
                    rows: rows.len(),
                    cols,
                },
            ));
        }

        if let Some(row) = rows.iter().find(|row| row.len() != 3) {
            return Err(Error::dimension_mismatch(
                name,
                MismatchReason::Shape {
                    rows: 3,
                    cols: row.len(),
                },
            ));
        }

        let matrix = Matrix3::from_fn(|row, col| rows[row][col]);

        Self::checked(name, matrix)
    }

    fn checked(name: impl ToString, matrix: Matrix3<f64>) -> Result<Self> {
        for row in 0..3 {
            for col in 0..3 {
                if !matrix[(row, col)].is_finite() {
                    return Err(Error::dimension_mismatch(
                        name,
                        MismatchReason::NonFinite { row, col },
                    ));
                }
            }
        }

        Ok(Self(matrix))
    }

    /// Retrieve the underlying matrix.
    #[inline]
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.0
    }

    /// Row-major copy of the entries.
    pub fn rows(&self) -> [[f64; 3]; 3] {
        let mut rows = [[0.0; 3]; 3];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, value) in row.iter_mut().enumerate() {
                *value = self.0[(r, c)];
            }
        }
        rows
    }

    /// Axis `index` of the rotated frame, expressed in the reference frame.
    ///
    /// This is column `index` of the matrix.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not 0, 1 or 2.
    #[inline]
    pub fn axis(&self, index: usize) -> Vector3<f64> {
        self.0.column(index).into_owned()
    }

    /// All three axes of the rotated frame.
    pub fn axes(&self) -> [Vector3<f64>; 3] {
        [self.axis(0), self.axis(1), self.axis(2)]
    }

    /// Transposed matrix, the inverse rotation for a proper rotation.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.0.determinant()
    }

    /// Largest deviation of `R·Rᵀ` from the identity.
    pub fn orthogonality_error(&self) -> f64 {
        (self.0 * self.0.transpose() - Matrix3::identity()).amax()
    }

    /// Whether the matrix is orthogonal with determinant +1 within `tolerance`.
    pub fn is_proper(&self, tolerance: f64) -> bool {
        self.orthogonality_error() <= tolerance && (self.determinant() - 1.0).abs() <= tolerance
    }

    /// Roll, pitch and yaw in radians.
    pub fn euler_angles(&self) -> (f64, f64, f64) {
        Rotation3::from_matrix_unchecked(self.0).euler_angles()
    }
}

impl Default for RotationMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl serde::Serialize for RotationMatrix {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.rows(), serializer)
    }
}

/// Rows in handwritten form, one `[a, b, c]` per line.
///
/// The formatter precision applies to every entry.
impl std::fmt::Display for RotationMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, row) in self.rows().iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }

            write!(f, "[")?;
            for (col, value) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, ", ")?;
                }
                match f.precision() {
                    Some(precision) => write!(f, "{:.*}", precision, value)?,
                    None => write!(f, "{}", value)?,
                }
            }
            write!(f, "]")?;
        }

        Ok(())
    }
}
