use crate::error::{Operand, Result};
use crate::{Orientation, RotationMatrix};

/// Compose two rotations.
///
/// Returns `base_to_prev · prev_to_next`, the orientation of the next frame
/// relative to the base. Operand order matters, rotations do not commute.
/// The product is not rounded.
#[inline]
pub fn compose(base_to_prev: &RotationMatrix, prev_to_next: &RotationMatrix) -> RotationMatrix {
    RotationMatrix::from_matrix_unchecked(base_to_prev.matrix() * prev_to_next.matrix())
}

/// Rotation relative to the base frame (frame 0).
#[derive(Clone, Debug, PartialEq)]
pub struct ComposedRotation {
    name: String,
    matrix: RotationMatrix,
}

impl ComposedRotation {
    /// Compose the base-relative rotation of the previous frame with the
    /// elementary rotation from the previous frame to the next.
    pub fn new(
        name: impl ToString,
        base_to_prev: &RotationMatrix,
        prev_to_next: &RotationMatrix,
    ) -> Self {
        Self {
            name: name.to_string(),
            matrix: compose(base_to_prev, prev_to_next),
        }
    }

    /// Compose two matrix objects.
    pub fn from_orientations(
        name: impl ToString,
        base_to_prev: &impl Orientation,
        prev_to_next: &impl Orientation,
    ) -> Self {
        Self::new(name, base_to_prev.matrix(), prev_to_next.matrix())
    }

    /// Compose operands of unknown shape given as rows.
    ///
    /// Fails with a dimension mismatch when either operand is not a 3x3
    /// numeric matrix. The error is labelled with `name` and names the
    /// offending operand.
    pub fn from_rows(
        name: impl ToString,
        base_to_prev: &[Vec<f64>],
        prev_to_next: &[Vec<f64>],
    ) -> Result<Self> {
        let name = name.to_string();

        let base_to_prev = RotationMatrix::from_rows(&name, base_to_prev)
            .map_err(|e| e.in_operand(Operand::BaseToPrev))?;
        let prev_to_next = RotationMatrix::from_rows(&name, prev_to_next)
            .map_err(|e| e.in_operand(Operand::PrevToNext))?;

        Ok(Self::new(name, &base_to_prev, &prev_to_next))
    }
}

impl Orientation for ComposedRotation {
    fn name(&self) -> &str {
        &self.name
    }

    fn matrix(&self) -> &RotationMatrix {
        &self.matrix
    }
}
