//! Error types for rotation construction and composition.
//!
//! Both failure modes are local and synchronous. They are raised where the
//! matrix is built or composed and always carry the name of the offending
//! object, so the caller can report which frame went wrong.

use thiserror::Error;

use crate::Axis;

/// Why a selector and angle combination was refused.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecReason {
    /// The selector is not one of X, Y, Z or I.
    #[error("unknown axis selector '{0}'")]
    UnknownAxis(String),
    /// A principal axis rotation was requested without an angle.
    #[error("axis {0} requires an angle")]
    MissingAngle(Axis),
    /// The identity selector does not take an angle.
    #[error("identity does not take an angle, got {0}°")]
    AngleOnIdentity(f64),
    /// The angle is NaN or infinite.
    #[error("angle {0} is not a finite number")]
    NonFiniteAngle(f64),
    /// The textual joint form could not be parsed.
    #[error("malformed joint '{0}', expected [NAME=]AXIS[:ANGLE]")]
    Malformed(String),
}

/// Why an operand could not take part in a composition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MismatchReason {
    /// The operand is not 3x3.
    #[error("expected 3x3, got {rows}x{cols}")]
    Shape { rows: usize, cols: usize },
    /// The operand holds a NaN or infinite entry.
    #[error("entry ({row}, {col}) is not a finite number")]
    NonFinite { row: usize, col: usize },
}

/// Role of a matrix in a composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// A matrix checked on its own.
    Matrix,
    /// Left operand, the base-relative rotation of the previous frame.
    BaseToPrev,
    /// Right operand, the rotation from the previous frame to the next.
    PrevToNext,
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Matrix => write!(f, "matrix"),
            Self::BaseToPrev => write!(f, "base_to_prev"),
            Self::PrevToNext => write!(f, "prev_to_next"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Selector and angle combination not recognized at construction time.
    #[error("something went wrong in the definition of {name}: {reason}")]
    InvalidMatrixSpec { name: String, reason: SpecReason },
    /// Composition attempted on a non-3x3 or non-numeric operand.
    #[error("cannot compose {name}: {operand} {reason}")]
    DimensionMismatch {
        name: String,
        operand: Operand,
        reason: MismatchReason,
    },
}

impl Error {
    pub(crate) fn invalid_spec(name: impl ToString, reason: SpecReason) -> Self {
        Self::InvalidMatrixSpec {
            name: name.to_string(),
            reason,
        }
    }

    pub(crate) fn dimension_mismatch(name: impl ToString, reason: MismatchReason) -> Self {
        Self::DimensionMismatch {
            name: name.to_string(),
            operand: Operand::Matrix,
            reason,
        }
    }

    /// Attribute a dimension mismatch to an operand of a composition.
    pub(crate) fn in_operand(self, role: Operand) -> Self {
        match self {
            Self::DimensionMismatch { name, reason, .. } => Self::DimensionMismatch {
                name,
                operand: role,
                reason,
            },
            other => other,
        }
    }

    /// Name of the matrix object that failed.
    pub fn name(&self) -> &str {
        match self {
            Self::InvalidMatrixSpec { name, .. } => name,
            Self::DimensionMismatch { name, .. } => name,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
