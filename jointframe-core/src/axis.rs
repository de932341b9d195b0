use std::str::FromStr;

use crate::error::SpecReason;

/// Principal axis of an elementary rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Roll axis.
    X,
    /// Pitch axis.
    Y,
    /// Yaw axis.
    Z,
    /// No rotation.
    Identity,
}

impl FromStr for Axis {
    type Err = SpecReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "X" => Ok(Self::X),
            "Y" => Ok(Self::Y),
            "Z" => Ok(Self::Z),
            "I" => Ok(Self::Identity),
            _ => Err(SpecReason::UnknownAxis(s.to_string())),
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::Y => write!(f, "Y"),
            Self::Z => write!(f, "Z"),
            Self::Identity => write!(f, "I"),
        }
    }
}
