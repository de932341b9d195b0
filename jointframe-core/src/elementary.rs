use crate::error::{Error, Result, SpecReason};
use crate::{Axis, Orientation, RotationMatrix};

/// Rotation relative to the previous robot frame.
///
/// An elementary rotation turns about a single principal axis. It is the
/// building block of every joint in the chain.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementaryRotation {
    name: String,
    axis: Axis,
    angle: Option<f64>,
    matrix: RotationMatrix,
}

impl ElementaryRotation {
    /// Construct an elementary rotation from a textual axis selector.
    ///
    /// The selector is one of `X`, `Y`, `Z` or `I` in either case. The angle is
    /// in degrees and must be given for every selector except `I`, which must
    /// be constructed without one.
    pub fn new(name: impl ToString, selector: &str, angle: Option<f64>) -> Result<Self> {
        let name = name.to_string();

        let axis = selector
            .parse::<Axis>()
            .map_err(|reason| Error::invalid_spec(&name, reason))?;

        Self::with_axis(name, axis, angle)
    }

    /// Construct an elementary rotation from an axis.
    pub fn with_axis(name: impl ToString, axis: Axis, angle: Option<f64>) -> Result<Self> {
        let name = name.to_string();

        let matrix = match (axis, angle) {
            (Axis::Identity, None) => RotationMatrix::identity(),
            (Axis::Identity, Some(angle)) => {
                return Err(Error::invalid_spec(name, SpecReason::AngleOnIdentity(angle)));
            }
            (axis, None) => {
                return Err(Error::invalid_spec(name, SpecReason::MissingAngle(axis)));
            }
            (_, Some(angle)) if !angle.is_finite() => {
                return Err(Error::invalid_spec(name, SpecReason::NonFiniteAngle(angle)));
            }
            (axis, Some(angle)) => RotationMatrix::elementary(axis, angle.to_radians()),
        };

        log::trace!("Constructed {} about {} by {:?}°", name, axis, angle);

        Ok(Self {
            name,
            axis,
            angle,
            matrix,
        })
    }

    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Joint angle in degrees, absent for the identity.
    #[inline]
    pub fn angle(&self) -> Option<f64> {
        self.angle
    }
}

impl Orientation for ElementaryRotation {
    fn name(&self) -> &str {
        &self.name
    }

    fn matrix(&self) -> &RotationMatrix {
        &self.matrix
    }
}

impl std::fmt::Display for ElementaryRotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.angle {
            Some(angle) => write!(f, "{} {}={:.2}°", self.name, self.axis, angle),
            None => write!(f, "{} {}", self.name, self.axis),
        }
    }
}
