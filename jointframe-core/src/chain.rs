use std::str::FromStr;

use crate::error::{Error, Result, SpecReason};
use crate::{ComposedRotation, ElementaryRotation, Orientation, RotationMatrix};

/// Joint description as supplied by the caller.
///
/// The axis is kept as text so that an unknown selector is reported against
/// the joint name at construction time.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct JointSpec {
    /// Optional label, defaults to `R_<prev><next>`.
    #[serde(default)]
    pub name: Option<String>,
    /// Axis selector, one of `X`, `Y`, `Z` or `I` in either case.
    pub axis: String,
    /// Joint angle in degrees.
    #[serde(default)]
    pub angle: Option<f64>,
}

impl JointSpec {
    pub fn new(axis: impl ToString, angle: Option<f64>) -> Self {
        Self {
            name: None,
            axis: axis.to_string(),
            angle,
        }
    }

    pub fn with_name(mut self, name: impl ToString) -> Self {
        self.name = Some(name.to_string());
        self
    }
}

/// Parse the textual joint form `[NAME=]AXIS[:ANGLE]`, e.g. `z:10` or `R_01=z:10`.
impl FromStr for JointSpec {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let malformed = || Error::invalid_spec(s, SpecReason::Malformed(s.to_string()));

        let (name, joint) = match s.split_once('=') {
            Some((name, joint)) if !name.trim().is_empty() => (Some(name.trim()), joint),
            Some(_) => return Err(malformed()),
            None => (None, s),
        };

        let (axis, angle) = match joint.split_once(':') {
            Some((axis, angle)) => {
                let angle = angle.trim().parse::<f64>().map_err(|_| malformed())?;
                (axis.trim(), Some(angle))
            }
            None => (joint.trim(), None),
        };

        if axis.is_empty() {
            return Err(malformed());
        }

        Ok(Self {
            name: name.map(|name| name.to_string()),
            axis: axis.to_string(),
            angle,
        })
    }
}

impl std::fmt::Display for JointSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{}=", name)?;
        }
        write!(f, "{}", self.axis)?;
        if let Some(angle) = self.angle {
            write!(f, ":{}", angle)?;
        }
        Ok(())
    }
}

/// Ordered sequence of joints from the base outwards.
#[derive(Clone, Debug, Default)]
pub struct JointChain {
    joints: Vec<JointSpec>,
}

impl JointChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a joint at the end of the chain.
    pub fn add_joint(mut self, joint: JointSpec) -> Self {
        self.joints.push(joint);
        self
    }

    #[inline]
    pub fn joints(&self) -> &[JointSpec] {
        &self.joints
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// Construct every elementary rotation and fold them into base relative frames.
    ///
    /// Frame `k` is frame `k - 1` composed with elementary rotation `k`,
    /// starting from the identity. The first joint that fails to construct
    /// aborts the solve.
    pub fn solve(&self) -> Result<ChainSolution> {
        let elementary = self
            .joints
            .iter()
            .enumerate()
            .map(|(index, joint)| {
                let name = joint
                    .name
                    .clone()
                    .unwrap_or_else(|| frame_name(index, index + 1));

                ElementaryRotation::new(name, &joint.axis, joint.angle)
            })
            .collect::<Result<Vec<_>>>()?;

        let frames = elementary
            .iter()
            .enumerate()
            .scan(RotationMatrix::identity(), |base_to_prev, (index, rotation)| {
                let frame =
                    ComposedRotation::new(frame_name(0, index + 1), base_to_prev, rotation.matrix());
                *base_to_prev = *frame.matrix();
                Some(frame)
            })
            .collect::<Vec<_>>();

        for frame in &frames {
            log::debug!(
                "{} composed, determinant {:.6}",
                frame.name(),
                frame.matrix().determinant()
            );
        }

        Ok(ChainSolution { elementary, frames })
    }
}

impl FromIterator<JointSpec> for JointChain {
    fn from_iter<T: IntoIterator<Item = JointSpec>>(iter: T) -> Self {
        Self {
            joints: iter.into_iter().collect(),
        }
    }
}

fn frame_name(from: usize, to: usize) -> String {
    if from < 10 && to < 10 {
        format!("R_{}{}", from, to)
    } else {
        format!("R_{}_{}", from, to)
    }
}

/// Orientations of every joint in the chain.
#[derive(Clone, Debug)]
pub struct ChainSolution {
    elementary: Vec<ElementaryRotation>,
    frames: Vec<ComposedRotation>,
}

impl ChainSolution {
    /// Rotations relative to the previous frame, in chain order.
    #[inline]
    pub fn elementary(&self) -> &[ElementaryRotation] {
        &self.elementary
    }

    /// Rotations relative to the base frame, in chain order.
    #[inline]
    pub fn frames(&self) -> &[ComposedRotation] {
        &self.frames
    }

    /// Orientation of the last joint relative to the base frame.
    #[inline]
    pub fn effector(&self) -> Option<&ComposedRotation> {
        self.frames.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ROUNDING_TOLERANCE;

    fn robot_arm() -> JointChain {
        JointChain::new()
            .add_joint(JointSpec::new("z", Some(10.0)))
            .add_joint(JointSpec::new("y", Some(20.0)))
            .add_joint(JointSpec::new("y", Some(30.0)))
            .add_joint(JointSpec::new("y", Some(40.0)))
            .add_joint(JointSpec::new("z", Some(50.0)))
    }

    #[test]
    fn test_joint_spec_parse() {
        assert_eq!(
            "z:10".parse::<JointSpec>().unwrap(),
            JointSpec::new("z", Some(10.0))
        );
        assert_eq!(
            "R_01 = Y : -12.5".parse::<JointSpec>().unwrap(),
            JointSpec::new("Y", Some(-12.5)).with_name("R_01")
        );
        assert_eq!("i".parse::<JointSpec>().unwrap(), JointSpec::new("i", None));
    }

    #[test]
    fn test_joint_spec_parse_malformed() {
        assert!("z:ten".parse::<JointSpec>().is_err());
        assert!("=z:10".parse::<JointSpec>().is_err());
        assert!(":10".parse::<JointSpec>().is_err());
        assert!("".parse::<JointSpec>().is_err());
    }

    #[test]
    fn test_joint_spec_display() {
        let joint = JointSpec::new("z", Some(10.0)).with_name("R_01");
        assert_eq!(joint.to_string(), "R_01=z:10");
        assert_eq!(joint.to_string().parse::<JointSpec>().unwrap(), joint);
    }

    #[test]
    fn test_solve_robot_arm() {
        let solution = robot_arm().solve().unwrap();

        let names = solution
            .elementary()
            .iter()
            .map(|rotation| rotation.name())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["R_01", "R_12", "R_23", "R_34", "R_45"]);

        let names = solution
            .frames()
            .iter()
            .map(|frame| frame.name())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["R_01", "R_02", "R_03", "R_04", "R_05"]);

        let expected = [
            [-0.1330248404487761, -0.11161810663113078, 0.9848096075723962],
            [0.754403500721981, 0.6330264390095532, 0.1736499308038572],
            [-0.6427897438607046, 0.7660396947479803, -3.1506584459717324e-06],
        ];

        let effector = solution.effector().unwrap();
        assert_eq!(effector.name(), "R_05");

        // Exact, no tolerance. The product is fully determined by the rounded
        // elementary entries and the row-by-column summation order.
        assert_eq!(effector.matrix().rows(), expected);

        assert!(effector.matrix().is_proper(1e-4));
    }

    #[test]
    fn test_solve_matches_manual_composition() {
        let solution = robot_arm().solve().unwrap();
        let elementary = solution.elementary();

        let r_02 = ComposedRotation::from_orientations("R_02", &elementary[0], &elementary[1]);
        let r_03 = ComposedRotation::from_orientations("R_03", &r_02, &elementary[2]);

        assert_eq!(solution.frames()[0].matrix(), elementary[0].matrix());
        assert_eq!(solution.frames()[2], r_03);
    }

    #[test]
    fn test_solve_first_frame_is_elementary() {
        let solution = JointChain::new()
            .add_joint(JointSpec::new("x", Some(45.0)))
            .solve()
            .unwrap();

        assert_eq!(solution.frames().len(), 1);
        assert!(solution.effector().unwrap().matrix().is_proper(ROUNDING_TOLERANCE));
    }

    #[test]
    fn test_solve_named_joints() {
        let solution = JointChain::new()
            .add_joint(JointSpec::new("z", Some(90.0)).with_name("shoulder"))
            .add_joint(JointSpec::new("i", None))
            .solve()
            .unwrap();

        assert_eq!(solution.elementary()[0].name(), "shoulder");
        assert_eq!(solution.elementary()[1].name(), "R_12");
        assert_eq!(solution.frames()[1].matrix(), solution.frames()[0].matrix());
    }

    #[test]
    fn test_solve_invalid_joint_aborts() {
        let chain = robot_arm().add_joint(JointSpec::new("Q", Some(5.0)));

        let error = chain.solve().unwrap_err();
        assert_eq!(error.name(), "R_56");
        assert!(matches!(
            error,
            Error::InvalidMatrixSpec {
                reason: SpecReason::UnknownAxis(_),
                ..
            }
        ));
    }

    #[test]
    fn test_solve_empty_chain() {
        let solution = JointChain::new().solve().unwrap();

        assert!(solution.frames().is_empty());
        assert!(solution.effector().is_none());
    }

    #[test]
    fn test_chain_from_iter() {
        let chain = ["z:10", "y:20"]
            .iter()
            .map(|joint| joint.parse::<JointSpec>())
            .collect::<Result<JointChain>>()
            .unwrap();

        assert_eq!(chain.len(), 2);
        assert_eq!(chain.joints()[1], JointSpec::new("y", Some(20.0)));
    }

    #[test]
    fn test_frame_name() {
        assert_eq!(frame_name(0, 5), "R_05");
        assert_eq!(frame_name(9, 10), "R_9_10");
    }
}
