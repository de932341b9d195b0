// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

//! Orientation of the joints of a serial manipulator.
//!
//! Every joint is described by an [`ElementaryRotation`] about a single
//! principal axis, relative to the previous joint. Chaining these rotations
//! with [`ComposedRotation`] yields the orientation of each joint relative to
//! the base frame. A [`JointChain`] folds an ordered list of joints into all
//! base relative frames at once.
//!
//! ```
//! use jointframe_core::{JointChain, JointSpec, Orientation};
//!
//! let solution = JointChain::new()
//!     .add_joint(JointSpec::new("z", Some(10.0)))
//!     .add_joint(JointSpec::new("y", Some(20.0)))
//!     .solve()
//!     .unwrap();
//!
//! assert_eq!(solution.effector().unwrap().name(), "R_02");
//! ```

pub mod axis;
pub mod chain;
pub mod compose;
pub mod elementary;
pub mod error;
pub mod matrix;
pub mod named;

pub use nalgebra;

pub use self::axis::Axis;
pub use self::chain::{ChainSolution, JointChain, JointSpec};
pub use self::compose::{compose, ComposedRotation};
pub use self::elementary::ElementaryRotation;
pub use self::error::{Error, Result};
pub use self::matrix::RotationMatrix;
pub use self::named::{NamedMatrix, Orientation};

pub mod consts {
    /// Number of decimal digits elementary rotation entries are rounded to.
    pub const PRECISION: i32 = 5;

    /// Tolerance for orthogonality and determinant checks on elementary rotations.
    ///
    /// Entries carry up to half a unit in the last rounded digit. Products of
    /// two entries, as in `R·Rᵀ`, then deviate by up to about 1.4e-5.
    pub const ROUNDING_TOLERANCE: f64 = 2e-5;
}
