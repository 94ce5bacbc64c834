//! FEA Elements - element-level core of a 3D structural finite element engine
//!
//! This library turns straight two-node members into the matrices and load
//! vectors a global assembler needs, supporting:
//! - Euler-Bernoulli bending about local y or z (cubic Hermite)
//! - Shaft torsion (linear interpolation)
//! - Stiffness, consistent mass and damping matrices by Gauss quadrature
//! - Equivalent nodal loads for uniform and partial trapezoidal line loads
//! - Internal force and displacement recovery along the member
//!
//! ## Example
//! ```rust
//! use fea_elements::prelude::*;
//!
//! let bar = BarElement::new(
//!     Node::new(0.0, 0.0, 0.0),
//!     Node::new(6.0, 0.0, 0.0),
//!     Section::rectangular(0.3, 0.5),
//!     Material::steel(),
//! );
//! let element = Element::from(bar);
//!
//! let helper = EulerBernoulliBeamHelper::new(BeamDirection::Z);
//! let k = helper.calc_local_k_matrix(&element).unwrap();
//! assert_eq!(k.shape(), (4, 4));
//!
//! let load = Load::from(UniformLoad::local_y(-10_000.0));
//! let forces = helper.local_equivalent_nodal_loads(&element, &load).unwrap();
//! assert!((forces[0].fy + 30_000.0).abs() < 1e-6);
//! ```

pub mod elements;
pub mod error;
pub mod helpers;
pub mod loads;
pub mod math;
pub mod options;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::elements::{
        global_dof_indices, BarElement, Constraint, Dof, DofConstraint, Element, ElementLocalDof,
        Material, MaterialProvider, Node, QuadElement, Section, SectionProvider, TaperedSection,
    };
    pub use crate::error::{FEAError, FEAResult};
    pub use crate::helpers::{
        local_k_matrix, BeamDirection, ElementHelper, EulerBernoulliBeamHelper, InternalForce,
        PolynomialDegrees, ShaftHelper,
    };
    pub use crate::loads::{
        ConcentratedLoad, CoordinationSystem, Load, PartialTrapezoidalLoad, UniformLoad,
    };
    pub use crate::math::{GaussianIntegrator, Mat, TransformManager, Vec3};
    pub use crate::options::IntegrationOptions;
    pub use crate::results::{Displacement, Force};
}
