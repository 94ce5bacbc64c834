//! Element helpers - per-formulation strategies producing local element matrices
//!
//! A helper describes one formulation (beam bending about one axis, shaft
//! torsion, ...) through its pointwise matrices N, B, D, Rho, Mu and J. The
//! generic engine in [`integration`] turns those into K, M and C with
//! Gauss quadrature sized from the declared polynomial degrees.
//!
//! All operations are pure functions of the element and the requested
//! coordinate, so helpers can be shared between threads.

pub mod euler_bernoulli;
pub mod integration;
pub mod shaft;

pub use euler_bernoulli::{BeamDirection, EulerBernoulliBeamHelper};
pub use shaft::ShaftHelper;

use serde::{Deserialize, Serialize};

use crate::elements::{Dof, Element, ElementLocalDof};
use crate::error::{FEAError, FEAResult};
use crate::loads::Load;
use crate::math::{Mat, Mat3};
use crate::options::IntegrationOptions;
use crate::results::{Displacement, Force};

/// Internal force components recovered at a point, keyed by the conjugate DOF
pub type InternalForce = Vec<(Dof, f64)>;

/// Polynomial degree bounds along one isoparametric axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PolynomialDegrees {
    /// Degree of the shape functions N
    pub shape: usize,
    /// Degree of the strain-displacement matrix B
    pub strain: usize,
    /// Degree of the Jacobian determinant
    pub jacobian: usize,
}

impl PolynomialDegrees {
    pub fn new(shape: usize, strain: usize, jacobian: usize) -> Self {
        Self {
            shape,
            strain,
            jacobian,
        }
    }
}

/// Formulation strategy for one element kind
///
/// Row 0 of `n_matrix_at` is the interpolation row; helpers may append rows
/// holding iso-space derivatives of the same shape functions.
pub trait ElementHelper: Send + Sync {
    /// Shape function matrix N at `xi`
    fn n_matrix_at(&self, element: &Element, xi: f64) -> FEAResult<Mat>;

    /// Strain-displacement matrix B at `xi`
    fn b_matrix_at(&self, element: &Element, xi: f64) -> FEAResult<Mat>;

    /// Row `i` of B at `xi`
    fn b_i_matrix_at(&self, element: &Element, i: usize, xi: f64) -> FEAResult<Mat>;

    /// Constitutive matrix D at `xi`
    fn d_matrix_at(&self, element: &Element, xi: f64) -> FEAResult<Mat>;

    /// Mass density matrix at `xi`
    fn rho_matrix_at(&self, element: &Element, xi: f64) -> FEAResult<Mat>;

    /// Damping density matrix at `xi`
    fn mu_matrix_at(&self, element: &Element, xi: f64) -> FEAResult<Mat>;

    /// Jacobian of the iso-to-local mapping at `xi`
    fn j_matrix_at(&self, element: &Element, xi: f64) -> FEAResult<Mat>;

    /// Isoparametric coordinate to distance from the start node
    fn iso_to_local(&self, element: &Element, xi: f64) -> FEAResult<f64>;

    /// Distance from the start node to isoparametric coordinate
    fn local_to_iso(&self, element: &Element, x: f64) -> FEAResult<f64>;

    /// Meaning of each row/column of the local matrices
    fn dof_order(&self, element: &Element) -> FEAResult<Vec<ElementLocalDof>>;

    /// Degree bounds indexed by isoparametric axis (ξ, η, ζ)
    fn polynomial_degrees(&self, element: &Element) -> FEAResult<[PolynomialDegrees; 3]>;

    fn local_equivalent_nodal_loads(&self, element: &Element, load: &Load) -> FEAResult<Vec<Force>>;

    /// Internal force at `xi` from nodal displacements in local coordinates
    fn local_internal_force_at(
        &self,
        element: &Element,
        local_displacements: &[Displacement],
        xi: f64,
    ) -> FEAResult<InternalForce>;

    /// Internal force at `xi` caused by a load with all nodes held fixed
    fn load_internal_force_at(&self, element: &Element, load: &Load, xi: f64) -> FEAResult<InternalForce>;

    /// Displacement at `xi` interpolated from nodal displacements in local coordinates
    fn local_displacement_at(
        &self,
        element: &Element,
        local_displacements: &[Displacement],
        xi: f64,
    ) -> FEAResult<Displacement>;

    /// Displacement at `xi` caused by a load with all nodes held fixed
    fn load_displacement_at(&self, element: &Element, load: &Load, xi: f64) -> FEAResult<Displacement>;

    fn integration_options(&self) -> IntegrationOptions {
        IntegrationOptions::default()
    }

    /// Whether this helper computes its own stiffness instead of the generic engine
    fn overrides_k_matrix_calculation(&self, _element: &Element, _transform: &Mat3) -> bool {
        false
    }

    fn calc_local_k_matrix(&self, element: &Element) -> FEAResult<Mat> {
        integration::calc_local_k_matrix(self, element)
    }

    fn calc_local_m_matrix(&self, element: &Element) -> FEAResult<Mat> {
        integration::calc_local_m_matrix(self, element)
    }

    fn calc_local_c_matrix(&self, element: &Element) -> FEAResult<Mat> {
        integration::calc_local_c_matrix(self, element)
    }

    fn n_max_order(&self, element: &Element) -> FEAResult<[usize; 3]> {
        Ok(self.polynomial_degrees(element)?.map(|d| d.shape))
    }

    fn b_max_order(&self, element: &Element) -> FEAResult<[usize; 3]> {
        Ok(self.polynomial_degrees(element)?.map(|d| d.strain))
    }

    fn det_j_order(&self, element: &Element) -> FEAResult<[usize; 3]> {
        Ok(self.polynomial_degrees(element)?.map(|d| d.jacobian))
    }
}

/// Local stiffness as an assembler should obtain it
///
/// Uses the helper's own stiffness when it overrides the calculation for this
/// transform, the generic integration engine otherwise.
pub fn local_k_matrix<H>(helper: &H, element: &Element, transform: &Mat3) -> FEAResult<Mat>
where
    H: ElementHelper + ?Sized,
{
    if helper.overrides_k_matrix_calculation(element, transform) {
        log::debug!("{} element: helper supplies its own stiffness", element.kind());
        helper.calc_local_k_matrix(element)
    } else {
        integration::calc_local_k_matrix(helper, element)
    }
}

pub(crate) fn check_iso(xi: f64) -> FEAResult<()> {
    if !(-1.0..=1.0).contains(&xi) {
        return Err(FEAError::OutOfRange(format!(
            "isoparametric coordinate {} outside [-1, 1]",
            xi
        )));
    }
    Ok(())
}

pub(crate) fn check_displacement_count(displacements: &[Displacement], nodes: usize) -> FEAResult<()> {
    if displacements.len() != nodes {
        return Err(FEAError::InvalidInput(format!(
            "expected {} nodal displacements, got {}",
            nodes,
            displacements.len()
        )));
    }
    Ok(())
}
