//! Generic integration of element matrices
//!
//! K = ∫ Bᵀ D B |J| dξ, M = ∫ Nᵀ Rho N |J| dξ and C = ∫ Nᵀ Mu N |J| dξ over
//! [-1, 1]. Point counts come from the helper's declared degree bounds so
//! polynomial formulations are integrated exactly.

use super::{ElementHelper, PolynomialDegrees};
use crate::elements::Element;
use crate::error::{FEAError, FEAResult};
use crate::loads::LineLoadProfile;
use crate::math::gauss::points_for_degree;
use crate::math::{GaussianIntegrator, Mat};

/// Which density matrix weights the N-based integrals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Density {
    Mass,
    Damping,
}

fn xi_degrees<H>(helper: &H, element: &Element) -> FEAResult<PolynomialDegrees>
where
    H: ElementHelper + ?Sized,
{
    Ok(helper.polynomial_degrees(element)?[0])
}

fn point_count<H>(helper: &H, degree: usize) -> usize
where
    H: ElementHelper + ?Sized,
{
    points_for_degree(degree) + helper.integration_options().extra_points
}

/// Interpolation row of N (row 0)
fn shape_row<H>(helper: &H, element: &Element, xi: f64) -> FEAResult<Mat>
where
    H: ElementHelper + ?Sized,
{
    Ok(helper.n_matrix_at(element, xi)?.rows(0, 1).into_owned())
}

fn det_j<H>(helper: &H, element: &Element, xi: f64) -> FEAResult<f64>
where
    H: ElementHelper + ?Sized,
{
    let j = helper.j_matrix_at(element, xi)?;
    if !j.is_square() {
        return Err(FEAError::InvalidInput(format!(
            "Jacobian must be square, got {:?}",
            j.shape()
        )));
    }
    Ok(j.determinant())
}

fn check_dimension<H>(helper: &H, element: &Element, m: &Mat) -> FEAResult<()>
where
    H: ElementHelper + ?Sized,
{
    let n = helper.dof_order(element)?.len();
    if m.nrows() != n || m.ncols() != n {
        return Err(FEAError::InvalidInput(format!(
            "local matrix is {:?} but the helper declares {} DOFs",
            m.shape(),
            n
        )));
    }
    Ok(())
}

/// Local stiffness matrix by Gauss integration of Bᵀ D B |J|
pub fn calc_local_k_matrix<H>(helper: &H, element: &Element) -> FEAResult<Mat>
where
    H: ElementHelper + ?Sized,
{
    let deg = xi_degrees(helper, element)?;
    let points = point_count(helper, 2 * deg.strain + deg.jacobian);

    log::debug!("{} element: stiffness with {} Gauss points", element.kind(), points);

    let k = GaussianIntegrator::new(-1.0, 1.0, points)?.integrate(|xi| {
        let b = helper.b_matrix_at(element, xi)?;
        let d = helper.d_matrix_at(element, xi)?;
        let j = det_j(helper, element, xi)?;
        Ok(b.transpose() * d * b * j.abs())
    })?;

    check_dimension(helper, element, &k)?;
    Ok(k)
}

/// Local consistent mass matrix by Gauss integration of Nᵀ Rho N |J|
pub fn calc_local_m_matrix<H>(helper: &H, element: &Element) -> FEAResult<Mat>
where
    H: ElementHelper + ?Sized,
{
    calc_local_density_matrix(helper, element, Density::Mass)
}

/// Local damping matrix by Gauss integration of Nᵀ Mu N |J|
pub fn calc_local_c_matrix<H>(helper: &H, element: &Element) -> FEAResult<Mat>
where
    H: ElementHelper + ?Sized,
{
    calc_local_density_matrix(helper, element, Density::Damping)
}

fn calc_local_density_matrix<H>(helper: &H, element: &Element, density: Density) -> FEAResult<Mat>
where
    H: ElementHelper + ?Sized,
{
    let deg = xi_degrees(helper, element)?;
    let points = point_count(helper, 2 * deg.shape + deg.jacobian);

    log::debug!(
        "{} element: {:?} matrix with {} Gauss points",
        element.kind(),
        density,
        points
    );

    let m = GaussianIntegrator::new(-1.0, 1.0, points)?.integrate(|xi| {
        let n = shape_row(helper, element, xi)?;
        let rho = match density {
            Density::Mass => helper.rho_matrix_at(element, xi)?,
            Density::Damping => helper.mu_matrix_at(element, xi)?,
        };
        let j = det_j(helper, element, xi)?;
        Ok(n.transpose() * rho * n * j.abs())
    })?;

    check_dimension(helper, element, &m)?;
    Ok(m)
}

/// ∫ N q(ξ) |J| dξ over the loaded range of a line load
///
/// `component` is the projection of the load's unit direction that this
/// helper's DOFs resist. Returns the 1 x n row of work-equivalent nodal
/// values in the helper's DOF order.
pub fn equivalent_nodal_load_row<H>(
    helper: &H,
    element: &Element,
    profile: &LineLoadProfile,
    component: f64,
) -> FEAResult<Mat>
where
    H: ElementHelper + ?Sized,
{
    let deg = xi_degrees(helper, element)?;
    let points = point_count(helper, deg.shape + profile.degree + deg.jacobian);

    log::debug!(
        "{} element: equivalent nodal loads over [{}, {}] with {} Gauss points",
        element.kind(),
        profile.xi0,
        profile.xi1,
        points
    );

    GaussianIntegrator::new(profile.xi0, profile.xi1, points)?.integrate(|xi| {
        let n = shape_row(helper, element, xi)?;
        let j = det_j(helper, element, xi)?;
        Ok(n * (profile.magnitude_at(xi) * component * j.abs()))
    })
}
