//! Euler-Bernoulli beam bending about one local axis
//!
//! Cubic Hermite interpolation of the transverse deflection on a straight
//! two-node bar. Bending about local z (`BeamDirection::Z`) works on
//! (DY, RZ) with RZ = dv/dx. Bending about local y (`BeamDirection::Y`)
//! works on (DZ, RY) with RY = -dw/dx, so its rotation-weighted shape
//! functions carry the opposite sign.

use serde::{Deserialize, Serialize};

use super::integration::equivalent_nodal_load_row;
use super::{check_displacement_count, check_iso, ElementHelper, InternalForce, PolynomialDegrees};
use crate::elements::{BarElement, Dof, Element, ElementLocalDof};
use crate::error::{FEAError, FEAResult};
use crate::loads::{Load, LineLoadProfile};
use crate::math::gauss::points_for_degree;
use crate::math::{GaussianIntegrator, Mat, Vec3};
use crate::options::IntegrationOptions;
use crate::results::{Displacement, Force};

/// Bending plane of a beam helper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeamDirection {
    /// Bending about local y: deflection along local z
    Y,
    /// Bending about local z: deflection along local y
    Z,
}

impl BeamDirection {
    /// (deflection, rotation) DOFs of this bending plane
    pub fn dofs(self) -> (Dof, Dof) {
        match self {
            BeamDirection::Y => (Dof::Dz, Dof::Ry),
            BeamDirection::Z => (Dof::Dy, Dof::Rz),
        }
    }

    /// Sign relating the rotation DOF to the slope of the deflection
    fn rotation_sign(self) -> f64 {
        match self {
            BeamDirection::Y => -1.0,
            BeamDirection::Z => 1.0,
        }
    }

    /// Component of a local vector along the deflection axis
    fn deflection_component(self, v: &Vec3) -> f64 {
        match self {
            BeamDirection::Y => v.z,
            BeamDirection::Z => v.y,
        }
    }
}

/// Number of DOFs of one bending plane (two per node)
const BEAM_DOFS: usize = 4;

/// Beam bending formulation for a single bending plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EulerBernoulliBeamHelper {
    pub direction: BeamDirection,
    #[serde(default)]
    pub options: IntegrationOptions,
}

impl EulerBernoulliBeamHelper {
    pub fn new(direction: BeamDirection) -> Self {
        Self {
            direction,
            options: IntegrationOptions::default(),
        }
    }

    pub fn with_options(mut self, options: IntegrationOptions) -> Self {
        self.options = options;
        self
    }

    /// Iso-space derivatives of the shape functions at `xi`
    ///
    /// Row r holds the r-th derivative with respect to ξ; columns follow
    /// [`dof_order`](ElementHelper::dof_order). Rotation columns carry the
    /// axis sign and released columns are zero.
    fn shape_table(&self, bar: &BarElement, xi: f64) -> FEAResult<[[f64; BEAM_DOFS]; 4]> {
        check_iso(xi)?;
        let j = bar.length()? / 2.0;
        let mut table = hermite_derivatives(xi, j);

        let s = self.direction.rotation_sign();
        for row in table.iter_mut() {
            row[1] *= s;
            row[3] *= s;
        }

        let (deflection, rotation) = self.direction.dofs();
        for (col, (node, dof)) in [(0, deflection), (0, rotation), (1, deflection), (1, rotation)]
            .into_iter()
            .enumerate()
        {
            if bar.release(node)?.is_released(dof) {
                for row in table.iter_mut() {
                    row[col] = 0.0;
                }
            }
        }

        Ok(table)
    }

    /// Flexural rigidity EI about the given bending axis
    fn flexural_rigidity(bar: &BarElement, xi: f64, direction: BeamDirection) -> f64 {
        let section = bar.section.properties_at(xi);
        let material = bar.material.properties_at(xi);
        let inertia = match direction {
            BeamDirection::Y => section.iy,
            BeamDirection::Z => section.iz,
        };
        material.ex * inertia
    }

    /// Nodal values of this bending plane in DOF order
    fn nodal_values(&self, displacements: &[Displacement]) -> FEAResult<[f64; BEAM_DOFS]> {
        check_displacement_count(displacements, 2)?;
        let (deflection, rotation) = self.direction.dofs();
        Ok([
            displacements[0].get(deflection),
            displacements[0].get(rotation),
            displacements[1].get(deflection),
            displacements[1].get(rotation),
        ])
    }

    /// Shear force and bending moment on the cut of [start, x]
    fn internal_force(&self, shear: f64, moment: f64) -> InternalForce {
        let (deflection, rotation) = self.direction.dofs();
        vec![(deflection, shear), (rotation, moment)]
    }

    /// Running load resultants over [x0, min(x, x1)]
    ///
    /// Returns (∫ q dx', ∫ (x - x') q dx') with x the physical position of `xi`.
    fn running_load(
        &self,
        profile: &LineLoadProfile,
        component: f64,
        length: f64,
        xi: f64,
    ) -> FEAResult<(f64, f64)> {
        let upper = xi.min(profile.xi1);
        if upper <= profile.xi0 {
            return Ok((0.0, 0.0));
        }

        let j = length / 2.0;
        let x = length * (xi + 1.0) / 2.0;
        let points = points_for_degree(profile.degree + 1) + self.options.extra_points;
        let integrator = GaussianIntegrator::new(profile.xi0, upper, points)?;

        let resultant = integrator.integrate(|t| {
            let q = profile.magnitude_at(t) * component;
            let lever = x - length * (t + 1.0) / 2.0;
            Ok(Mat::from_row_slice(1, 2, &[q * j, lever * q * j]))
        })?;

        Ok((resultant[(0, 0)], resultant[(0, 1)]))
    }
}

/// Cubic Hermite shape functions on [-1, 1] and their ξ-derivatives
///
/// Columns are N1, M1, N2, M2 where the M functions are scaled by the
/// Jacobian `j` so they interpolate physical slopes.
fn hermite_derivatives(xi: f64, j: f64) -> [[f64; BEAM_DOFS]; 4] {
    let xi2 = xi * xi;
    let xi3 = xi2 * xi;

    [
        [
            (2.0 - 3.0 * xi + xi3) / 4.0,
            j * (1.0 - xi - xi2 + xi3) / 4.0,
            (2.0 + 3.0 * xi - xi3) / 4.0,
            j * (-1.0 - xi + xi2 + xi3) / 4.0,
        ],
        [
            3.0 * (xi2 - 1.0) / 4.0,
            j * (3.0 * xi2 - 2.0 * xi - 1.0) / 4.0,
            3.0 * (1.0 - xi2) / 4.0,
            j * (3.0 * xi2 + 2.0 * xi - 1.0) / 4.0,
        ],
        [
            1.5 * xi,
            j * (3.0 * xi - 1.0) / 2.0,
            -1.5 * xi,
            j * (3.0 * xi + 1.0) / 2.0,
        ],
        [1.5, 1.5 * j, -1.5, 1.5 * j],
    ]
}

fn dot(row: &[f64; BEAM_DOFS], u: &[f64; BEAM_DOFS]) -> f64 {
    row.iter().zip(u).map(|(a, b)| a * b).sum()
}

impl ElementHelper for EulerBernoulliBeamHelper {
    fn n_matrix_at(&self, element: &Element, xi: f64) -> FEAResult<Mat> {
        let table = self.shape_table(element.as_bar()?, xi)?;
        Ok(Mat::from_fn(4, BEAM_DOFS, |r, c| table[r][c]))
    }

    fn b_matrix_at(&self, element: &Element, xi: f64) -> FEAResult<Mat> {
        let bar = element.as_bar()?;
        let table = self.shape_table(bar, xi)?;
        let j = bar.length()? / 2.0;
        Ok(Mat::from_fn(1, BEAM_DOFS, |_, c| table[2][c] / (j * j)))
    }

    fn b_i_matrix_at(&self, element: &Element, i: usize, xi: f64) -> FEAResult<Mat> {
        if i != 0 {
            return Err(FEAError::OutOfRange(format!(
                "beam B matrix has a single row, got row {}",
                i
            )));
        }
        self.b_matrix_at(element, xi)
    }

    fn d_matrix_at(&self, element: &Element, xi: f64) -> FEAResult<Mat> {
        check_iso(xi)?;
        let bar = element.as_bar()?;
        let ei = Self::flexural_rigidity(bar, xi, self.direction);
        Ok(Mat::from_element(1, 1, ei))
    }

    fn rho_matrix_at(&self, element: &Element, xi: f64) -> FEAResult<Mat> {
        check_iso(xi)?;
        let bar = element.as_bar()?;
        let a = bar.section.properties_at(xi).a;
        let rho = bar.material.properties_at(xi).rho;
        Ok(Mat::from_element(1, 1, a * rho))
    }

    fn mu_matrix_at(&self, element: &Element, xi: f64) -> FEAResult<Mat> {
        check_iso(xi)?;
        let bar = element.as_bar()?;
        let a = bar.section.properties_at(xi).a;
        let mu = bar.material.properties_at(xi).mu;
        Ok(Mat::from_element(1, 1, a * mu))
    }

    fn j_matrix_at(&self, element: &Element, xi: f64) -> FEAResult<Mat> {
        check_iso(xi)?;
        let length = element.as_bar()?.length()?;
        Ok(Mat::from_element(1, 1, length / 2.0))
    }

    fn iso_to_local(&self, element: &Element, xi: f64) -> FEAResult<f64> {
        check_iso(xi)?;
        let length = element.as_bar()?.length()?;
        Ok(length * (xi + 1.0) / 2.0)
    }

    fn local_to_iso(&self, element: &Element, x: f64) -> FEAResult<f64> {
        let length = element.as_bar()?.length()?;
        if !(0.0..=length).contains(&x) {
            return Err(FEAError::OutOfRange(format!(
                "position {} outside member of length {}",
                x, length
            )));
        }
        Ok(2.0 * x / length - 1.0)
    }

    fn dof_order(&self, element: &Element) -> FEAResult<Vec<ElementLocalDof>> {
        element.as_bar()?;
        let (deflection, rotation) = self.direction.dofs();
        Ok(vec![
            ElementLocalDof::new(0, deflection),
            ElementLocalDof::new(0, rotation),
            ElementLocalDof::new(1, deflection),
            ElementLocalDof::new(1, rotation),
        ])
    }

    fn polynomial_degrees(&self, element: &Element) -> FEAResult<[PolynomialDegrees; 3]> {
        element.as_bar()?;
        Ok([
            PolynomialDegrees::new(3, 1, 0),
            PolynomialDegrees::default(),
            PolynomialDegrees::default(),
        ])
    }

    fn local_equivalent_nodal_loads(&self, element: &Element, load: &Load) -> FEAResult<Vec<Force>> {
        let bar = element.as_bar()?;
        let profile = load.line_profile(bar)?;
        let component = self.direction.deflection_component(&profile.local_direction);
        let row = equivalent_nodal_load_row(self, element, &profile, component)?;

        let (deflection, rotation) = self.direction.dofs();
        let mut forces = vec![Force::default(); 2];
        for (node, force) in forces.iter_mut().enumerate() {
            force.set(deflection, row[(0, 2 * node)]);
            force.set(rotation, row[(0, 2 * node + 1)]);
        }

        Ok(forces)
    }

    fn local_internal_force_at(
        &self,
        element: &Element,
        local_displacements: &[Displacement],
        xi: f64,
    ) -> FEAResult<InternalForce> {
        let bar = element.as_bar()?;
        let u = self.nodal_values(local_displacements)?;
        let table = self.shape_table(bar, xi)?;
        let j = bar.length()? / 2.0;

        let ei = Self::flexural_rigidity(bar, xi, self.direction);
        let curvature = dot(&table[2], &u) / j.powi(2);
        let third = dot(&table[3], &u) / j.powi(3);

        let shear = -ei * third;
        let moment = self.direction.rotation_sign() * ei * curvature;

        Ok(self.internal_force(shear, moment))
    }

    fn load_internal_force_at(&self, element: &Element, load: &Load, xi: f64) -> FEAResult<InternalForce> {
        check_iso(xi)?;
        let bar = element.as_bar()?;
        let length = bar.length()?;
        let profile = load.line_profile(bar)?;
        let component = self.direction.deflection_component(&profile.local_direction);

        // Statics of [start, x] held by the fixed-end reaction at the start node
        let start = self.local_equivalent_nodal_loads(element, load)?[0];
        let (deflection, rotation) = self.direction.dofs();
        let (f0, m0) = (start.get(deflection), start.get(rotation));

        let x = length * (xi + 1.0) / 2.0;
        let (q_sum, q_moment) = self.running_load(&profile, component, length, xi)?;

        let shear = f0 - q_sum;
        let moment = m0 - self.direction.rotation_sign() * (x * f0 - q_moment);

        log::trace!(
            "{:?} beam: load internal force at xi = {}: V = {}, M = {}",
            self.direction,
            xi,
            shear,
            moment
        );

        Ok(self.internal_force(shear, moment))
    }

    fn local_displacement_at(
        &self,
        element: &Element,
        local_displacements: &[Displacement],
        xi: f64,
    ) -> FEAResult<Displacement> {
        let bar = element.as_bar()?;
        let u = self.nodal_values(local_displacements)?;
        let table = self.shape_table(bar, xi)?;
        let j = bar.length()? / 2.0;

        let (deflection, rotation) = self.direction.dofs();
        let mut result = Displacement::default();
        result.set(deflection, dot(&table[0], &u));
        result.set(rotation, self.direction.rotation_sign() * dot(&table[1], &u) / j);

        Ok(result)
    }

    fn load_displacement_at(&self, element: &Element, load: &Load, xi: f64) -> FEAResult<Displacement> {
        check_iso(xi)?;
        element.as_bar()?;
        Err(FEAError::Unimplemented(format!(
            "displacement caused by a {} load on a beam",
            load.kind()
        )))
    }

    fn integration_options(&self) -> IntegrationOptions {
        self.options
    }
}
