//! Shaft torsion about the member axis
//!
//! Linear interpolation of the twist angle RX between the two end nodes.

use serde::{Deserialize, Serialize};

use super::{check_displacement_count, check_iso, ElementHelper, InternalForce, PolynomialDegrees};
use crate::elements::{BarElement, Dof, Element, ElementLocalDof};
use crate::error::{FEAError, FEAResult};
use crate::loads::Load;
use crate::math::Mat;
use crate::options::IntegrationOptions;
use crate::results::{Displacement, Force};

/// Torsion formulation of a bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShaftHelper {
    #[serde(default)]
    pub options: IntegrationOptions,
}

impl ShaftHelper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: IntegrationOptions) -> Self {
        self.options = options;
        self
    }

    /// Zero factors for released end rotations
    fn release_mask(bar: &BarElement) -> FEAResult<[f64; 2]> {
        let mut mask = [1.0; 2];
        for (node, factor) in mask.iter_mut().enumerate() {
            if bar.release(node)?.is_released(Dof::Rx) {
                *factor = 0.0;
            }
        }
        Ok(mask)
    }

    fn shape_row(bar: &BarElement, xi: f64) -> FEAResult<[f64; 2]> {
        check_iso(xi)?;
        let mask = Self::release_mask(bar)?;
        Ok([mask[0] * (1.0 - xi) / 2.0, mask[1] * (1.0 + xi) / 2.0])
    }

    fn strain_row(bar: &BarElement, xi: f64) -> FEAResult<[f64; 2]> {
        check_iso(xi)?;
        let length = bar.length()?;
        let mask = Self::release_mask(bar)?;
        Ok([-mask[0] / length, mask[1] / length])
    }

    /// Torsional rigidity GJ, defined for isotropic materials only
    fn torsional_rigidity(bar: &BarElement, xi: f64) -> FEAResult<f64> {
        let material = bar.material.properties_at(xi);
        if !material.is_isotropic() {
            return Err(FEAError::Unsupported(
                "torsion requires an isotropic material".to_string(),
            ));
        }
        Ok(material.shear_modulus() * bar.section.properties_at(xi).j)
    }

    fn twist_values(displacements: &[Displacement]) -> FEAResult<[f64; 2]> {
        check_displacement_count(displacements, 2)?;
        Ok([displacements[0].rx, displacements[1].rx])
    }
}

impl ElementHelper for ShaftHelper {
    fn n_matrix_at(&self, element: &Element, xi: f64) -> FEAResult<Mat> {
        let n = Self::shape_row(element.as_bar()?, xi)?;
        Ok(Mat::from_row_slice(1, 2, &n))
    }

    fn b_matrix_at(&self, element: &Element, xi: f64) -> FEAResult<Mat> {
        let b = Self::strain_row(element.as_bar()?, xi)?;
        Ok(Mat::from_row_slice(1, 2, &b))
    }

    fn b_i_matrix_at(&self, element: &Element, i: usize, xi: f64) -> FEAResult<Mat> {
        if i != 0 {
            return Err(FEAError::OutOfRange(format!(
                "shaft B matrix has a single row, got row {}",
                i
            )));
        }
        self.b_matrix_at(element, xi)
    }

    fn d_matrix_at(&self, element: &Element, xi: f64) -> FEAResult<Mat> {
        check_iso(xi)?;
        let gj = Self::torsional_rigidity(element.as_bar()?, xi)?;
        Ok(Mat::from_element(1, 1, gj))
    }

    fn rho_matrix_at(&self, element: &Element, xi: f64) -> FEAResult<Mat> {
        check_iso(xi)?;
        let bar = element.as_bar()?;
        let j = bar.section.properties_at(xi).j;
        Ok(Mat::from_element(1, 1, bar.material.properties_at(xi).rho * j))
    }

    fn mu_matrix_at(&self, element: &Element, xi: f64) -> FEAResult<Mat> {
        check_iso(xi)?;
        let bar = element.as_bar()?;
        let j = bar.section.properties_at(xi).j;
        Ok(Mat::from_element(1, 1, bar.material.properties_at(xi).mu * j))
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
        Ok(vec![
            ElementLocalDof::new(0, Dof::Rx),
            ElementLocalDof::new(1, Dof::Rx),
        ])
    }

    fn polynomial_degrees(&self, element: &Element) -> FEAResult<[PolynomialDegrees; 3]> {
        element.as_bar()?;
        Ok([
            PolynomialDegrees::new(1, 0, 0),
            PolynomialDegrees::default(),
            PolynomialDegrees::default(),
        ])
    }

    fn local_equivalent_nodal_loads(&self, element: &Element, load: &Load) -> FEAResult<Vec<Force>> {
        let bar = element.as_bar()?;
        // Line forces act through the shear centre and produce no twist
        load.line_profile(bar)?;
        Ok(vec![Force::default(); 2])
    }

    fn local_internal_force_at(
        &self,
        element: &Element,
        local_displacements: &[Displacement],
        xi: f64,
    ) -> FEAResult<InternalForce> {
        let bar = element.as_bar()?;
        let u = Self::twist_values(local_displacements)?;
        let b = Self::strain_row(bar, xi)?;
        let gj = Self::torsional_rigidity(bar, xi)?;

        let torque = gj * (b[0] * u[0] + b[1] * u[1]);
        Ok(vec![(Dof::Rx, torque)])
    }

    fn load_internal_force_at(&self, element: &Element, load: &Load, xi: f64) -> FEAResult<InternalForce> {
        check_iso(xi)?;
        element.as_bar()?;
        Err(FEAError::Unimplemented(format!(
            "torque caused by a {} load on a shaft",
            load.kind()
        )))
    }

    fn local_displacement_at(
        &self,
        element: &Element,
        local_displacements: &[Displacement],
        xi: f64,
    ) -> FEAResult<Displacement> {
        let bar = element.as_bar()?;
        let u = Self::twist_values(local_displacements)?;
        let n = Self::shape_row(bar, xi)?;

        let mut result = Displacement::default();
        result.set(Dof::Rx, n[0] * u[0] + n[1] * u[1]);
        Ok(result)
    }

    fn load_displacement_at(&self, element: &Element, load: &Load, xi: f64) -> FEAResult<Displacement> {
        check_iso(xi)?;
        element.as_bar()?;
        Err(FEAError::Unimplemented(format!(
            "twist caused by a {} load on a shaft",
            load.kind()
        )))
    }

    fn integration_options(&self) -> IntegrationOptions {
        self.options
    }
}
