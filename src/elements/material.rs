//! Material properties

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supplies material properties along a bar
///
/// `xi` is the isoparametric coordinate in [-1, 1].
pub trait MaterialProvider: fmt::Debug + Send + Sync {
    fn properties_at(&self, xi: f64) -> Material;
}

/// Mechanical properties at one point of a bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Modulus of elasticity along local x in Pa
    pub ex: f64,
    /// Modulus of elasticity along local y in Pa
    pub ey: f64,
    /// Modulus of elasticity along local z in Pa
    pub ez: f64,
    /// Poisson's ratio in the xy plane
    pub nu_xy: f64,
    /// Poisson's ratio in the yz plane
    pub nu_yz: f64,
    /// Poisson's ratio in the zx plane
    pub nu_zx: f64,
    /// Density in kg/m³
    pub rho: f64,
    /// Viscous damping coefficient
    pub mu: f64,
}

impl Material {
    /// Create a new isotropic material from E and nu
    pub fn isotropic(e: f64, nu: f64, rho: f64) -> Self {
        Self {
            ex: e,
            ey: e,
            ez: e,
            nu_xy: nu,
            nu_yz: nu,
            nu_zx: nu,
            rho,
            mu: 0.0,
        }
    }

    /// Create an orthotropic material
    pub fn orthotropic(
        ex: f64,
        ey: f64,
        ez: f64,
        nu_xy: f64,
        nu_yz: f64,
        nu_zx: f64,
        rho: f64,
    ) -> Self {
        Self {
            ex,
            ey,
            ez,
            nu_xy,
            nu_yz,
            nu_zx,
            rho,
            mu: 0.0,
        }
    }

    /// Set the viscous damping coefficient
    pub fn with_damping(mut self, mu: f64) -> Self {
        self.mu = mu;
        self
    }

    /// Create a standard steel material (A36)
    pub fn steel() -> Self {
        Self::isotropic(200e9, 0.3, 7850.0)
    }

    /// Create an aluminum material (6061-T6)
    pub fn aluminum() -> Self {
        Self::isotropic(68.9e9, 0.33, 2700.0)
    }

    /// Equal moduli and Poisson's ratios in every direction
    pub fn is_isotropic(&self) -> bool {
        fn same(a: f64, b: f64) -> bool {
            (a - b).abs() <= 1e-9 * a.abs().max(b.abs())
        }

        same(self.ex, self.ey)
            && same(self.ex, self.ez)
            && same(self.nu_xy, self.nu_yz)
            && same(self.nu_xy, self.nu_zx)
    }

    /// G = Ex / (2 * (1 + nu_xy))
    pub fn shear_modulus(&self) -> f64 {
        self.ex / (2.0 * (1.0 + self.nu_xy))
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::steel()
    }
}

/// A homogeneous member: the same properties everywhere
impl MaterialProvider for Material {
    fn properties_at(&self, _xi: f64) -> Material {
        *self
    }
}
