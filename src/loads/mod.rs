//! Element loads

mod concentrated;
mod trapezoidal;
mod uniform;

pub use concentrated::ConcentratedLoad;
pub use trapezoidal::PartialTrapezoidalLoad;
pub use uniform::UniformLoad;

use serde::{Deserialize, Serialize};

use trapezoidal::check_loaded_range;

use crate::elements::BarElement;
use crate::error::{FEAError, FEAResult};
use crate::math::Vec3;

/// Frame in which a load direction is given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CoordinationSystem {
    #[default]
    Global,
    Local,
}

/// A load applied to an element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Load {
    Uniform(UniformLoad),
    PartialTrapezoidal(PartialTrapezoidalLoad),
    Concentrated(ConcentratedLoad),
}

impl Load {
    /// Short kind name used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Load::Uniform(_) => "uniform",
            Load::PartialTrapezoidal(_) => "partial trapezoidal",
            Load::Concentrated(_) => "concentrated",
        }
    }

    /// Magnitude profile and local unit direction of a distributed load
    ///
    /// Fails with `Unsupported` for load kinds that are not distributed along
    /// the member.
    pub fn line_profile(&self, bar: &BarElement) -> FEAResult<LineLoadProfile> {
        let (direction, system, xi0, xi1, start_magnitude, end_magnitude, degree) = match self {
            Load::Uniform(l) => (
                l.direction,
                l.coordination_system,
                -1.0,
                1.0,
                l.magnitude,
                l.magnitude,
                0,
            ),
            Load::PartialTrapezoidal(l) => {
                // Fields are public and may come from a deserialized document
                check_loaded_range(l.start_iso, l.end_iso)?;
                (
                    l.direction,
                    l.coordination_system,
                    l.start_iso,
                    l.end_iso,
                    l.start_magnitude,
                    l.end_magnitude,
                    1,
                )
            }
            other => {
                return Err(FEAError::Unsupported(format!(
                    "{} loads are not distributed along the member",
                    other.kind()
                )))
            }
        };

        let local = match system {
            CoordinationSystem::Local => direction,
            CoordinationSystem::Global => bar.transformation()?.transform_global_to_local(&direction),
        };

        let local_direction = local.try_normalize(1e-12).ok_or_else(|| {
            FEAError::InvalidInput("load direction must be a non-zero vector".to_string())
        })?;

        Ok(LineLoadProfile {
            xi0,
            xi1,
            start_magnitude,
            end_magnitude,
            degree,
            local_direction,
        })
    }
}

impl From<UniformLoad> for Load {
    fn from(load: UniformLoad) -> Self {
        Load::Uniform(load)
    }
}

impl From<PartialTrapezoidalLoad> for Load {
    fn from(load: PartialTrapezoidalLoad) -> Self {
        Load::PartialTrapezoidal(load)
    }
}

impl From<ConcentratedLoad> for Load {
    fn from(load: ConcentratedLoad) -> Self {
        Load::Concentrated(load)
    }
}

/// Piecewise-linear magnitude over [xi0, xi1] acting along a local unit direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineLoadProfile {
    pub xi0: f64,
    pub xi1: f64,
    pub start_magnitude: f64,
    pub end_magnitude: f64,
    /// Polynomial degree of the magnitude inside [xi0, xi1]
    pub degree: usize,
    pub local_direction: Vec3,
}

impl LineLoadProfile {
    /// Magnitude at `xi`, zero outside the loaded range
    pub fn magnitude_at(&self, xi: f64) -> f64 {
        trapezoid_magnitude(
            self.xi0,
            self.xi1,
            self.start_magnitude,
            self.end_magnitude,
            xi,
        )
    }
}

pub(crate) fn trapezoid_magnitude(xi0: f64, xi1: f64, q0: f64, q1: f64, xi: f64) -> f64 {
    if xi < xi0 || xi > xi1 {
        return 0.0;
    }
    if xi1 - xi0 <= f64::EPSILON {
        return q0;
    }
    q0 + (q1 - q0) * (xi - xi0) / (xi1 - xi0)
}
