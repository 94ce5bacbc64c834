//! Linearly varying load over part of a member

use serde::{Deserialize, Serialize};

use super::{trapezoid_magnitude, CoordinationSystem};
use crate::error::{FEAError, FEAResult};
use crate::math::Vec3;

/// Trapezoidal load between two isoparametric locations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartialTrapezoidalLoad {
    /// Load direction (normalized when applied)
    pub direction: Vec3,
    /// Start of the loaded range, in [-1, 1]
    pub start_iso: f64,
    /// End of the loaded range, in [-1, 1]
    pub end_iso: f64,
    /// Force per unit length at `start_iso`
    pub start_magnitude: f64,
    /// Force per unit length at `end_iso`
    pub end_magnitude: f64,
    pub coordination_system: CoordinationSystem,
}

impl PartialTrapezoidalLoad {
    /// Create a new trapezoidal load
    ///
    /// The range must satisfy -1 <= start_iso < end_iso <= 1.
    pub fn new(
        direction: Vec3,
        start_iso: f64,
        end_iso: f64,
        start_magnitude: f64,
        end_magnitude: f64,
        coordination_system: CoordinationSystem,
    ) -> FEAResult<Self> {
        check_loaded_range(start_iso, end_iso)?;

        Ok(Self {
            direction,
            start_iso,
            end_iso,
            start_magnitude,
            end_magnitude,
            coordination_system,
        })
    }

    /// Magnitude at `xi`, zero outside the loaded range
    pub fn magnitude_at(&self, xi: f64) -> f64 {
        trapezoid_magnitude(
            self.start_iso,
            self.end_iso,
            self.start_magnitude,
            self.end_magnitude,
            xi,
        )
    }

    pub fn is_uniform(&self) -> bool {
        (self.start_magnitude - self.end_magnitude).abs() < 1e-10
    }
}

/// Requires -1 <= start_iso < end_iso <= 1
pub(crate) fn check_loaded_range(start_iso: f64, end_iso: f64) -> FEAResult<()> {
    if !(-1.0..=1.0).contains(&start_iso) || !(-1.0..=1.0).contains(&end_iso) || start_iso >= end_iso {
        return Err(FEAError::OutOfRange(format!(
            "loaded range [{}, {}] must be increasing and inside [-1, 1]",
            start_iso, end_iso
        )));
    }
    Ok(())
}
