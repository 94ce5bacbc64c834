//! Uniformly distributed load over the full member length

use serde::{Deserialize, Serialize};

use super::CoordinationSystem;
use crate::math::Vec3;

/// Constant load intensity along the whole member
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformLoad {
    /// Load direction (normalized when applied)
    pub direction: Vec3,
    /// Force per unit length
    pub magnitude: f64,
    pub coordination_system: CoordinationSystem,
}

impl UniformLoad {
    pub fn new(direction: Vec3, magnitude: f64, coordination_system: CoordinationSystem) -> Self {
        Self {
            direction,
            magnitude,
            coordination_system,
        }
    }

    /// Load along the local y axis
    pub fn local_y(magnitude: f64) -> Self {
        Self::new(Vec3::y(), magnitude, CoordinationSystem::Local)
    }

    /// Load along the local z axis
    pub fn local_z(magnitude: f64) -> Self {
        Self::new(Vec3::z(), magnitude, CoordinationSystem::Local)
    }

    /// Gravity-type load along negative global Y
    ///
    /// A positive magnitude acts downward, a negative one upward.
    pub fn downward(magnitude: f64) -> Self {
        Self::new(-Vec3::y(), magnitude, CoordinationSystem::Global)
    }
}
