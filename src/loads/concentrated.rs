//! Concentrated load at a point of a member

use serde::{Deserialize, Serialize};

use super::CoordinationSystem;
use crate::results::Force;

/// A force/moment applied at one isoparametric location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcentratedLoad {
    pub force: Force,
    /// Location along the member, in [-1, 1]
    pub iso_location: f64,
    pub coordination_system: CoordinationSystem,
}

impl ConcentratedLoad {
    pub fn new(force: Force, iso_location: f64, coordination_system: CoordinationSystem) -> Self {
        Self {
            force,
            iso_location,
            coordination_system,
        }
    }
}
