//! Numerical integration options

use serde::{Deserialize, Serialize};

use crate::error::FEAResult;

/// Options for element integration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationOptions {
    /// Gauss points added on top of the minimal exact count.
    /// Needed only when section or material properties are not polynomial in ξ.
    pub extra_points: usize,
}

impl IntegrationOptions {
    /// Parse options from a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> FEAResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_extra_points(mut self, extra_points: usize) -> Self {
        self.extra_points = extra_points;
        self
    }
}
