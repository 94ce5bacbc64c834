//! Quad element - four-node quadrilateral shell geometry

use serde::{Deserialize, Serialize};

use super::node::Node;

/// A quadrilateral shell element
///
/// Only the geometry is carried; bar helpers reject this kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadElement {
    /// Corner nodes i, j, m, n in counter-clockwise order
    pub nodes: [Node; 4],
    /// Thickness
    pub thickness: f64,
}

impl QuadElement {
    /// Create a new quad element
    pub fn new(nodes: [Node; 4], thickness: f64) -> Self {
        Self { nodes, thickness }
    }
}
