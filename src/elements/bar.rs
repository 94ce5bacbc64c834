//! Bar element - straight two-node member (beam/column/shaft)

use std::sync::Arc;

use super::material::MaterialProvider;
use super::node::Node;
use super::releases::Constraint;
use super::section::SectionProvider;
use crate::error::{FEAError, FEAResult};
use crate::math::TransformManager;

/// A straight two-node member
#[derive(Debug, Clone)]
pub struct BarElement {
    /// Start node (local node 0)
    pub start_node: Node,
    /// End node (local node 1)
    pub end_node: Node,
    /// Cross-section properties along the member
    pub section: Arc<dyn SectionProvider>,
    /// Material properties along the member
    pub material: Arc<dyn MaterialProvider>,
    /// Release condition at the start node
    pub start_release: Constraint,
    /// Release condition at the end node
    pub end_release: Constraint,
    /// Rotation about longitudinal axis (radians)
    pub web_rotation: f64,
}

impl BarElement {
    /// Create a new member with rigid connections at both ends
    pub fn new<S, M>(start_node: Node, end_node: Node, section: S, material: M) -> Self
    where
        S: SectionProvider + 'static,
        M: MaterialProvider + 'static,
    {
        Self::with_providers(start_node, end_node, Arc::new(section), Arc::new(material))
    }

    /// Create a member from shared providers
    pub fn with_providers(
        start_node: Node,
        end_node: Node,
        section: Arc<dyn SectionProvider>,
        material: Arc<dyn MaterialProvider>,
    ) -> Self {
        Self {
            start_node,
            end_node,
            section,
            material,
            start_release: Constraint::fixed(),
            end_release: Constraint::fixed(),
            web_rotation: 0.0,
        }
    }

    /// Set member end releases
    pub fn with_releases(mut self, start: Constraint, end: Constraint) -> Self {
        self.start_release = start;
        self.end_release = end;
        self
    }

    /// Set member rotation about its longitudinal axis
    pub fn with_web_rotation(mut self, rotation: f64) -> Self {
        self.web_rotation = rotation;
        self
    }

    /// Get the member length
    pub fn length(&self) -> FEAResult<f64> {
        let length = self.start_node.distance_to(&self.end_node);

        if length < 1e-10 {
            return Err(FEAError::InvalidGeometry(format!(
                "bar length {} is not positive",
                length
            )));
        }

        Ok(length)
    }

    /// Release condition of local node 0 or 1
    pub fn release(&self, node_index: usize) -> FEAResult<&Constraint> {
        match node_index {
            0 => Ok(&self.start_release),
            1 => Ok(&self.end_release),
            _ => Err(FEAError::OutOfRange(format!(
                "bar elements have 2 nodes, got node index {}",
                node_index
            ))),
        }
    }

    /// Global/local coordinate transform of this member
    pub fn transformation(&self) -> FEAResult<TransformManager> {
        TransformManager::for_bar(
            &self.start_node.coords(),
            &self.end_node.coords(),
            self.web_rotation,
        )
    }
}
