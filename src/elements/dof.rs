//! Degrees of freedom and local-to-global DOF ordering

use serde::{Deserialize, Serialize};

use crate::error::{FEAError, FEAResult};

/// DOFs carried by every node
pub const DOFS_PER_NODE: usize = 6;

/// A nodal degree of freedom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dof {
    /// Translation along X
    Dx,
    /// Translation along Y
    Dy,
    /// Translation along Z
    Dz,
    /// Rotation about X
    Rx,
    /// Rotation about Y
    Ry,
    /// Rotation about Z
    Rz,
}

impl Dof {
    pub const ALL: [Dof; DOFS_PER_NODE] = [Dof::Dx, Dof::Dy, Dof::Dz, Dof::Rx, Dof::Ry, Dof::Rz];

    /// Position of this DOF within a node, [DX, DY, DZ, RX, RY, RZ]
    pub fn index(self) -> usize {
        match self {
            Dof::Dx => 0,
            Dof::Dy => 1,
            Dof::Dz => 2,
            Dof::Rx => 3,
            Dof::Ry => 4,
            Dof::Rz => 5,
        }
    }
}

/// Meaning of one row/column of a local element matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementLocalDof {
    /// Index of the node within the element
    pub node_index: usize,
    pub dof: Dof,
}

impl ElementLocalDof {
    pub fn new(node_index: usize, dof: Dof) -> Self {
        Self { node_index, dof }
    }
}

/// Global equation numbers for a local DOF order
///
/// # Arguments
/// * `order` - Local DOF order declared by an element helper
/// * `node_ids` - Global id of each element node, indexed by local node index
///
/// # Returns
/// One global index per local row/column, `node_id * 6 + dof`
pub fn global_dof_indices(order: &[ElementLocalDof], node_ids: &[usize]) -> FEAResult<Vec<usize>> {
    order
        .iter()
        .map(|local| {
            let node_id = node_ids.get(local.node_index).ok_or_else(|| {
                FEAError::InvalidInput(format!(
                    "local node index {} out of {} element nodes",
                    local.node_index,
                    node_ids.len()
                ))
            })?;
            Ok(node_id * DOFS_PER_NODE + local.dof.index())
        })
        .collect()
}
