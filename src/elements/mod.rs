//! Structural elements module

mod bar;
mod dof;
mod material;
mod node;
mod quad;
mod releases;
mod section;

pub use bar::BarElement;
pub use dof::{global_dof_indices, Dof, ElementLocalDof, DOFS_PER_NODE};
pub use material::{Material, MaterialProvider};
pub use node::Node;
pub use quad::QuadElement;
pub use releases::{Constraint, DofConstraint};
pub use section::{Section, SectionProvider, TaperedSection};

use crate::error::{FEAError, FEAResult};

/// Every element kind known to the element helpers
#[derive(Debug, Clone)]
pub enum Element {
    Bar(BarElement),
    Quad(QuadElement),
}

impl Element {
    /// Short kind name used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Bar(_) => "bar",
            Element::Quad(_) => "quad",
        }
    }

    /// The bar behind this element, or `TypeMismatch` for other kinds
    pub fn as_bar(&self) -> FEAResult<&BarElement> {
        match self {
            Element::Bar(bar) => Ok(bar),
            other => Err(FEAError::TypeMismatch(format!(
                "expected a bar element, got a {} element",
                other.kind()
            ))),
        }
    }
}

impl From<BarElement> for Element {
    fn from(bar: BarElement) -> Self {
        Element::Bar(bar)
    }
}

impl From<QuadElement> for Element {
    fn from(quad: QuadElement) -> Self {
        Element::Quad(quad)
    }
}
