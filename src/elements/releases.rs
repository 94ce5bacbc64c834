//! End release conditions (hinges) for bar elements

use serde::{Deserialize, Serialize};

use super::dof::Dof;

/// Whether an element end transmits a DOF to its node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DofConstraint {
    #[default]
    Fixed,
    Released,
}

/// Release condition at one end of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Constraint {
    /// X translation
    pub dx: DofConstraint,
    /// Y translation
    pub dy: DofConstraint,
    /// Z translation
    pub dz: DofConstraint,
    /// X rotation
    pub rx: DofConstraint,
    /// Y rotation
    pub ry: DofConstraint,
    /// Z rotation
    pub rz: DofConstraint,
}

impl Constraint {
    /// Rigid connection, every DOF transmitted
    pub fn fixed() -> Self {
        Self::default()
    }

    /// Nothing transmitted
    pub fn released() -> Self {
        Self {
            dx: DofConstraint::Released,
            dy: DofConstraint::Released,
            dz: DofConstraint::Released,
            rx: DofConstraint::Released,
            ry: DofConstraint::Released,
            rz: DofConstraint::Released,
        }
    }

    /// Pin: bending moments released, translations and torsion transmitted
    pub fn moment_released() -> Self {
        Self {
            ry: DofConstraint::Released,
            rz: DofConstraint::Released,
            ..Self::default()
        }
    }

    /// Create from array [DX, DY, DZ, RX, RY, RZ] where `true` means released
    pub fn from_released(flags: [bool; 6]) -> Self {
        let c = |released: bool| {
            if released {
                DofConstraint::Released
            } else {
                DofConstraint::Fixed
            }
        };

        Self {
            dx: c(flags[0]),
            dy: c(flags[1]),
            dz: c(flags[2]),
            rx: c(flags[3]),
            ry: c(flags[4]),
            rz: c(flags[5]),
        }
    }

    pub fn get(&self, dof: Dof) -> DofConstraint {
        match dof {
            Dof::Dx => self.dx,
            Dof::Dy => self.dy,
            Dof::Dz => self.dz,
            Dof::Rx => self.rx,
            Dof::Ry => self.ry,
            Dof::Rz => self.rz,
        }
    }

    pub fn is_released(&self, dof: Dof) -> bool {
        self.get(dof) == DofConstraint::Released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moment_release() {
        let pin = Constraint::moment_released();

        assert!(!pin.is_released(Dof::Dx));
        assert!(!pin.is_released(Dof::Rx));
        assert!(pin.is_released(Dof::Ry));
        assert!(pin.is_released(Dof::Rz));
    }

    #[test]
    fn test_from_released() {
        let c = Constraint::from_released([false, true, false, false, false, true]);

        assert_eq!(c.get(Dof::Dy), DofConstraint::Released);
        assert_eq!(c.get(Dof::Rz), DofConstraint::Released);
        assert_eq!(c.get(Dof::Dz), DofConstraint::Fixed);
        assert_eq!(Constraint::released().get(Dof::Rx), DofConstraint::Released);
    }
}
