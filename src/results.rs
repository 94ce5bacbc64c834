//! Nodal force and displacement records

use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg};

use crate::elements::Dof;

/// Force and moment acting at a node
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Force {
    /// Force in X direction
    pub fx: f64,
    /// Force in Y direction
    pub fy: f64,
    /// Force in Z direction
    pub fz: f64,
    /// Moment about X axis
    pub mx: f64,
    /// Moment about Y axis
    pub my: f64,
    /// Moment about Z axis
    pub mz: f64,
}

impl Force {
    pub fn new(fx: f64, fy: f64, fz: f64, mx: f64, my: f64, mz: f64) -> Self {
        Self { fx, fy, fz, mx, my, mz }
    }

    /// Create from array [FX, FY, FZ, MX, MY, MZ]
    pub fn from_array(arr: [f64; 6]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3], arr[4], arr[5])
    }

    pub fn to_array(&self) -> [f64; 6] {
        [self.fx, self.fy, self.fz, self.mx, self.my, self.mz]
    }

    /// Component conjugate to a DOF
    pub fn get(&self, dof: Dof) -> f64 {
        self.to_array()[dof.index()]
    }

    /// Set the component conjugate to a DOF
    pub fn set(&mut self, dof: Dof, value: f64) {
        match dof {
            Dof::Dx => self.fx = value,
            Dof::Dy => self.fy = value,
            Dof::Dz => self.fz = value,
            Dof::Rx => self.mx = value,
            Dof::Ry => self.my = value,
            Dof::Rz => self.mz = value,
        }
    }
}

impl Add for Force {
    type Output = Force;

    fn add(self, rhs: Force) -> Force {
        let (a, b) = (self.to_array(), rhs.to_array());
        Force::from_array(std::array::from_fn(|i| a[i] + b[i]))
    }
}

impl Neg for Force {
    type Output = Force;

    fn neg(self) -> Force {
        Force::from_array(self.to_array().map(|v| -v))
    }
}

/// Displacement and rotation of a node
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Displacement {
    /// Displacement in X direction
    pub dx: f64,
    /// Displacement in Y direction
    pub dy: f64,
    /// Displacement in Z direction
    pub dz: f64,
    /// Rotation about X axis
    pub rx: f64,
    /// Rotation about Y axis
    pub ry: f64,
    /// Rotation about Z axis
    pub rz: f64,
}

impl Displacement {
    pub fn new(dx: f64, dy: f64, dz: f64, rx: f64, ry: f64, rz: f64) -> Self {
        Self { dx, dy, dz, rx, ry, rz }
    }

    /// Create from array [DX, DY, DZ, RX, RY, RZ]
    pub fn from_array(arr: [f64; 6]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3], arr[4], arr[5])
    }

    pub fn to_array(&self) -> [f64; 6] {
        [self.dx, self.dy, self.dz, self.rx, self.ry, self.rz]
    }

    pub fn get(&self, dof: Dof) -> f64 {
        self.to_array()[dof.index()]
    }

    /// Set a single component
    pub fn set(&mut self, dof: Dof, value: f64) {
        match dof {
            Dof::Dx => self.dx = value,
            Dof::Dy => self.dy = value,
            Dof::Dz => self.dz = value,
            Dof::Rx => self.rx = value,
            Dof::Ry => self.ry = value,
            Dof::Rz => self.rz = value,
        }
    }
}

impl Add for Displacement {
    type Output = Displacement;

    fn add(self, rhs: Displacement) -> Displacement {
        let (a, b) = (self.to_array(), rhs.to_array());
        Displacement::from_array(std::array::from_fn(|i| a[i] + b[i]))
    }
}

impl Neg for Displacement {
    type Output = Displacement;

    fn neg(self) -> Displacement {
        Displacement::from_array(self.to_array().map(|v| -v))
    }
}
