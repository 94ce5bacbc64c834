//! Cross-section properties for bar elements

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supplies cross-section properties along a bar
///
/// `xi` is the isoparametric coordinate in [-1, 1].
pub trait SectionProvider: fmt::Debug + Send + Sync {
    fn properties_at(&self, xi: f64) -> Section;
}

/// Cross-section properties at one point of a bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Cross-sectional area in m²
    pub a: f64,
    /// Moment of inertia about local y-axis in m⁴
    pub iy: f64,
    /// Moment of inertia about local z-axis in m⁴
    pub iz: f64,
    /// Torsional constant in m⁴
    pub j: f64,
}

impl Section {
    /// Create a new section with basic properties
    pub fn new(a: f64, iy: f64, iz: f64, j: f64) -> Self {
        Self { a, iy, iz, j }
    }

    /// Create a rectangular section
    pub fn rectangular(width: f64, depth: f64) -> Self {
        let a = width * depth;
        let iy = width * depth.powi(3) / 12.0;
        let iz = depth * width.powi(3) / 12.0;

        // Torsional constant for rectangle (approximate)
        let (a_dim, b_dim) = if width > depth { (width, depth) } else { (depth, width) };
        let j = a_dim * b_dim.powi(3) / 3.0 * (1.0 - 0.63 * b_dim / a_dim);

        Self { a, iy, iz, j }
    }

    /// Create a circular section
    pub fn circular(diameter: f64) -> Self {
        let r = diameter / 2.0;
        let a = std::f64::consts::PI * r.powi(2);
        let i = std::f64::consts::PI * r.powi(4) / 4.0;
        let j = std::f64::consts::PI * r.powi(4) / 2.0;

        Self { a, iy: i, iz: i, j }
    }

    /// Create a hollow circular (pipe) section
    pub fn pipe(outer_diameter: f64, wall_thickness: f64) -> Self {
        let r_o = outer_diameter / 2.0;
        let r_i = r_o - wall_thickness;

        let a = std::f64::consts::PI * (r_o.powi(2) - r_i.powi(2));
        let i = std::f64::consts::PI * (r_o.powi(4) - r_i.powi(4)) / 4.0;
        let j = std::f64::consts::PI * (r_o.powi(4) - r_i.powi(4)) / 2.0;

        Self { a, iy: i, iz: i, j }
    }

    /// Create a wide flange (I-beam) section
    ///
    /// # Arguments
    /// * `depth` - Total depth of section
    /// * `flange_width` - Width of flange
    /// * `flange_thickness` - Thickness of flange
    /// * `web_thickness` - Thickness of web
    pub fn wide_flange(
        depth: f64,
        flange_width: f64,
        flange_thickness: f64,
        web_thickness: f64,
    ) -> Self {
        let bf = flange_width;
        let tf = flange_thickness;
        let tw = web_thickness;
        let d = depth;
        let hw = d - 2.0 * tf;

        let a = 2.0 * bf * tf + hw * tw;
        let iy = (bf * d.powi(3) - (bf - tw) * hw.powi(3)) / 12.0;
        let iz = (2.0 * tf * bf.powi(3) + hw * tw.powi(3)) / 12.0;
        let j = (2.0 * bf * tf.powi(3) + hw * tw.powi(3)) / 3.0;

        Self { a, iy, iz, j }
    }

    /// Linear blend towards `other`, `t` in [0, 1]
    pub fn lerp(&self, other: &Section, t: f64) -> Self {
        Self {
            a: self.a + (other.a - self.a) * t,
            iy: self.iy + (other.iy - self.iy) * t,
            iz: self.iz + (other.iz - self.iz) * t,
            j: self.j + (other.j - self.j) * t,
        }
    }
}

impl Default for Section {
    fn default() -> Self {
        // 200mm x 200mm rectangle
        Self::rectangular(0.2, 0.2)
    }
}

/// A prismatic member: the same properties everywhere
impl SectionProvider for Section {
    fn properties_at(&self, _xi: f64) -> Section {
        *self
    }
}

/// Section properties varying linearly from the start to the end node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaperedSection {
    pub start: Section,
    pub end: Section,
}

impl TaperedSection {
    pub fn new(start: Section, end: Section) -> Self {
        Self { start, end }
    }
}

impl SectionProvider for TaperedSection {
    fn properties_at(&self, xi: f64) -> Section {
        self.start.lerp(&self.end, (xi + 1.0) / 2.0)
    }
}
