//! Mathematical utilities for element calculations

pub mod gauss;

use nalgebra::{DMatrix, Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::{FEAError, FEAResult};

pub use gauss::{gauss_legendre, points_for_degree, GaussianIntegrator, MAX_GAUSS_POINTS};

pub type Mat = DMatrix<f64>;
pub type Mat3 = Matrix3<f64>;
pub type Vec3 = Vector3<f64>;

/// Rotates vectors between the global frame and the local frame of a bar.
///
/// Rows of the rotation matrix are the local x, y and z axes expressed in
/// global coordinates, so `local = R * global`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformManager {
    rotation: Mat3,
}

impl TransformManager {
    /// Build the transform for a straight member
    ///
    /// # Arguments
    /// * `start` - Start node coordinates [X, Y, Z]
    /// * `end` - End node coordinates [X, Y, Z]
    /// * `web_rotation` - Rotation of the local y/z axes about the member axis (radians)
    pub fn for_bar(start: &[f64; 3], end: &[f64; 3], web_rotation: f64) -> FEAResult<Self> {
        let d = Vec3::new(end[0] - start[0], end[1] - start[1], end[2] - start[2]);
        let length = d.norm();

        if length < 1e-10 {
            return Err(FEAError::InvalidGeometry(
                "cannot orient a zero-length member".to_string(),
            ));
        }

        let x = d / length;

        // Vertical members: y in the XY plane, z = global Z.
        // Horizontal members: y = global Y, z = x cross y.
        // Inclined members: z horizontal, y = z cross x.
        let (y, z) = if x[0].abs() < 1e-10 && x[2].abs() < 1e-10 {
            if x[1] > 0.0 {
                (Vec3::new(-1.0, 0.0, 0.0), Vec3::z())
            } else {
                (Vec3::new(1.0, 0.0, 0.0), Vec3::z())
            }
        } else if d[1].abs() < 1e-10 {
            let y = Vec3::y();
            let z = x.cross(&y).normalize();
            (y, z)
        } else {
            let proj = Vec3::new(d[0], 0.0, d[2]);
            let z = if x[1] > 0.0 {
                proj.cross(&x)
            } else {
                x.cross(&proj)
            }
            .normalize();
            let y = z.cross(&x).normalize();
            (y, z)
        };

        let (y, z) = if web_rotation.abs() > 1e-10 {
            let (sin_r, cos_r) = web_rotation.sin_cos();
            (y * cos_r + z * sin_r, -y * sin_r + z * cos_r)
        } else {
            (y, z)
        };

        let rotation = Mat3::new(
            x[0], x[1], x[2],
            y[0], y[1], y[2],
            z[0], z[1], z[2],
        );

        Ok(Self { rotation })
    }

    /// Direction cosine matrix (rows are local axes in global coordinates)
    pub fn rotation_matrix(&self) -> &Mat3 {
        &self.rotation
    }

    pub fn transform_global_to_local(&self, v: &Vec3) -> Vec3 {
        self.rotation * v
    }

    pub fn transform_local_to_global(&self, v: &Vec3) -> Vec3 {
        self.rotation.transpose() * v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transform_horizontal() {
        let tr = TransformManager::for_bar(&[0.0, 0.0, 0.0], &[10.0, 0.0, 0.0], 0.0).unwrap();
        let r = tr.rotation_matrix();

        assert_relative_eq!(r[(0, 0)], 1.0, epsilon = 1e-10);
        assert_relative_eq!(r[(1, 1)], 1.0, epsilon = 1e-10);
        assert_relative_eq!(r[(2, 2)], 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_transform_vertical() {
        let tr = TransformManager::for_bar(&[0.0, 0.0, 0.0], &[0.0, 10.0, 0.0], 0.0).unwrap();
        let r = tr.rotation_matrix();

        assert_relative_eq!(r[(0, 1)], 1.0, epsilon = 1e-10);
        assert_relative_eq!(r[(1, 0)], -1.0, epsilon = 1e-10);
        assert_relative_eq!(r[(2, 2)], 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_transform_is_orthonormal() {
        let tr = TransformManager::for_bar(&[1.0, 2.0, 3.0], &[4.0, 6.0, -2.0], 0.4).unwrap();
        let r = tr.rotation_matrix();
        let identity = r * r.transpose();

        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(identity[(i, j)], expected, epsilon = 1e-12);
            }
        }

        let v = Vec3::new(0.3, -1.2, 2.5);
        let back = tr.transform_local_to_global(&tr.transform_global_to_local(&v));
        assert_relative_eq!(back, v, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_length_rejected() {
        let result = TransformManager::for_bar(&[1.0, 1.0, 1.0], &[1.0, 1.0, 1.0], 0.0);
        assert!(matches!(result, Err(FEAError::InvalidGeometry(_))));
    }
}
