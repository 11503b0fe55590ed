//! Linear coordinate transform applied to every vertex during loading.

use nalgebra::{Matrix3, Point3, Vector3};

/// A 3x3 linear map from file coordinates to mesh coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Matrix3<f64>,
}

impl Transform {
    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// Uniform scale around the origin.
    pub fn scale(factor: f64) -> Self {
        Self {
            matrix: Matrix3::identity() * factor,
        }
    }

    /// Build from a row-major matrix.
    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self {
            matrix: Matrix3::new(
                rows[0][0], rows[0][1], rows[0][2], //
                rows[1][0], rows[1][1], rows[1][2], //
                rows[2][0], rows[2][1], rows[2][2],
            ),
        }
    }

    /// Wrap an existing matrix.
    pub fn from_matrix(matrix: Matrix3<f64>) -> Self {
        Self { matrix }
    }

    /// The underlying matrix.
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    /// Compose with a uniform scale applied after this transform.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            matrix: self.matrix * factor,
        }
    }

    /// Map a raw file coordinate triple into mesh space.
    #[inline]
    pub fn apply(&self, raw: [f32; 3]) -> Point3<f64> {
        let v = Vector3::new(f64::from(raw[0]), f64::from(raw[1]), f64::from(raw[2]));
        Point3::from(self.matrix * v)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
