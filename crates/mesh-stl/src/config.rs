//! Load settings, serializable as TOML or JSON.
//!
//! ```toml
//! max_line_length = 1024
//! scale = 25.4
//! matrix = [[1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};
use crate::stl::line::DEFAULT_MAX_LINE_LENGTH;
use crate::transform::Transform;

const IDENTITY: [[f64; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Settings that stay constant for one load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadSettings {
    /// Longest ASCII line accepted, in bytes.
    pub max_line_length: usize,

    /// Row-major 3x3 matrix applied to every vertex.
    pub matrix: [[f64; 3]; 3],

    /// Uniform scale applied after `matrix`.
    pub scale: f64,
}

impl Default for LoadSettings {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            matrix: IDENTITY,
            scale: 1.0,
        }
    }
}

impl LoadSettings {
    /// Set the uniform scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the row-major matrix.
    pub fn with_matrix(mut self, matrix: [[f64; 3]; 3]) -> Self {
        self.matrix = matrix;
        self
    }

    /// Set the line bound.
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    /// The transform these settings describe.
    pub fn transform(&self) -> Transform {
        Transform::from_rows(self.matrix).scaled(self.scale)
    }

    /// Parse settings from TOML. Missing keys keep their defaults.
    pub fn from_toml(text: &str) -> MeshResult<Self> {
        let settings: Self = toml::from_str(text).map_err(|e| MeshError::Config {
            details: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> MeshResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| MeshError::IoRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&text)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> MeshResult<String> {
        toml::to_string_pretty(self).map_err(|e| MeshError::Config {
            details: e.to_string(),
        })
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> MeshResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| MeshError::Config {
            details: e.to_string(),
        })
    }

    fn validate(&self) -> MeshResult<()> {
        if self.max_line_length == 0 {
            return Err(MeshError::Config {
                details: "max_line_length must be positive".to_string(),
            });
        }
        if !self.scale.is_finite() || self.scale == 0.0 {
            return Err(MeshError::Config {
                details: format!("scale must be finite and non-zero, got {}", self.scale),
            });
        }
        if self.matrix.iter().flatten().any(|c| !c.is_finite()) {
            return Err(MeshError::Config {
                details: "matrix entries must be finite".to_string(),
            });
        }
        Ok(())
    }
}
