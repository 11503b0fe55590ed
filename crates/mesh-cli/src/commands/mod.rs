//! CLI command implementations.

pub mod convert;
pub mod info;

use anyhow::{Context, Result};
use mesh_stl::LoadSettings;

use crate::LoadArgs;

/// Resolve load settings from an optional config file and command-line overrides.
pub(crate) fn load_settings(args: &LoadArgs) -> Result<LoadSettings> {
    let mut settings = match &args.config {
        Some(path) => LoadSettings::from_toml_file(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?,
        None => LoadSettings::default(),
    };

    if let Some(scale) = args.scale {
        anyhow::ensure!(
            scale.is_finite() && scale != 0.0,
            "--scale must be finite and non-zero, got {scale}"
        );
        settings = settings.with_scale(scale);
    }

    Ok(settings)
}
