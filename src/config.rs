use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;

/// Settings file picked up from the working directory when present.
pub const DEFAULT_CONFIG: &str = "recolor.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Extensions accepted for both the input and the output image.
    pub allowed_formats: Vec<String>,
    pub themes_dir: PathBuf,
    pub theme_suffix: String,
    /// Swatch image built for a run and removed afterwards.
    pub temp_file: PathBuf,
    /// ImageMagick-compatible program used for drawing and remapping.
    pub magick: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            allowed_formats: ["png", "jpeg", "jpg", "svg"]
                .into_iter()
                .map(String::from)
                .collect(),
            themes_dir: PathBuf::from("themes"),
            theme_suffix: ".json".to_string(),
            temp_file: PathBuf::from(".theme_temp.png"),
            magick: "convert".to_string(),
        }
    }
}

impl Settings {
    pub fn theme_path(&self, name: &str) -> PathBuf {
        self.themes_dir
            .join(format!("{name}{suffix}", suffix = self.theme_suffix))
    }
}

/// Loads settings from `explicit`, or from `recolor.toml` when it exists.
/// Without either, the built-in defaults apply.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let path = match explicit {
        Some(path) => path,
        None => {
            let fallback = Path::new(DEFAULT_CONFIG);
            if !fallback.is_file() {
                debug!("no {DEFAULT_CONFIG} found, using defaults");
                return Ok(Settings::default());
            }
            fallback
        }
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let settings = parse_settings(&raw).with_context(|| format!("parsing TOML {}", path.display()))?;
    debug!("loaded settings from {}: {settings:?}", path.display());
    Ok(settings)
}

fn parse_settings(raw: &str) -> Result<Settings> {
    Ok(toml::from_str(raw)?)
}
