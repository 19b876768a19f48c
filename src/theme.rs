use std::fs;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use log::info;
use regex::Regex;
use serde::Deserialize;
use walkdir::WalkDir;

use crate::config::Settings;
use crate::error::RecolorError;

/// Color role (e.g. "0".."7", or "B0".."B7" for merged bright colors) to
/// color string, in file order.
pub type ColorMap = IndexMap<String, String>;

/// A terminal theme: eight normal and eight bright colors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Theme {
    #[serde(skip)]
    pub name: String,
    #[serde(default)]
    pub normal: Option<ColorMap>,
    #[serde(default)]
    pub bright: Option<ColorMap>,
}

/// Which colors of a theme end up in the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSelection {
    Normal,
    /// Normal colors plus bright ones under a `B` prefix.
    WithBright,
    OnlyBright,
}

impl ColorSelection {
    pub fn from_flags(bright_colors: bool, only_bright_colors: bool) -> Self {
        if only_bright_colors {
            ColorSelection::OnlyBright
        } else if bright_colors {
            ColorSelection::WithBright
        } else {
            ColorSelection::Normal
        }
    }
}

/// Lists theme names in `themes_dir`, in directory order.
pub fn discover_themes(settings: &Settings) -> Result<Vec<String>> {
    let dir = &settings.themes_dir;
    if !dir.is_dir() {
        return Err(RecolorError::ThemesNotFound(dir.clone()).into());
    }

    let mut themes = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("listing {}", dir.display()))?;
        let file_name = entry.file_name().to_string_lossy();
        if let Some(name) = file_name.strip_suffix(settings.theme_suffix.as_str()) {
            themes.push(name.to_string());
        }
    }

    if themes.is_empty() {
        return Err(RecolorError::ThemesNotFound(dir.clone()).into());
    }
    info!("found {} theme(s) in {}", themes.len(), dir.display());
    Ok(themes)
}

pub fn load_theme(settings: &Settings, name: &str) -> Result<Theme> {
    let path = settings.theme_path(name);
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("reading theme file {}", path.display()))?;
    parse_theme(name, &raw)
}

fn parse_theme(name: &str, raw: &str) -> Result<Theme> {
    let mut theme: Theme =
        serde_json::from_str(raw).map_err(|source| RecolorError::ThemeParse {
            theme: name.to_string(),
            source,
        })?;
    theme.name = name.to_string();
    Ok(theme)
}

impl Theme {
    /// Builds the palette colors for `selection` and checks that every
    /// color is safe to hand to the drawing tool.
    pub fn effective_colors(&self, selection: ColorSelection) -> Result<ColorMap, RecolorError> {
        let colors = match selection {
            ColorSelection::OnlyBright => self.mapping("bright", self.bright.as_ref())?.clone(),
            ColorSelection::Normal => self.mapping("normal", self.normal.as_ref())?.clone(),
            ColorSelection::WithBright => {
                let mut colors = self.mapping("normal", self.normal.as_ref())?.clone();
                let bright = self.mapping("bright", self.bright.as_ref())?;
                for (role, color) in bright {
                    colors.insert(format!("B{role}"), color.clone());
                }
                colors
            }
        };

        if colors.is_empty() {
            return Err(self.malformed("no colors selected"));
        }
        validate_colors(&colors)?;
        Ok(colors)
    }

    fn mapping<'a>(
        &self,
        key: &str,
        mapping: Option<&'a ColorMap>,
    ) -> Result<&'a ColorMap, RecolorError> {
        mapping.ok_or_else(|| self.malformed(&format!("missing '{key}' colors")))
    }

    fn malformed(&self, reason: &str) -> RecolorError {
        RecolorError::MalformedTheme {
            theme: self.name.clone(),
            reason: reason.to_string(),
        }
    }
}

/// Accepts hex colors, bare color names and numeric functional notations.
/// Anything else could be read by the drawing tool as an option or a file.
fn validate_colors(colors: &ColorMap) -> Result<(), RecolorError> {
    let re = Regex::new(
        r"^(?:#(?:[0-9A-Fa-f]{3,4}|[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8}|[0-9A-Fa-f]{12}|[0-9A-Fa-f]{16})|[A-Za-z][A-Za-z0-9]*|(?:rgba?|srgba?|hsla?|gray|cmyka?)\([0-9., %]*\))$",
    )
    .unwrap();

    for (role, value) in colors {
        if !re.is_match(value) {
            return Err(RecolorError::InvalidColor {
                role: role.clone(),
                value: value.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    const DEMO: &str = r##"{
  "normal": {"0": "#000000"},
  "bright": {"0": "#808080"}
}"##;

    const FULL: &str = r##"{
  "name": "Full",
  "normal": {
    "0": "#1d1f21", "1": "#cc6666", "2": "#b5bd68", "3": "#f0c674",
    "4": "#81a2be", "5": "#b294bb", "6": "#8abeb7", "7": "#c5c8c6"
  },
  "bright": {
    "0": "#666666", "1": "#d54e53", "2": "#b9ca4a", "3": "#e7c547",
    "4": "#7aa6da", "5": "#c397d8", "6": "#70c0b1", "7": "#eaeaea"
  }
}"##;

    fn settings_in(dir: &Path) -> Settings {
        Settings {
            themes_dir: dir.to_path_buf(),
            ..Settings::default()
        }
    }

    fn pairs(colors: &ColorMap) -> Vec<(&str, &str)> {
        colors
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn selection_priority() {
        assert_eq!(ColorSelection::from_flags(false, false), ColorSelection::Normal);
        assert_eq!(ColorSelection::from_flags(true, false), ColorSelection::WithBright);
        assert_eq!(ColorSelection::from_flags(false, true), ColorSelection::OnlyBright);
        assert_eq!(ColorSelection::from_flags(true, true), ColorSelection::OnlyBright);
    }

    #[test]
    fn selects_effective_colors() {
        let theme = parse_theme("demo", DEMO).unwrap();

        let only = theme.effective_colors(ColorSelection::OnlyBright).unwrap();
        assert_eq!(pairs(&only), vec![("0", "#808080")]);

        let merged = theme.effective_colors(ColorSelection::WithBright).unwrap();
        assert_eq!(pairs(&merged), vec![("0", "#000000"), ("B0", "#808080")]);

        let normal = theme.effective_colors(ColorSelection::Normal).unwrap();
        assert_eq!(pairs(&normal), vec![("0", "#000000")]);
    }

    #[test]
    fn keeps_file_order_when_merging() {
        let theme = parse_theme("full", FULL).unwrap();
        let merged = theme.effective_colors(ColorSelection::WithBright).unwrap();
        let keys: Vec<&str> = merged.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "0", "1", "2", "3", "4", "5", "6", "7", "B0", "B1", "B2", "B3", "B4", "B5", "B6",
                "B7"
            ]
        );
        assert_eq!(merged["B3"], "#e7c547");
    }

    #[test]
    fn missing_bright_is_malformed() {
        let theme = parse_theme("dim", r##"{"normal": {"0": "#000000"}}"##).unwrap();
        theme.effective_colors(ColorSelection::Normal).unwrap();
        for selection in [ColorSelection::WithBright, ColorSelection::OnlyBright] {
            let err = theme.effective_colors(selection).unwrap_err();
            assert!(
                matches!(&err, RecolorError::MalformedTheme { theme, reason }
                    if theme == "dim" && reason.contains("bright")),
                "unexpected error: {err}"
            );
        }
    }

    #[test]
    fn empty_mapping_is_malformed() {
        let theme = parse_theme("blank", r#"{"normal": {}, "bright": null}"#).unwrap();
        let err = theme.effective_colors(ColorSelection::Normal).unwrap_err();
        assert!(matches!(err, RecolorError::MalformedTheme { .. }));
    }

    #[test]
    fn rejects_unsafe_colors() {
        for value in ["-write /tmp/x", "@/etc/passwd", "#12345", "red;rm", "rgb(1,2,3)x", ""] {
            let raw = serde_json::json!({ "normal": { "1": value } }).to_string();
            let theme = parse_theme("bad", &raw).unwrap();
            let err = theme.effective_colors(ColorSelection::Normal).unwrap_err();
            assert!(
                matches!(&err, RecolorError::InvalidColor { role, .. } if role == "1"),
                "{value:?} gave {err}"
            );
        }
    }

    #[test]
    fn accepts_common_color_notations() {
        let raw = serde_json::json!({
            "normal": {
                "0": "#fff", "1": "#FFAA0080", "2": "DarkSlateGray", "3": "gray50",
                "4": "rgb(10, 20, 30)", "5": "hsla(120,50%,50%,0.5)"
            }
        })
        .to_string();
        let theme = parse_theme("mixed", &raw).unwrap();
        assert_eq!(theme.effective_colors(ColorSelection::Normal).unwrap().len(), 6);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_theme("broken", "{\"normal\": ").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RecolorError>(),
            Some(RecolorError::ThemeParse { theme, .. }) if theme == "broken"
        ));
    }

    #[test]
    fn discovers_json_files_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("nord.json"), DEMO).unwrap();
        fs::write(dir.path().join("gruvbox.json"), DEMO).unwrap();
        fs::write(dir.path().join("README.md"), "notes").unwrap();

        let mut themes = discover_themes(&settings_in(dir.path())).unwrap();
        themes.sort();
        assert_eq!(themes, vec!["gruvbox", "nord"]);
    }

    #[test]
    fn does_not_descend_into_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("extra")).unwrap();
        fs::write(dir.path().join("extra").join("nested.json"), DEMO).unwrap();

        let err = discover_themes(&settings_in(dir.path())).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RecolorError>(),
            Some(RecolorError::ThemesNotFound(_))
        ));
    }

    #[test]
    fn missing_directory_has_no_themes() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover_themes(&settings_in(&dir.path().join("themes"))).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RecolorError>(),
            Some(RecolorError::ThemesNotFound(_))
        ));
    }

    #[test]
    fn loads_theme_by_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("full.json"), FULL).unwrap();

        let theme = load_theme(&settings_in(dir.path()), "full").unwrap();
        assert_eq!(theme.name, "full");
        assert_eq!(theme.normal.as_ref().map(|m| m.len()), Some(8));
    }
}
