use std::path::PathBuf;

use anyhow::Result;
use log::info;

use crate::config::Settings;
use crate::magick::{Magick, delete_color_palette};
use crate::theme::{ColorMap, ColorSelection, discover_themes, load_theme};
use crate::validate::{check_file_format, verify_existence_of_files};

/// One recolor job, as asked for on the command line.
#[derive(Debug, Clone)]
pub struct Request {
    pub image: PathBuf,
    pub output: PathBuf,
    pub theme: String,
    pub selection: ColorSelection,
    /// Stop after validation and report the palette instead.
    pub check: bool,
}

/// How a run finished when it did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Recolored { output: PathBuf },
    /// The requested theme is unknown; these are the ones available.
    ThemesListed(Vec<String>),
    Checked { theme: String, colors: ColorMap },
}

pub fn run(request: &Request, settings: &Settings) -> Result<Outcome> {
    verify_existence_of_files(&request.image, &request.output)?;
    check_file_format(&request.image, &request.output, &settings.allowed_formats)?;

    let themes = discover_themes(settings)?;
    if !themes.iter().any(|t| *t == request.theme) {
        info!("theme '{}' not found", request.theme);
        return Ok(Outcome::ThemesListed(themes));
    }

    let theme = load_theme(settings, &request.theme)?;
    let colors = theme.effective_colors(request.selection)?;

    if request.check {
        return Ok(Outcome::Checked {
            theme: theme.name,
            colors,
        });
    }

    let magick = Magick::new(settings.magick.as_str());
    magick.build_palette(&colors, &settings.temp_file)?;
    magick.remap(&request.image, &settings.temp_file, &request.output)?;
    delete_color_palette(&settings.temp_file)?;

    Ok(Outcome::Recolored {
        output: request.output.clone(),
    })
}
