use std::{
    ffi::OsString,
    fs,
    path::Path,
    process::Command,
};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::error::RecolorError;
use crate::theme::ColorMap;

/// Thin wrapper over an ImageMagick-compatible `convert` program.
#[derive(Debug, Clone)]
pub struct Magick {
    program: String,
}

impl Magick {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Draws one flat block per color, left to right, into `swatch`.
    pub fn build_palette(&self, colors: &ColorMap, swatch: &Path) -> Result<()> {
        for (index, color) in colors.values().enumerate() {
            let block = OsString::from(format!("xc:{color}"));
            let args = if index == 0 {
                vec![block, swatch.into()]
            } else {
                vec![swatch.into(), block, "+append".into(), swatch.into()]
            };
            self.run(&args)?;
        }
        info!(
            "built {}-color palette at {}",
            colors.len(),
            swatch.display()
        );
        Ok(())
    }

    /// Maps every pixel of `image` to the nearest swatch color, undithered.
    pub fn remap(&self, image: &Path, swatch: &Path, output: &Path) -> Result<()> {
        let args: Vec<OsString> = vec![
            image.into(),
            "-dither".into(),
            "None".into(),
            "-remap".into(),
            swatch.into(),
            output.into(),
        ];
        self.run(&args)?;
        info!("wrote {}", output.display());
        Ok(())
    }

    fn run(&self, args: &[OsString]) -> Result<()> {
        debug!("running {} {:?}", self.program, args);
        let status = Command::new(&self.program)
            .args(args)
            .status()
            .with_context(|| format!("running {}", self.program))?;
        if !status.success() {
            return Err(RecolorError::ExternalToolFailed {
                program: self.program.clone(),
                status,
            }
            .into());
        }
        Ok(())
    }
}

pub fn delete_color_palette(swatch: &Path) -> Result<()> {
    if !swatch.is_file() {
        return Err(RecolorError::ColorPaletteNotRemoved(swatch.to_path_buf()).into());
    }
    fs::remove_file(swatch).with_context(|| format!("removing {}", swatch.display()))?;
    debug!("removed {}", swatch.display());
    Ok(())
}
