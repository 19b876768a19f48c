use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecolorError {
    #[error("image does not exist: {}", .0.display())]
    ImageDoesNotExist(PathBuf),

    #[error("output file already exists: {}", .0.display())]
    OutputFileAlreadyExists(PathBuf),

    #[error("invalid file format: {}", .0.display())]
    InvalidFileFormat(PathBuf),

    #[error("no themes found in {}", .0.display())]
    ThemesNotFound(PathBuf),

    #[error("theme '{theme}' is malformed: {reason}")]
    MalformedTheme { theme: String, reason: String },

    #[error("invalid color for '{role}': {value:?}")]
    InvalidColor { role: String, value: String },

    #[error("parsing theme '{theme}'")]
    ThemeParse {
        theme: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{program} exited with {status}")]
    ExternalToolFailed { program: String, status: ExitStatus },

    #[error("color palette could not be removed: {}", .0.display())]
    ColorPaletteNotRemoved(PathBuf),
}
