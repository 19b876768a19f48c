use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::pipeline::Request;
use crate::theme::ColorSelection;

/// Recolor CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "recolor",
    version,
    about = "Remap an image's colors onto a terminal color theme"
)]
pub struct Cli {
    /// Base image (png, jpeg, jpg or svg).
    pub image: PathBuf,

    /// Theme name, without the .json suffix.
    #[arg(short, long)]
    pub theme: String,

    /// Use bright colors alongside the normal ones.
    #[arg(short, long)]
    pub bright_colors: bool,

    /// Only use bright colors (wins over --bright-colors).
    #[arg(short = 'B', long)]
    pub only_bright_colors: bool,

    /// Output file. Never overwritten.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Settings TOML file (default: recolor.toml, if present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Validate inputs and print the palette without writing anything.
    #[arg(long)]
    pub check: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn request(&self) -> Request {
        Request {
            image: self.image.clone(),
            output: self.output.clone(),
            theme: self.theme.clone(),
            selection: ColorSelection::from_flags(self.bright_colors, self.only_bright_colors),
            check: self.check,
        }
    }
}
