mod cli;
mod config;
mod error;
mod interrupt;
mod magick;
mod pipeline;
mod show;
mod theme;
mod validate;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::LevelFilter;
use pipeline::Outcome;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    interrupt::install();

    let settings = config::load_settings(cli.config.as_deref())?;

    match pipeline::run(&cli.request(), &settings)? {
        Outcome::Recolored { output } => {
            log::info!("recolored {} into {}", cli.image.display(), output.display());
        }
        Outcome::ThemesListed(themes) => show::print_themes(&themes),
        Outcome::Checked { theme, colors } => show::print_palette(&theme, &colors),
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
