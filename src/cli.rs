use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "svg-ico")]
#[command(about = "Convert an SVG image to a multi-size Windows ICO file using a headless browser")]
pub struct Cli {
    /// Input SVG file
    #[arg(default_value = "feder.svg")]
    pub input: PathBuf,

    /// Output ICO file
    #[arg(default_value = "feder.ico")]
    pub output: PathBuf,

    /// Browser executable to render with, tried before the default locations
    #[arg(long, value_name = "PATH")]
    pub browser: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Set up env_logger from the verbosity flag. `RUST_LOG` still takes precedence.
pub fn init_logger(verbose: u8) {
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
