use std::path::Path;

use clap::Parser;
use svg_ico::cli::{Cli, init_logger};
use svg_ico::commands::convert;
use svg_ico::render::{BrowserLocator, BrowserRenderer};

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let locator = BrowserLocator::default().with_override(cli.browser);
    let renderer = BrowserRenderer::new(locator);

    // Failures are reported by run; the process always exits cleanly
    convert::run(&cli.input, &cli.output, &renderer, Path::new("."));
}
