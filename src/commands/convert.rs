use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::icon;
use crate::render::{Renderer, wrap_svg};
use crate::utils::temp_file;

/// Name of the HTML page hosting the SVG during rendering.
pub const TEMP_HTML: &str = "temp_icon.html";

/// Name of the screenshot written by the renderer.
pub const TEMP_PNG: &str = "temp_icon.png";

/// Convert an SVG file into a multi-size ICO file.
///
/// Temporary files are created in `work_dir` and removed before returning,
/// whether the conversion succeeded or not. A missing input is reported
/// before anything is written.
pub fn convert<R: Renderer + ?Sized>(
    input: &Path,
    output: &Path,
    renderer: &R,
    work_dir: &Path,
) -> Result<PathBuf, ConvertError> {
    if !input.is_file() {
        return Err(ConvertError::InputNotFound(input.to_path_buf()));
    }

    println!("Reading SVG: {}", input.display());
    let svg = fs::read_to_string(input).map_err(|e| ConvertError::io(input, e))?;

    let html_path = work_dir.join(TEMP_HTML);
    let png_path = work_dir.join(TEMP_PNG);
    let html = temp_file::claim(&html_path).map_err(|e| ConvertError::io(&html_path, e))?;
    let png = temp_file::claim(&png_path).map_err(|e| ConvertError::io(&png_path, e))?;

    fs::write(&html, wrap_svg(&svg)).map_err(|e| ConvertError::io(&html_path, e))?;

    println!("Rendering SVG via headless browser...");
    renderer.render(&html, &png)?;

    if !png.exists() {
        return Err(ConvertError::RenderOutputMissing(png_path));
    }

    let img = image::open(&png)?;
    log::debug!("Rendered bitmap is {}x{}", img.width(), img.height());

    println!("Saving ICO: {}", output.display());
    icon::encode_ico(&img, output)?;

    Ok(output.to_path_buf())
}

/// Run a conversion and report the outcome on stdout.
///
/// Failures are reported, never propagated. Returns whether an icon was written.
pub fn run<R: Renderer + ?Sized>(input: &Path, output: &Path, renderer: &R, work_dir: &Path) -> bool {
    match convert(input, output, renderer, work_dir) {
        Ok(path) => {
            println!("Success! Icon generated at: {}", path.display());
            true
        }
        Err(e) => {
            log::debug!("Conversion failed: {:?}", e);
            println!("Error: {}", e);
            false
        }
    }
}
