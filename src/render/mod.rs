//! Rasterizing SVG documents through a headless browser.

pub mod browser;
pub mod wrapper;

use std::path::Path;

use crate::error::ConvertError;

pub use browser::{BrowserLocator, BrowserRenderer, Candidate};
pub use wrapper::wrap_svg;

/// Width and height of the render viewport, in pixels.
pub const VIEWPORT_SIZE: u32 = 1024;

/// Something that can turn an HTML document into a PNG screenshot.
pub trait Renderer {
    /// Render `html` and write the screenshot to `screenshot`.
    ///
    /// Returning `Ok(())` does not guarantee the screenshot exists; callers
    /// check for it afterwards.
    fn render(&self, html: &Path, screenshot: &Path) -> Result<(), ConvertError>;
}
