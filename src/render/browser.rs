use std::path::{Path, PathBuf};
use std::process::Command;

use url::Url;

use crate::error::ConvertError;
use crate::render::{Renderer, VIEWPORT_SIZE};

/// Standard Edge install location on Windows.
pub const EDGE_INSTALL_PATH: &str = r"C:\Program Files (x86)\Microsoft\Edge\Application\msedge.exe";

/// Bare command name looked up on PATH when the install path is absent.
pub const EDGE_COMMAND: &str = "msedge";

/// One way of locating a browser executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// A path or command name supplied by the user
    Explicit(PathBuf),
    /// A well-known install location
    FixedPath(PathBuf),
    /// A command name searched for on PATH
    PathLookup(String),
}

impl Candidate {
    /// Resolve this candidate to an executable path, if it exists.
    pub fn resolve(&self) -> Option<PathBuf> {
        match self {
            Candidate::Explicit(path) => {
                if path.is_file() {
                    Some(path.clone())
                } else {
                    which::which(path).ok()
                }
            }
            Candidate::FixedPath(path) => path.is_file().then(|| path.clone()),
            Candidate::PathLookup(name) => which::which(name).ok(),
        }
    }

    fn label(&self) -> String {
        match self {
            Candidate::Explicit(path) | Candidate::FixedPath(path) => path.display().to_string(),
            Candidate::PathLookup(name) => name.clone(),
        }
    }
}

/// Ordered list of candidates; the first one that resolves wins.
#[derive(Debug, Clone)]
pub struct BrowserLocator {
    candidates: Vec<Candidate>,
}

impl Default for BrowserLocator {
    fn default() -> Self {
        BrowserLocator::new(vec![
            Candidate::FixedPath(PathBuf::from(EDGE_INSTALL_PATH)),
            Candidate::PathLookup(EDGE_COMMAND.to_string()),
        ])
    }
}

impl BrowserLocator {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        BrowserLocator { candidates }
    }

    /// Put an explicit override ahead of every other candidate.
    pub fn with_override(mut self, browser: Option<PathBuf>) -> Self {
        if let Some(path) = browser {
            self.candidates.insert(0, Candidate::Explicit(path));
        }
        self
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Find the first candidate that resolves to an executable.
    pub fn resolve(&self) -> Result<PathBuf, ConvertError> {
        for candidate in &self.candidates {
            match candidate.resolve() {
                Some(path) => {
                    log::debug!("Using browser {} (from {:?})", path.display(), candidate);
                    return Ok(path);
                }
                None if matches!(candidate, Candidate::Explicit(_)) => log::warn!(
                    "Browser {} not found, falling back to default locations",
                    candidate.label()
                ),
                None => log::debug!("Browser candidate {:?} not found", candidate),
            }
        }

        Err(ConvertError::BrowserNotFound {
            tried: self.candidates.iter().map(Candidate::label).collect(),
        })
    }
}

/// Renders pages by taking a headless screenshot with an external browser.
pub struct BrowserRenderer {
    locator: BrowserLocator,
}

impl BrowserRenderer {
    pub fn new(locator: BrowserLocator) -> Self {
        BrowserRenderer { locator }
    }
}

impl Renderer for BrowserRenderer {
    fn render(&self, html: &Path, screenshot: &Path) -> Result<(), ConvertError> {
        let browser = self.locator.resolve()?;
        let args = screenshot_args(html, screenshot)?;
        log::debug!("Running {} {}", browser.display(), args.join(" "));

        let output = Command::new(&browser)
            .args(&args)
            .output()
            .map_err(|e| ConvertError::RenderFailed {
                exit_code: None,
                stderr: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ConvertError::RenderFailed {
                exit_code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        Ok(())
    }
}

/// Build the headless screenshot command line for the browser.
fn screenshot_args(html: &Path, screenshot: &Path) -> Result<Vec<String>, ConvertError> {
    let html = std::path::absolute(html).map_err(|e| ConvertError::io(html, e))?;
    let screenshot =
        std::path::absolute(screenshot).map_err(|e| ConvertError::io(screenshot, e))?;

    Ok(vec![
        "--headless".to_string(),
        "--disable-gpu".to_string(),
        format!("--screenshot={}", screenshot.display()),
        format!("--window-size={},{}", VIEWPORT_SIZE, VIEWPORT_SIZE),
        "--default-background-color=00000000".to_string(),
        file_url(&html)?,
    ])
}

/// Format an absolute path as a percent-encoded `file://` URL.
fn file_url(path: &Path) -> Result<String, ConvertError> {
    Url::from_file_path(path)
        .map(String::from)
        .map_err(|()| ConvertError::InvalidFileUrl(path.to_path_buf()))
}
