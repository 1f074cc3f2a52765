use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while converting an SVG into an ICO file.
#[derive(Debug)]
pub enum ConvertError {
    /// The input SVG does not exist
    InputNotFound(PathBuf),
    /// No browser executable could be resolved from any candidate
    BrowserNotFound { tried: Vec<String> },
    /// The browser could not be launched or exited unsuccessfully
    RenderFailed {
        exit_code: Option<i32>,
        stderr: String,
    },
    /// A path could not be expressed as a `file://` URL
    InvalidFileUrl(PathBuf),
    /// The browser exited but left no screenshot behind
    RenderOutputMissing(PathBuf),
    /// Reading or writing a file failed
    Io { path: PathBuf, source: io::Error },
    /// The screenshot could not be decoded
    Image(image::ImageError),
    /// An icon entry could not be encoded
    IconEncode { size: u32, source: io::Error },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InputNotFound(path) => {
                write!(f, "File {} not found.", path.display())
            }
            ConvertError::BrowserNotFound { tried } => {
                write!(f, "No headless browser found (tried: {})", tried.join(", "))
            }
            ConvertError::RenderFailed { exit_code, stderr } => {
                match exit_code {
                    Some(code) => write!(f, "Browser exited with status {}", code)?,
                    None => write!(f, "Browser failed to run")?,
                }
                let stderr = stderr.trim();
                if !stderr.is_empty() {
                    write!(f, ": {}", stderr)?;
                }
                Ok(())
            }
            ConvertError::InvalidFileUrl(path) => {
                write!(f, "Cannot build a file URL for {}", path.display())
            }
            ConvertError::RenderOutputMissing(path) => {
                write!(f, "Failed to generate temporary PNG at {}", path.display())
            }
            ConvertError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
            ConvertError::Image(e) => write!(f, "Failed to load rendered image: {}", e),
            ConvertError::IconEncode { size, source } => {
                write!(f, "Failed to encode icon at size {}: {}", size, source)
            }
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Io { source, .. } | ConvertError::IconEncode { source, .. } => {
                Some(source)
            }
            ConvertError::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for ConvertError {
    fn from(e: image::ImageError) -> Self {
        ConvertError::Image(e)
    }
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}
