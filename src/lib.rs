pub mod cli;
pub mod commands;
pub mod error;
pub mod icon;
pub mod render;
pub mod utils;

pub use commands::convert::{convert, run};
pub use error::ConvertError;
