//! Tree formatting and display
//!
//! - `config` - output configuration
//! - `text` - indented text, optionally colored
//! - `json` - nested JSON objects

mod config;
mod json;
mod text;

pub use config::OutputConfig;
pub use json::{print_json, write_json};
pub use text::TextRenderer;
