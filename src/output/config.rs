//! Output configuration types

const DEFAULT_INDENT: &str = "  ";

/// Configuration for text output.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Written once per depth level before each name.
    pub indent: String,
    /// Highlight nodes that have children.
    pub use_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            use_color: false,
        }
    }
}
