//! Serialization and export settings.

/// Extension given to exported stylesheets.
pub const DEFAULT_EXTENSION: &str = "uss";

/// Configuration for serializing and exporting a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetConfig {
    /// Spaces before each rule inside a selector block (default 4).
    pub indent: usize,
    /// File extension used on export, without the dot (default `uss`).
    pub extension: String,
    /// Emit an empty line between selector blocks (default true).
    pub blank_line_between_blocks: bool,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            indent: 4,
            extension: DEFAULT_EXTENSION.to_string(),
            blank_line_between_blocks: true,
        }
    }
}

impl SheetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn with_blank_lines(mut self, enabled: bool) -> Self {
        self.blank_line_between_blocks = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SheetConfig::default();
        assert_eq!(config.indent, 4);
        assert_eq!(config.extension, "uss");
        assert!(config.blank_line_between_blocks);
    }

    #[test]
    fn test_builder_methods() {
        let config = SheetConfig::new()
            .with_indent(2)
            .with_extension(".tss")
            .with_blank_lines(false);
        assert_eq!(config.indent, 2);
        assert_eq!(config.extension, "tss");
        assert!(!config.blank_line_between_blocks);
    }
}
