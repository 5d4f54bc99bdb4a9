//! Configuration for recordjar
//!
//! Centralized configuration with sensible defaults.

/// Load/save configuration for a [`RecordJar`](crate::RecordJar)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Parse Configuration
    // -------------------------------------------------------------------------
    /// Abort a load on the first recoverable parse warning
    ///
    /// When false, malformed lines are skipped and collected as warnings.
    pub strict: bool,

    // -------------------------------------------------------------------------
    // Write Configuration
    // -------------------------------------------------------------------------
    /// Write embedded newlines as indented fold lines
    ///
    /// When false, every value is written on a single physical line with
    /// `\n` escapes.
    pub fold_newlines: bool,

    /// Leading whitespace of fold lines written on save
    pub fold_indent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict: false,
            fold_newlines: true,
            fold_indent: " ".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Treat recoverable parse warnings as fatal
    pub fn strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    /// Enable or disable fold lines for multi-line values
    pub fn fold_newlines(mut self, fold: bool) -> Self {
        self.config.fold_newlines = fold;
        self
    }

    /// Set the fold line indentation
    ///
    /// Anything that is not a non-empty run of spaces and tabs would not be
    /// read back as a fold line, so such values fall back to one space.
    pub fn fold_indent(mut self, indent: impl Into<String>) -> Self {
        let indent = indent.into();
        let valid = !indent.is_empty() && indent.bytes().all(|b| b == b' ' || b == b'\t');
        self.config.fold_indent = if valid { indent } else { " ".to_string() };
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
