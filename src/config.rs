//! Emission configuration.
//!
//! This module provides the per-printer knobs for layout and the cycle guard.
//! Use [`ConfigBuilder`] to override defaults and hand the result to
//! [`Printer::with_config`](crate::Printer::with_config).

/// Runtime configuration for a [`Printer`](crate::Printer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Recursion ceiling; deeper values fail with
    /// [`EmitError::DepthExceeded`](crate::EmitError::DepthExceeded).
    pub max_depth: usize,
    /// One level of indentation in multi-line literals.
    pub indent: String,
    /// Longest slice/array of one-line elements kept on a single line.
    pub max_inline_elems: usize,
    /// Largest map with one-line key and value types kept on a single line.
    pub max_inline_entries: usize,
    /// Longest string (in bytes) that still counts as a simple value.
    pub max_inline_str: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: 100,
            indent: "\t".to_string(),
            max_inline_elems: 10,
            max_inline_entries: 5,
            max_inline_str: 20,
        }
    }
}

impl Config {
    /// Start building a configuration from the defaults.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Configuration builder for fluent API.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    max_depth: Option<usize>,
    indent: Option<String>,
    max_inline_elems: Option<usize>,
    max_inline_entries: Option<usize>,
    max_inline_str: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recursion ceiling.
    ///
    /// Default: 100
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set the indentation unit.
    ///
    /// Default: a tab, which is what `gofmt` produces anyway.
    ///
    /// # Example
    ///
    /// ```
    /// use go_literal::Config;
    ///
    /// let config = Config::builder().indent("    ").build();
    /// assert_eq!(config.indent, "    ");
    /// ```
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = Some(indent.into());
        self
    }

    /// Set the longest single-line slice or array.
    ///
    /// Default: 10
    pub fn max_inline_elems(mut self, n: usize) -> Self {
        self.max_inline_elems = Some(n);
        self
    }

    /// Set the largest single-line map.
    ///
    /// Default: 5
    pub fn max_inline_entries(mut self, n: usize) -> Self {
        self.max_inline_entries = Some(n);
        self
    }

    /// Set the longest string counted as simple.
    ///
    /// Default: 20
    pub fn max_inline_str(mut self, n: usize) -> Self {
        self.max_inline_str = Some(n);
        self
    }

    /// Build the configuration, filling unset knobs with defaults.
    pub fn build(self) -> Config {
        let defaults = Config::default();
        Config {
            max_depth: self.max_depth.unwrap_or(defaults.max_depth),
            indent: self.indent.unwrap_or(defaults.indent),
            max_inline_elems: self.max_inline_elems.unwrap_or(defaults.max_inline_elems),
            max_inline_entries: self.max_inline_entries.unwrap_or(defaults.max_inline_entries),
            max_inline_str: self.max_inline_str.unwrap_or(defaults.max_inline_str),
        }
    }
}
