//! Run configuration
//!
//! [`MatchConfig`] carries everything a matching run needs besides the two
//! input documents. The defaults reproduce the classic behavior: look for
//! `#make-everything-ok-button` and compare it against every `.btn`.

use clap::ValueEnum;
use serde::Serialize;

/// Id of the reference element when none is given
pub const DEFAULT_ELEMENT_ID: &str = "make-everything-ok-button";

/// Candidate pool when no selector is given
pub const DEFAULT_SELECTOR: &str = ".btn";

/// Ancestors assumed in front of the target's own selector when rendering its path
pub const DEFAULT_SCAFFOLD: [&str; 4] = ["html", "body", "div.wrapper", "div"];

/// How the report is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable lines
    #[default]
    Text,
    /// A single JSON object
    Json,
}

/// Configuration for a matching run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub(crate) element_id: String,
    pub(crate) selector: String,
    pub(crate) scaffold: Vec<String>,
    pub(crate) format: OutputFormat,
    pub(crate) show_scores: bool,
}

impl MatchConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the id of the reference element in the original document
    pub fn with_element_id(mut self, id: impl Into<String>) -> Self {
        self.element_id = id.into();
        self
    }

    /// Set the CSS selector that picks candidates in the modified document
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    /// Replace the assumed ancestor chain used for the target path
    pub fn with_scaffold<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scaffold = segments.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Include every candidate's score in the report
    pub fn with_scores(mut self, enabled: bool) -> Self {
        self.show_scores = enabled;
        self
    }

    // Accessors
    pub fn element_id(&self) -> &str {
        &self.element_id
    }
    pub fn selector(&self) -> &str {
        &self.selector
    }
    pub fn scaffold(&self) -> &[String] {
        &self.scaffold
    }
    pub fn format(&self) -> OutputFormat {
        self.format
    }
    pub fn show_scores(&self) -> bool {
        self.show_scores
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            element_id: DEFAULT_ELEMENT_ID.to_string(),
            selector: DEFAULT_SELECTOR.to_string(),
            scaffold: DEFAULT_SCAFFOLD.iter().map(|s| s.to_string()).collect(),
            format: OutputFormat::Text,
            show_scores: false,
        }
    }
}
