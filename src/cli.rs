use std::io::Write;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::analyzer::find_match;
use crate::config::{MatchConfig, OutputFormat, DEFAULT_ELEMENT_ID, DEFAULT_SELECTOR};
use crate::error::Result;

/// Find the element in a modified HTML page that best matches a reference element.
///
/// The reference element is looked up by id in the original page. Every element
/// in the modified page matching the selector is scored by how many attribute
/// values it shares with the reference; the highest score wins, and the first
/// one in document order wins ties.
#[derive(Clone, Debug, PartialEq, Eq, Parser)]
#[command(version, about, long_about)]
pub struct CliOptions {
    /// Path to the original HTML document
    pub original: PathBuf,

    /// Path to the modified HTML document
    pub modified: PathBuf,

    /// Id of the reference element in the original document
    #[arg(default_value = DEFAULT_ELEMENT_ID)]
    pub element_id: String,

    /// CSS selector choosing the candidates in the modified document
    #[arg(short, long, default_value = DEFAULT_SELECTOR)]
    pub selector: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also print the score of every candidate
    #[arg(long)]
    pub scores: bool,

    /// Log more detail to stderr (-v info, -vv debug). RUST_LOG overrides this.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CliOptions {
    pub fn to_config(&self) -> MatchConfig {
        MatchConfig::new()
            .with_element_id(self.element_id.clone())
            .with_selector(self.selector.clone())
            .with_format(self.format)
            .with_scores(self.scores)
    }

    /// Default log filter for the requested verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Run the CLI, writing the report to `out`
pub fn run<W: Write>(options: &CliOptions, out: &mut W) -> Result<()> {
    let config = options.to_config();
    let report = find_match(&options.original, &options.modified, &config)?;

    match config.format() {
        OutputFormat::Text => out.write_all(report.render_text().as_bytes())?,
        OutputFormat::Json => writeln!(out, "{}", report.render_json()?)?,
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let options = CliOptions::try_parse_from(["html-match", "a.html", "b.html"]).unwrap();
        assert_eq!(options.original, PathBuf::from("a.html"));
        assert_eq!(options.modified, PathBuf::from("b.html"));
        assert_eq!(options.element_id, "make-everything-ok-button");
        assert_eq!(options.selector, ".btn");
        assert_eq!(options.format, OutputFormat::Text);
        assert!(!options.scores);
        assert_eq!(options.log_filter(), "warn");
    }

    #[test]
    fn test_parse_all_options() {
        let options = CliOptions::try_parse_from([
            "html-match",
            "a.html",
            "b.html",
            "save-button",
            "--selector",
            "button, a",
            "--format",
            "json",
            "--scores",
            "-vv",
        ])
        .unwrap();

        let config = options.to_config();
        assert_eq!(config.element_id(), "save-button");
        assert_eq!(config.selector(), "button, a");
        assert_eq!(config.format(), OutputFormat::Json);
        assert!(config.show_scores());
        assert_eq!(options.log_filter(), "debug");
    }

    #[test]
    fn test_missing_modified_path_is_rejected() {
        assert!(CliOptions::try_parse_from(["html-match", "a.html"]).is_err());
    }
}
