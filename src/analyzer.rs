//! End-to-end matching runs
//!
//! Parse original, extract the reference, parse modified, score the
//! candidates, build the report. The original document is fully processed
//! before the modified one is opened, so a missing reference aborts the run
//! without touching the second file.

use std::path::Path;

use tracing::debug;

use crate::config::MatchConfig;
use crate::document::HtmlDocument;
use crate::error::Result;
use crate::matcher::{pick_best, score_candidates, select_best_match};
use crate::reference::{extract_reference, ReferenceElement};
use crate::report::MatchReport;

/// Run a match between two HTML files
pub fn find_match<P, Q>(original: P, modified: Q, config: &MatchConfig) -> Result<MatchReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let original = HtmlDocument::from_file(original)?;
    let reference = extract_reference(&original, config.element_id())?;
    drop(original);

    let modified = HtmlDocument::from_file(modified)?;
    match_reference(reference, &modified, config)
}

/// Run a match between two already parsed documents
pub fn find_match_in(
    original: &HtmlDocument,
    modified: &HtmlDocument,
    config: &MatchConfig,
) -> Result<MatchReport> {
    let reference = extract_reference(original, config.element_id())?;
    match_reference(reference, modified, config)
}

fn match_reference(
    reference: ReferenceElement,
    modified: &HtmlDocument,
    config: &MatchConfig,
) -> Result<MatchReport> {
    debug!(
        selector = config.selector(),
        reference_values = reference.values.len(),
        "Matching reference against candidates"
    );

    if config.show_scores() {
        let scores = score_candidates(modified, config.selector(), &reference.values)?;
        let best = pick_best(scores.iter().cloned());
        Ok(MatchReport::new(reference, config.selector(), best, config.scaffold())
            .with_scores(scores))
    } else {
        let best = select_best_match(modified, config.selector(), &reference.values)?;
        Ok(MatchReport::new(
            reference,
            config.selector(),
            best,
            config.scaffold(),
        ))
    }
}
