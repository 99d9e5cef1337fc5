//! Result reporting
//!
//! The target path is approximate. It is the configured scaffold of assumed
//! ancestors followed by the target's real own selector; the element's actual
//! ancestor chain is never walked.

use serde::Serialize;

use crate::error::Result;
use crate::matcher::ScoredCandidate;
use crate::reference::ReferenceElement;

/// Line printed between the reference listing and the result
pub const SEPARATOR: &str = "----------------------------------------";

/// Join the scaffold segments and the element's own selector with ` > `
pub fn synthesize_path(scaffold: &[String], own_selector: &str) -> String {
    scaffold
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(own_selector))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(" > ")
}

/// Render the winning candidate, or nothing when there is no winner
pub fn format_result(candidate: Option<&ScoredCandidate>, scaffold: &[String]) -> String {
    match candidate {
        Some(winner) => format!(
            "Target element attributes: {}\n\nPath to target element: {}\n",
            winner.candidate.values,
            synthesize_path(scaffold, &winner.candidate.selector)
        ),
        None => String::new(),
    }
}

/// Outcome of a complete matching run
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub reference: ReferenceElement,
    pub selector: String,
    pub target: Option<TargetSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scores: Vec<ScoredCandidate>,
    #[serde(skip)]
    scaffold: Vec<String>,
}

/// The winning candidate with its synthesized path
#[derive(Debug, Clone, Serialize)]
pub struct TargetSummary {
    #[serde(flatten)]
    pub candidate: ScoredCandidate,
    pub path: String,
}

impl MatchReport {
    pub fn new(
        reference: ReferenceElement,
        selector: impl Into<String>,
        target: Option<ScoredCandidate>,
        scaffold: &[String],
    ) -> Self {
        let target = target.map(|candidate| TargetSummary {
            path: synthesize_path(scaffold, &candidate.candidate.selector),
            candidate,
        });
        Self {
            reference,
            selector: selector.into(),
            target,
            scores: Vec::new(),
            scaffold: scaffold.to_vec(),
        }
    }

    /// Attach the per-candidate scores to the report
    pub fn with_scores(mut self, scores: Vec<ScoredCandidate>) -> Self {
        self.scores = scores;
        self
    }

    pub fn is_match(&self) -> bool {
        self.target.is_some()
    }

    /// Plain-text rendering
    ///
    /// Reference listing, separator, optional score table, then the winner.
    /// With no winner the output ends after the separator (or score table).
    pub fn render_text(&self) -> String {
        let mut out = format!(
            "Original element attributes: [{}]\n{}\n",
            self.reference.listing(),
            SEPARATOR
        );

        if !self.scores.is_empty() {
            out.push_str(&format!("Candidates for '{}':\n", self.selector));
            for entry in &self.scores {
                out.push_str(&format!(
                    "  #{} {} score={} {}\n",
                    entry.candidate.position,
                    entry.candidate.selector,
                    entry.score,
                    entry.candidate.values
                ));
            }
            out.push('\n');
        }

        out.push_str(&format_result(
            self.target.as_ref().map(|t| &t.candidate),
            &self.scaffold,
        ));
        out
    }

    /// Pretty-printed JSON rendering
    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
