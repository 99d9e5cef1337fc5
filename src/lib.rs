//! Re-locate an element across two versions of an HTML page
//!
//! Given a reference element (found by id in an "original" document), this
//! crate finds the element in a "modified" document that shares the most
//! attribute values with it. Candidates are chosen with a CSS selector and
//! scored by the size of the intersection of attribute value sets; the first
//! candidate in document order with the strictly highest nonzero score wins.
//!
//! # Examples
//!
//! ```rust
//! use html_match::{extract_reference, select_best_match, HtmlDocument};
//!
//! # fn example() -> html_match::Result<()> {
//! let original = HtmlDocument::parse(
//!     r#"<button id="ok" class="btn btn-success" data-role="submit">OK</button>"#,
//! );
//! let modified = HtmlDocument::parse(
//!     r#"<a class="btn" title="other"></a>
//!        <a class="btn btn-success" data-role="submit">OK</a>"#,
//! );
//!
//! let reference = extract_reference(&original, "ok")?;
//! let best = select_best_match(&modified, ".btn", &reference.values)?;
//!
//! assert_eq!(best.map(|m| m.score), Some(2));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod analyzer;
pub mod attributes;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod matcher;
pub mod node_ext;
pub mod reference;
pub mod report;

// Re-export commonly used types
pub use analyzer::{find_match, find_match_in};
pub use attributes::AttributeValueSet;
pub use config::{MatchConfig, OutputFormat};
pub use document::HtmlDocument;
pub use error::{Error, Result};
pub use matcher::{select_best_match, Candidate, ScoredCandidate};
pub use reference::{extract_reference, ReferenceElement};
pub use report::{format_result, MatchReport};
