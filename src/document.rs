//! Document loading
//!
//! Wraps a parsed `dom_query::Document` together with the URI it was loaded
//! from. Files are always decoded as UTF-8; the charset is not sniffed, and
//! invalid byte sequences become U+FFFD instead of failing the read.

use std::fs;
use std::path::Path;

use dom_query::{Document, Matcher, Node, Selection};
use tracing::{debug, error, warn};

use crate::error::{Error, Result};

/// A parsed HTML document, read-only to the matching code
pub struct HtmlDocument {
    document: Document,
    base_uri: Option<String>,
}

impl HtmlDocument {
    /// Parse markup with no base URI
    pub fn parse(html: &str) -> Self {
        Self {
            document: Document::from(html),
            base_uri: None,
        }
    }

    /// Parse markup, remembering the URI it came from
    pub fn parse_with_base_uri(html: &str, base_uri: impl Into<String>) -> Self {
        Self {
            document: Document::from(html),
            base_uri: Some(base_uri.into()),
        }
    }

    /// Read and parse an HTML file as UTF-8
    ///
    /// The file handle is released before parsing starts. Open and read
    /// failures are logged with the offending path and returned as
    /// [`Error::ReadError`]. Bytes that are not valid UTF-8 are replaced.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| {
            error!(path = %path.display(), error = %e, "Error reading file");
            Error::read(path, e)
        })?;

        let html = match String::from_utf8(bytes) {
            Ok(html) => html,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    valid_up_to = e.utf8_error().valid_up_to(),
                    "File is not valid UTF-8, replacing invalid bytes"
                );
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        let base_uri = fs::canonicalize(path)
            .unwrap_or_else(|_| path.to_path_buf())
            .display()
            .to_string();
        debug!(path = %base_uri, bytes = html.len(), "Parsed document");

        Ok(Self::parse_with_base_uri(&html, base_uri))
    }

    pub fn base_uri(&self) -> Option<&str> {
        self.base_uri.as_deref()
    }

    /// Access the underlying dom_query document
    pub fn inner(&self) -> &Document {
        &self.document
    }

    /// First element in document order whose `id` attribute equals `id`
    pub fn find_by_id(&self, id: &str) -> Option<Node<'_>> {
        self.document
            .select("[id]")
            .nodes()
            .iter()
            .find(|node| node.attr("id").map_or(false, |value| &*value == id))
            .cloned()
    }

    /// Evaluate a CSS selector, returning matches in document order
    ///
    /// Invalid selectors are reported as [`Error::SelectorError`] instead of
    /// being handed to dom_query's panicking `select`.
    pub fn select_all(&self, selector: &str) -> Result<Selection<'_>> {
        if selector.trim().is_empty() {
            return Err(Error::selector_static("empty selector"));
        }
        let matcher = Matcher::new(selector)
            .map_err(|_| Error::selector_owned(format!("invalid CSS selector '{}'", selector)))?;
        Ok(self.document.select_matcher(&matcher))
    }
}
