//! Reference element extraction
//!
//! The reference element is the known-good element in the original document.
//! Matching cannot start without it, so a missing id is fatal.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::info;

use crate::attributes::AttributeValueSet;
use crate::document::HtmlDocument;
use crate::error::{Error, Result};
use crate::node_ext::NodeExt;

/// Snapshot of the reference element taken from the original document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceElement {
    pub id: String,
    pub tag: String,
    pub attributes: IndexMap<String, String>,
    pub values: AttributeValueSet,
}

impl ReferenceElement {
    /// Attributes rendered as `name = value, name = value` in source order
    pub fn listing(&self) -> String {
        self.attributes
            .iter()
            .map(|(name, value)| format!("{} = {}", name, value))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Look up the element with `element_id` and derive its attribute data
pub fn extract_reference(document: &HtmlDocument, element_id: &str) -> Result<ReferenceElement> {
    if element_id.is_empty() {
        return Err(Error::not_found(element_id));
    }

    let node = document
        .find_by_id(element_id)
        .ok_or_else(|| Error::not_found(element_id))?;

    let reference = ReferenceElement {
        id: element_id.to_string(),
        tag: node.tag_name(),
        attributes: node.attribute_pairs(),
        values: node.attribute_value_set(),
    };

    info!("Original element attributes: [{}]", reference.listing());
    Ok(reference)
}
