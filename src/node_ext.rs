use dom_query::Node;
use indexmap::IndexMap;

use crate::attributes::AttributeValueSet;

/// Extension trait for dom_query::Node to read the data matching works on
pub trait NodeExt {
    /// Lowercased tag name, empty for non-element nodes
    fn tag_name(&self) -> String;
    /// Attributes as ordered (name, value) pairs, in source order
    fn attribute_pairs(&self) -> IndexMap<String, String>;
    fn attribute_value_set(&self) -> AttributeValueSet;
    /// Selector for the element alone: `tag.class1.class2`
    fn own_selector(&self) -> String;
}

impl<'a> NodeExt for Node<'a> {
    fn tag_name(&self) -> String {
        self.node_name()
            .map(|n| n.to_lowercase())
            .unwrap_or_default()
    }

    fn attribute_pairs(&self) -> IndexMap<String, String> {
        self.attrs()
            .iter()
            .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
            .collect()
    }

    fn attribute_value_set(&self) -> AttributeValueSet {
        self.attrs()
            .iter()
            .map(|attr| attr.value.to_string())
            .collect()
    }

    fn own_selector(&self) -> String {
        let mut selector = self.tag_name();

        if let Some(classes) = self.attr("class") {
            for class in classes.split_whitespace() {
                selector.push('.');
                selector.push_str(class);
            }
        }

        selector
    }
}
