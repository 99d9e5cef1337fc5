//! Best-match selection
//!
//! Every element matching the candidate selector is scored by the size of
//! the intersection between its attribute value set and the reference set.
//! The winner is the first candidate, in document order, whose score is
//! strictly greater than every score seen before it. A score of zero never
//! wins, so candidates that share nothing with the reference yield no match.
//!
//! Scoring looks only at attribute values. Attribute names, element
//! structure and position in the tree are ignored.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info};

use crate::attributes::AttributeValueSet;
use crate::document::HtmlDocument;
use crate::error::{Error, Result};
use crate::node_ext::NodeExt;

/// An element from the modified document eligible for matching
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Zero-based position among the selector's matches
    pub position: usize,
    pub tag: String,
    /// Selector for the element alone, see [`NodeExt::own_selector`]
    pub selector: String,
    pub attributes: IndexMap<String, String>,
    pub values: AttributeValueSet,
}

/// A candidate paired with its intersection score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub score: usize,
}

/// Collect the candidates matched by `selector`, in document order
///
/// Fails with [`Error::NoCandidates`] when the selector matches nothing.
pub fn collect_candidates(document: &HtmlDocument, selector: &str) -> Result<Vec<Candidate>> {
    let selection = document.select_all(selector)?;
    if selection.is_empty() {
        return Err(Error::no_candidates(selector));
    }

    let candidates = selection
        .nodes()
        .iter()
        .enumerate()
        .map(|(position, node)| Candidate {
            position,
            tag: node.tag_name(),
            selector: node.own_selector(),
            attributes: node.attribute_pairs(),
            values: node.attribute_value_set(),
        })
        .collect();

    Ok(candidates)
}

/// Score every candidate against the reference set
pub fn score_candidates(
    document: &HtmlDocument,
    selector: &str,
    reference: &AttributeValueSet,
) -> Result<Vec<ScoredCandidate>> {
    let scored = collect_candidates(document, selector)?
        .into_iter()
        .map(|candidate| {
            let score = candidate.values.intersection_size(reference);
            debug!(
                position = candidate.position,
                selector = %candidate.selector,
                score,
                "Scored candidate"
            );
            ScoredCandidate { candidate, score }
        })
        .collect();

    Ok(scored)
}

/// Pick the first candidate with the strictly highest nonzero score
///
/// Ties keep the earlier candidate. Returns `None` when every score is zero.
pub fn pick_best<I>(scored: I) -> Option<ScoredCandidate>
where
    I: IntoIterator<Item = ScoredCandidate>,
{
    let mut best_score = 0;
    let mut best = None;

    for entry in scored {
        if entry.score > best_score {
            best_score = entry.score;
            best = Some(entry);
        }
    }

    best
}

/// Find the candidate in `document` that best matches the reference set
///
/// Returns `Ok(None)` when candidates exist but none shares a value with
/// `reference`. That is a normal outcome, not an error.
pub fn select_best_match(
    document: &HtmlDocument,
    selector: &str,
    reference: &AttributeValueSet,
) -> Result<Option<ScoredCandidate>> {
    let best = pick_best(score_candidates(document, selector, reference)?);

    match &best {
        Some(winner) => info!(
            selector = %winner.candidate.selector,
            score = winner.score,
            "Selected target element"
        ),
        None => info!("No candidate shares an attribute value with the reference"),
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> AttributeValueSet {
        ["make-everything-ok-button", "btn btn-success", "submit"]
            .into_iter()
            .collect()
    }

    fn winner_title(doc: &HtmlDocument) -> Option<String> {
        select_best_match(doc, ".btn", &reference())
            .unwrap()
            .and_then(|winner| winner.candidate.attributes.get("title").cloned())
    }

    #[test]
    fn test_highest_overlap_wins() {
        let doc = HtmlDocument::parse(
            r#"
            <a class="btn" title="one" data-role="other"></a>
            <a class="btn btn-success" title="two" data-role="submit"></a>
            "#,
        );
        assert_eq!(winner_title(&doc).as_deref(), Some("two"));
    }

    #[test]
    fn test_first_of_tied_candidates_wins() {
        let doc = HtmlDocument::parse(
            r#"
            <a class="btn" title="low"></a>
            <a class="btn" title="first" data-role="submit"></a>
            <a class="btn" title="second" data-role="submit"></a>
            "#,
        );
        assert_eq!(winner_title(&doc).as_deref(), Some("first"));
    }

    #[test]
    fn test_disjoint_candidates_give_no_match() {
        let doc =
            HtmlDocument::parse(r#"<a class="btn" title="a"></a><a class="btn" title="b"></a>"#);
        assert!(select_best_match(&doc, ".btn", &reference()).unwrap().is_none());
    }

    #[test]
    fn test_empty_reference_gives_no_match() {
        let doc = HtmlDocument::parse(r#"<a class="btn"></a>"#);
        let result = select_best_match(&doc, ".btn", &AttributeValueSet::new()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_no_candidates_is_an_error() {
        let doc = HtmlDocument::parse(r#"<a class="link" data-role="submit"></a>"#);
        let err = select_best_match(&doc, ".btn", &reference()).unwrap_err();
        assert!(matches!(err, Error::NoCandidates(ref s) if s == ".btn"));
    }

    #[test]
    fn test_attribute_names_are_ignored() {
        let doc = HtmlDocument::parse(r#"<a class="btn" title="submit" rel="x"></a>"#);
        let winner = select_best_match(&doc, ".btn", &reference()).unwrap().unwrap();
        assert_eq!(winner.score, 1);
    }

    #[test]
    fn test_candidates_without_attributes_score_zero() {
        let doc = HtmlDocument::parse(r#"<div><span></span><button></button></div>"#);
        let scored = score_candidates(&doc, "span, button", &reference()).unwrap();
        assert_eq!(scored.len(), 2);
        assert!(scored.iter().all(|s| s.score == 0));
        assert_eq!(scored[0].candidate.position, 0);
        assert_eq!(scored[1].candidate.tag, "button");
    }

    fn scored(title: &str, score: usize) -> ScoredCandidate {
        let mut attributes = IndexMap::new();
        attributes.insert("title".to_string(), title.to_string());
        ScoredCandidate {
            candidate: Candidate {
                position: 0,
                tag: "a".to_string(),
                selector: "a".to_string(),
                values: [title].into_iter().collect(),
                attributes,
            },
            score,
        }
    }

    #[test]
    fn test_pick_best_ignores_order_of_non_winners() {
        let orders = [
            vec![scored("w", 3), scored("a", 1), scored("b", 2)],
            vec![scored("a", 1), scored("w", 3), scored("b", 2)],
            vec![scored("b", 2), scored("a", 1), scored("w", 3)],
        ];
        for order in orders {
            let best = pick_best(order).unwrap();
            assert_eq!(best.candidate.attributes["title"], "w");
        }
    }

    #[test]
    fn test_pick_best_tie_order_decides() {
        let best = pick_best(vec![scored("x", 2), scored("y", 2)]).unwrap();
        assert_eq!(best.candidate.attributes["title"], "x");
        let best = pick_best(vec![scored("y", 2), scored("x", 2)]).unwrap();
        assert_eq!(best.candidate.attributes["title"], "y");
    }

    #[test]
    fn test_pick_best_all_zero() {
        assert!(pick_best(vec![scored("a", 0), scored("b", 0)]).is_none());
        assert!(pick_best(Vec::<ScoredCandidate>::new()).is_none());
    }
}
