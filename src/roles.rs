//! Flat role summary of an accepted parse, for alignment with external
//! statistical parsers. A thin read of the tree; no grammar logic.

use crate::lexicon::Category;
use crate::normalize::Token;
use crate::tree::{Phrase, TreeNode};

/// Subject, verb, and optional object of an accepted sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roles<'a> {
    pub subject: &'a TreeNode,
    pub verb: &'a Token,
    pub object: Option<&'a TreeNode>,
}

impl Roles<'_> {
    /// One-line rendering, normalized text per role.
    pub fn summary(&self) -> String {
        let object = self
            .object
            .map(|o| o.text())
            .unwrap_or_else(|| "-".to_string());
        format!(
            "subject: {} | verb: {} | object: {}",
            self.subject.text(),
            self.verb.norm,
            object
        )
    }
}

/// Extracts the roles from an `S` tree. Returns `None` when the node is not
/// a sentence root of the shape the grammar produces.
pub fn extract(root: &TreeNode) -> Option<Roles<'_>> {
    if root.phrase() != Some(Phrase::S) {
        return None;
    }
    let [subject, predicate] = root.children() else {
        return None;
    };
    if predicate.phrase() != Some(Phrase::Vp) {
        return None;
    }
    let verb_leaf = predicate.children().first()?;
    if verb_leaf.category() != Some(Category::V) {
        return None;
    }
    let verb = verb_leaf.token()?;
    let object = predicate.children().get(1);
    Some(Roles {
        subject,
        verb,
        object,
    })
}
