//! The derivation tree produced by an accepted parse.
//!
//! Pure data: nodes carry a label, the token range they cover, and their
//! children. External renderers and the role extractor work from the
//! accessors here without re-deriving any grammar logic.

use std::ops::Range;

use serde::Serialize;

use crate::lexicon::Category;
use crate::normalize::Token;

/// A nonterminal label. Coordinated noun phrases and single atoms are both
/// labeled `Np`, mirroring the grammar's output shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phrase {
    S,
    Np,
    Vp,
}

impl Phrase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phrase::S => "S",
            Phrase::Np => "NP",
            Phrase::Vp => "VP",
        }
    }

    pub fn spanish_name(self) -> &'static str {
        match self {
            Phrase::S => "Oración",
            Phrase::Np => "Sintagma nominal",
            Phrase::Vp => "Sintagma verbal",
        }
    }
}

impl std::fmt::Display for Phrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of the derivation tree.
///
/// Invariants, upheld by the constructors: a leaf covers exactly one token;
/// a branch has at least one child and its span is the contiguous
/// concatenation of its children's spans in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TreeNode {
    Leaf {
        category: Category,
        token: Token,
    },
    Branch {
        phrase: Phrase,
        /// Token-index range covered by this subtree.
        span: Range<usize>,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub(crate) fn leaf(category: Category, token: Token) -> TreeNode {
        TreeNode::Leaf { category, token }
    }

    pub(crate) fn branch(phrase: Phrase, children: Vec<TreeNode>) -> TreeNode {
        debug_assert!(!children.is_empty(), "branch node with no children");
        debug_assert!(
            children
                .windows(2)
                .all(|pair| pair[0].span().end == pair[1].span().start),
            "branch children must cover contiguous token ranges"
        );
        let span = children[0].span().start..children[children.len() - 1].span().end;
        TreeNode::Branch {
            phrase,
            span,
            children,
        }
    }

    /// The token-index range this node covers.
    pub fn span(&self) -> Range<usize> {
        match self {
            TreeNode::Leaf { token, .. } => token.index..token.index + 1,
            TreeNode::Branch { span, .. } => span.clone(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TreeNode::Leaf { category, .. } => category.as_str(),
            TreeNode::Branch { phrase, .. } => phrase.as_str(),
        }
    }

    pub fn spanish_label(&self) -> &'static str {
        match self {
            TreeNode::Leaf { category, .. } => category.spanish_name(),
            TreeNode::Branch { phrase, .. } => phrase.spanish_name(),
        }
    }

    pub fn phrase(&self) -> Option<Phrase> {
        match self {
            TreeNode::Branch { phrase, .. } => Some(*phrase),
            TreeNode::Leaf { .. } => None,
        }
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            TreeNode::Leaf { category, .. } => Some(*category),
            TreeNode::Branch { .. } => None,
        }
    }

    /// The matched token of a leaf node.
    pub fn token(&self) -> Option<&Token> {
        match self {
            TreeNode::Leaf { token, .. } => Some(token),
            TreeNode::Branch { .. } => None,
        }
    }

    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::Branch { children, .. } => children,
            TreeNode::Leaf { .. } => &[],
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    /// The leaf tokens of this subtree, left to right.
    pub fn tokens(&self) -> Vec<&Token> {
        let mut out = Vec::new();
        self.collect_tokens(&mut out);
        out
    }

    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a Token>) {
        match self {
            TreeNode::Leaf { token, .. } => out.push(token),
            TreeNode::Branch { children, .. } => {
                for child in children {
                    child.collect_tokens(out);
                }
            }
        }
    }

    /// Normalized text covered by this subtree.
    pub fn text(&self) -> String {
        self.tokens()
            .iter()
            .map(|t| t.norm.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Depth-first traversal; `visit` receives each node with its depth.
    pub fn walk<F: FnMut(&TreeNode, usize)>(&self, visit: &mut F) {
        self.walk_at(0, visit);
    }

    fn walk_at<F: FnMut(&TreeNode, usize)>(&self, depth: usize, visit: &mut F) {
        visit(self, depth);
        for child in self.children() {
            child.walk_at(depth + 1, visit);
        }
    }
}
