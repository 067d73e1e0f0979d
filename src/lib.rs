//! sintagma: a deterministic recursive-descent parser for a small, closed
//! Spanish SVO grammar.
//!
//! The core pipeline is `normalize` → `grammar` (consulting `lexicon`,
//! emitting to `trace`) → `tree`. Each parse call is independent; the only
//! shared state is the immutable global [`Lexicon`].

pub use crate::errors::{ErrorKind, Expected, Found, ParseError};
pub use crate::grammar::{parse, parse_with_trace};
pub use crate::lexicon::{Category, CategorySet, Lexicon};
pub use crate::normalize::{tokenize, Span, Token};
pub use crate::trace::{Trace, TraceAction, TraceRecord};
pub use crate::tree::{Phrase, TreeNode};

pub mod cli;
pub mod errors;
pub mod grammar;
pub mod lexicon;
pub mod normalize;
pub mod roles;
pub mod runner;
pub mod trace;
pub mod tree;
