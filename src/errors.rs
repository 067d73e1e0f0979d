//! Located parse errors.
//!
//! Grammatical rejection is the ordinary failure outcome of a parse, never
//! a panic: every error carries the token position, the set of acceptable
//! continuations at that point, and what was actually found, plus a byte
//! span into the original sentence for miette reporting.

use std::fmt;
use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceSpan};

use crate::lexicon::Category;
use crate::normalize::Token;

/// The failure modes of a parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Normalization produced zero word tokens.
    EmptyInput,
    /// A word with no lexicon entry sits where a terminal is required.
    UnknownWord { word: String },
    /// The token present satisfies none of the required categories.
    UnexpectedCategory,
    /// Tokens remain after a complete sentence was matched.
    TrailingInput,
    /// Input ended while a terminal was still required.
    PrematureEnd,
}

impl ErrorKind {
    pub const fn code_suffix(&self) -> &'static str {
        match self {
            ErrorKind::EmptyInput => "empty_input",
            ErrorKind::UnknownWord { .. } => "unknown_word",
            ErrorKind::UnexpectedCategory => "unexpected_category",
            ErrorKind::TrailingInput => "trailing_input",
            ErrorKind::PrematureEnd => "premature_end",
        }
    }
}

/// A symbol the grammar would have accepted at the failure point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Category(Category),
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Category(c) => write!(f, "{c}"),
            Expected::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// What actually occupied the failure position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    Word(String),
    EndOfInput,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Word(w) => write!(f, "'{w}'"),
            Found::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// A located grammatical rejection.
#[derive(Debug)]
pub struct ParseError {
    pub kind: ErrorKind,
    /// 0-based token index of the failure.
    pub position: usize,
    /// Acceptable continuations at `position`, in grammar priority order.
    pub expected: Vec<Expected>,
    pub found: Found,
    source: Arc<NamedSource<String>>,
    span: SourceSpan,
}

impl ParseError {
    /// Renders the expected set as "Det, Adj or N". Empty when the error
    /// carries no expectations (only `EmptyInput`).
    pub fn expected_list(&self) -> String {
        let names: Vec<String> = self.expected.iter().map(Expected::to_string).collect();
        match names.len() {
            0 => String::new(),
            1 => names[0].clone(),
            n => format!("{} or {}", names[..n - 1].join(", "), names[n - 1]),
        }
    }
}

impl std::error::Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::EmptyInput => f.write_str("empty input: no words to parse"),
            ErrorKind::UnknownWord { word } => {
                write!(f, "unknown word '{}' at token {}", word, self.position)
            }
            ErrorKind::UnexpectedCategory => write!(
                f,
                "expected {} at token {}, found {}",
                self.expected_list(),
                self.position,
                self.found
            ),
            ErrorKind::TrailingInput => write!(
                f,
                "unexpected trailing input starting at token {}: {}",
                self.position, self.found
            ),
            ErrorKind::PrematureEnd => write!(
                f,
                "input ended while expecting {} at token {}",
                self.expected_list(),
                self.position
            ),
        }
    }
}

impl Diagnostic for ParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!(
            "sintagma::parse::{}",
            self.kind.code_suffix()
        )))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.expected.is_empty() {
            return None;
        }
        Some(Box::new(format!(
            "acceptable here: {}",
            self.expected_list()
        )))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = match &self.kind {
            ErrorKind::EmptyInput => "nothing to parse".to_string(),
            ErrorKind::UnknownWord { .. } => "not in the lexicon".to_string(),
            ErrorKind::UnexpectedCategory => format!("expected {}", self.expected_list()),
            ErrorKind::TrailingInput => "trailing input starts here".to_string(),
            ErrorKind::PrematureEnd => format!("expected {} after this", self.expected_list()),
        };
        Some(Box::new(
            std::iter::once(LabeledSpan::new_with_span(Some(label), self.span)),
        ))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&*self.source)
    }
}

/// Builds located errors for one parse invocation. Owns the shared
/// `NamedSource` so every error of the parse points at the same sentence.
#[derive(Debug, Clone)]
pub(crate) struct Reporter {
    source: Arc<NamedSource<String>>,
    input_len: usize,
}

impl Reporter {
    pub fn new(input: &str) -> Self {
        Reporter {
            source: Arc::new(NamedSource::new("sentence", input.to_string())),
            input_len: input.len(),
        }
    }

    /// An error located at a concrete token.
    pub fn at_token(&self, kind: ErrorKind, expected: Vec<Expected>, token: &Token) -> ParseError {
        ParseError {
            kind,
            position: token.index,
            expected,
            found: Found::Word(token.raw.clone()),
            source: Arc::clone(&self.source),
            span: (token.span.start..token.span.end).into(),
        }
    }

    /// An error located at the end of the input.
    pub fn at_end(&self, kind: ErrorKind, expected: Vec<Expected>, position: usize) -> ParseError {
        ParseError {
            kind,
            position,
            expected,
            found: Found::EndOfInput,
            source: Arc::clone(&self.source),
            span: (self.input_len..self.input_len).into(),
        }
    }

    pub fn empty_input(&self) -> ParseError {
        self.at_end(ErrorKind::EmptyInput, vec![], 0)
    }
}
