//! Sentence normalization: raw text into a sequence of word tokens.
//!
//! Lowercases, strips terminal punctuation, folds accented letters to their
//! plain equivalents through a fixed table, and splits on Unicode word
//! boundaries. Tokens keep their byte span in the original input so that
//! errors can point back at the exact word.

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

/// A byte range into the original sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// One word of the input sentence. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The word as written, before normalization.
    pub raw: String,
    /// Lowercased, accent-folded form used for lexicon lookups.
    pub norm: String,
    /// 0-based position within the token sequence.
    pub index: usize,
    /// Byte span of `raw` in the original input.
    pub span: Span,
}

/// Sentence-final punctuation stripped before tokenization.
fn is_terminal_punct(ch: char) -> bool {
    matches!(ch, '.' | ',' | ';' | ':' | '!' | '?' | '…')
}

/// Folds the accented letters of the closed lexicon to plain ASCII.
/// Applied after lowercasing, so only lowercase forms appear here.
fn fold_diacritic(ch: char) -> char {
    match ch {
        'á' => 'a',
        'é' => 'e',
        'í' => 'i',
        'ó' => 'o',
        'ú' | 'ü' => 'u',
        'ñ' => 'n',
        other => other,
    }
}

/// Normalizes a single word form: lowercase, then accent folding.
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .flat_map(char::to_lowercase)
        .map(fold_diacritic)
        .collect()
}

/// Splits a sentence into word tokens. May return an empty vector when the
/// input holds no words; the grammar engine reports that as `EmptyInput`.
pub fn tokenize(input: &str) -> Vec<Token> {
    let lead = input.len() - input.trim_start().len();
    let body = input
        .trim_start()
        .trim_end()
        .trim_end_matches(is_terminal_punct);

    let mut tokens = Vec::new();
    for (offset, word) in body.split_word_bound_indices() {
        // Word boundaries also yield whitespace and punctuation fragments.
        if !word.chars().any(char::is_alphanumeric) {
            continue;
        }
        let start = lead + offset;
        tokens.push(Token {
            raw: word.to_string(),
            norm: normalize_word(word),
            index: tokens.len(),
            span: Span::new(start, start + word.len()),
        });
    }
    tokens
}
