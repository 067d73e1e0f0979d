//! The grammar engine: predictive recursive descent over the SVO grammar.
//!
//! One function per nonterminal, a single token of lookahead, and no
//! backtracking across alternatives. The only cursor reset is local to one
//! NP-atom: when the `(Det) Adj* N` branch finds no noun, the atom is
//! retried from its start token as a bare Name or Pron. Errors are located
//! at the deepest position reached.
//!
//! ```text
//! S       ::= NP VP          (input must be exhausted afterwards)
//! NP      ::= NP-atom (Conj NP-atom)*
//! NP-atom ::= (Det) Adj* N | Name | Pron
//! VP      ::= V (NP)         (object decided by one-token lookahead)
//! ```

use crate::errors::{ErrorKind, Expected, ParseError, Reporter};
use crate::lexicon::{Category, CategorySet, Lexicon};
use crate::normalize::{tokenize, Token};
use crate::trace::{Trace, TraceAction, TraceRecord};
use crate::tree::{Phrase, TreeNode};

/// Parses one sentence. `Err` is the ordinary rejection outcome.
pub fn parse(sentence: &str) -> Result<TreeNode, ParseError> {
    let mut trace = Trace::new();
    run(sentence, &mut trace)
}

/// Parses one sentence and returns the step trace alongside the result.
pub fn parse_with_trace(sentence: &str) -> (Result<TreeNode, ParseError>, Trace) {
    let mut trace = Trace::new();
    let result = run(sentence, &mut trace);
    (result, trace)
}

fn run(sentence: &str, trace: &mut Trace) -> Result<TreeNode, ParseError> {
    let reporter = Reporter::new(sentence);
    let tokens = tokenize(sentence);
    let mut cursor = Cursor {
        tokens: &tokens,
        pos: 0,
        lexicon: Lexicon::global(),
        reporter,
        trace,
    };

    if cursor.tokens.is_empty() {
        let err = cursor.reporter.empty_input();
        cursor.record(TraceAction::Error, err.to_string());
        cursor.record(TraceAction::End, "rejected, no tokens".to_string());
        return Err(err);
    }

    let listing = cursor
        .tokens
        .iter()
        .map(|t| t.norm.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    cursor.record(TraceAction::Start, format!("tokens: [{listing}]"));

    let result = cursor.sentence();
    let summary = match &result {
        Ok(_) => format!(
            "accepted, {}/{} tokens consumed",
            cursor.pos,
            cursor.tokens.len()
        ),
        Err(_) => format!(
            "rejected after {} of {} tokens",
            cursor.pos,
            cursor.tokens.len()
        ),
    };
    cursor.record(TraceAction::End, summary);
    result
}

/// Token-stream cursor threaded through the rule functions. Holds the only
/// mutable parse state (the position) plus the trace accumulator.
struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    lexicon: &'static Lexicon,
    reporter: Reporter,
    trace: &'a mut Trace,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn categories(&self, token: &Token) -> CategorySet {
        self.lexicon.lookup(&token.norm)
    }

    fn peek_eligible(&self, category: Category) -> bool {
        self.peek()
            .map_or(false, |t| self.categories(t).contains(category))
    }

    fn remaining(&self) -> String {
        if self.pos >= self.tokens.len() {
            return "<eof>".to_string();
        }
        self.tokens[self.pos..]
            .iter()
            .map(|t| t.norm.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn record(&mut self, action: TraceAction, description: String) {
        self.trace.push(TraceRecord {
            remaining: self.remaining(),
            position: self.pos,
            action,
            description,
        });
    }

    /// Consumes the current token as `category`. Callers must have checked
    /// eligibility via lookahead.
    fn consume(&mut self, category: Category) -> TreeNode {
        debug_assert!(self.pos < self.tokens.len(), "consume past end of input");
        let token = self.tokens[self.pos].clone();
        self.record(
            TraceAction::Consume,
            format!("matched {} '{}'", category, token.norm),
        );
        self.pos += 1;
        TreeNode::leaf(category, token)
    }

    fn fail_token(
        &mut self,
        kind: ErrorKind,
        expected: Vec<Expected>,
        token: &Token,
    ) -> ParseError {
        let err = self.reporter.at_token(kind, expected, token);
        self.record(TraceAction::Error, err.to_string());
        err
    }

    fn fail_end(&mut self, kind: ErrorKind, expected: Vec<Expected>, position: usize) -> ParseError {
        let err = self.reporter.at_end(kind, expected, position);
        self.record(TraceAction::Error, err.to_string());
        err
    }

    /// `S ::= NP VP`, then the stream must be exhausted.
    fn sentence(&mut self) -> Result<TreeNode, ParseError> {
        self.record(TraceAction::AttemptRule, "S ::= NP VP".to_string());
        let subject = self.noun_phrase()?;
        let predicate = self.verb_phrase()?;
        if let Some(extra) = self.peek().cloned() {
            return Err(self.fail_token(
                ErrorKind::TrailingInput,
                vec![Expected::EndOfInput],
                &extra,
            ));
        }
        self.record(TraceAction::RuleDone, "S complete".to_string());
        Ok(TreeNode::branch(Phrase::S, vec![subject, predicate]))
    }

    /// `NP ::= NP-atom (Conj NP-atom)*`. A lone atom is returned as-is;
    /// a coordination wraps atoms and conjunctions as ordered children.
    fn noun_phrase(&mut self) -> Result<TreeNode, ParseError> {
        self.record(
            TraceAction::AttemptRule,
            "NP ::= NP-atom (Conj NP-atom)*".to_string(),
        );
        let first = self.np_atom()?;
        let mut parts = vec![first];
        while self.peek_eligible(Category::Conj) {
            parts.push(self.consume(Category::Conj));
            parts.push(self.np_atom()?);
        }
        self.record(TraceAction::RuleDone, "NP complete".to_string());
        if parts.len() == 1 {
            return Ok(parts.remove(0));
        }
        Ok(TreeNode::branch(Phrase::Np, parts))
    }

    /// `NP-atom ::= (Det) Adj* N | Name | Pron`.
    ///
    /// The Det/Adj*/N branch is tried first, per the category priority
    /// order. When no noun appears at the required position the cursor
    /// resets to the atom start; if that token is Name- or Pron-eligible
    /// the atom is that single token, otherwise the failure stays located
    /// at the position where N was required.
    fn np_atom(&mut self) -> Result<TreeNode, ParseError> {
        self.record(
            TraceAction::AttemptRule,
            "NP-atom ::= (Det) Adj* N | Name | Pron".to_string(),
        );
        let start = self.pos;
        let mut children = Vec::new();

        if self.peek_eligible(Category::Det) {
            children.push(self.consume(Category::Det));
        }
        while self.peek_eligible(Category::Adj) {
            children.push(self.consume(Category::Adj));
        }

        if self.peek_eligible(Category::N) {
            children.push(self.consume(Category::N));
            self.record(TraceAction::RuleDone, "NP-atom complete".to_string());
            return Ok(TreeNode::branch(Phrase::Np, children));
        }

        let noun_pos = self.pos;
        if self.pos != start {
            self.pos = start;
            self.record(
                TraceAction::Retry,
                "no N found, retrying atom as Name/Pron".to_string(),
            );
        }

        for single in [Category::Name, Category::Pron] {
            if self.peek_eligible(single) {
                let atom = self.consume(single);
                self.record(TraceAction::RuleDone, "NP-atom complete".to_string());
                return Ok(TreeNode::branch(Phrase::Np, vec![atom]));
            }
        }

        let expected = vec![
            Expected::Category(Category::N),
            Expected::Category(Category::Name),
            Expected::Category(Category::Pron),
        ];
        match self.tokens.get(noun_pos).cloned() {
            None => Err(self.fail_end(ErrorKind::PrematureEnd, expected, noun_pos)),
            Some(token) => {
                if self.categories(&token).is_empty() {
                    let word = token.norm.clone();
                    Err(self.fail_token(ErrorKind::UnknownWord { word }, expected, &token))
                } else {
                    Err(self.fail_token(ErrorKind::UnexpectedCategory, expected, &token))
                }
            }
        }
    }

    /// `VP ::= V (NP)`. The optional object is decided by whether the next
    /// token can start an NP; once attempted, a failing object NP fails the
    /// whole parse rather than falling back to the intransitive reading.
    fn verb_phrase(&mut self) -> Result<TreeNode, ParseError> {
        self.record(TraceAction::AttemptRule, "VP ::= V (NP)".to_string());
        let expected_verb = vec![Expected::Category(Category::V)];
        let verb = match self.peek().cloned() {
            None => {
                return Err(self.fail_end(ErrorKind::PrematureEnd, expected_verb, self.pos));
            }
            Some(token) => {
                let cats = self.categories(&token);
                if cats.is_empty() {
                    let word = token.norm.clone();
                    return Err(self.fail_token(
                        ErrorKind::UnknownWord { word },
                        expected_verb,
                        &token,
                    ));
                }
                if !cats.contains(Category::V) {
                    return Err(self.fail_token(
                        ErrorKind::UnexpectedCategory,
                        expected_verb,
                        &token,
                    ));
                }
                self.consume(Category::V)
            }
        };

        let object_ahead = self
            .peek()
            .map_or(false, |t| self.categories(t).intersects(CategorySet::NP_START));

        let mut children = vec![verb];
        if object_ahead {
            children.push(self.noun_phrase()?);
            self.record(TraceAction::RuleDone, "VP complete with object".to_string());
        } else {
            self.record(TraceAction::RuleDone, "VP complete, intransitive".to_string());
        }
        Ok(TreeNode::branch(Phrase::Vp, children))
    }
}
