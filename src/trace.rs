//! The per-parse step trace.
//!
//! The grammar engine appends one record per rule entry, token consumption,
//! and failure point. The trace is purely observational: dropping it never
//! changes a parse outcome. External tooling renders it as a step table.

use serde::Serialize;

/// What a trace step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraceAction {
    /// Parse begins; the description lists the normalized tokens.
    Start,
    /// A nonterminal rule was entered.
    AttemptRule,
    /// A terminal was matched and the cursor advanced.
    Consume,
    /// The NP-atom cursor was reset to retry as a Name/Pron atom.
    Retry,
    /// A nonterminal rule completed.
    RuleDone,
    /// A located failure was produced.
    Error,
    /// Parse finished, accepted or not.
    End,
}

impl TraceAction {
    pub fn as_str(self) -> &'static str {
        match self {
            TraceAction::Start => "start",
            TraceAction::AttemptRule => "attempt-rule",
            TraceAction::Consume => "consume",
            TraceAction::Retry => "retry",
            TraceAction::RuleDone => "rule-done",
            TraceAction::Error => "error",
            TraceAction::End => "end",
        }
    }
}

/// One step of a parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceRecord {
    /// Normalized tokens not yet consumed, or "<eof>".
    pub remaining: String,
    /// Token position when the step was recorded.
    pub position: usize,
    pub action: TraceAction,
    pub description: String,
}

/// Append-only record sequence scoped to one parse invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Trace {
    records: Vec<TraceRecord>,
}

impl Trace {
    pub fn new() -> Trace {
        Trace::default()
    }

    pub(crate) fn push(&mut self, record: TraceRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraceRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceRecord;
    type IntoIter = std::slice::Iter<'a, TraceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
