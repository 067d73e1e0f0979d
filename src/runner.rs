//! Batch fixture runner: feeds prepared sentence files through the parser
//! and checks accept/reject outcomes. One sentence per `.txt` file;
//! non-empty lines are joined with spaces before parsing.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::errors::ParseError;
use crate::grammar::parse;
use crate::tree::TreeNode;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("fixture directory not found: {0}")]
    MissingDirectory(PathBuf),
    #[error("failed to read fixture {path}: {source}")]
    UnreadableFixture {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The outcome a fixture file is expected to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    Accept,
    Reject,
}

impl Expectation {
    pub fn as_str(self) -> &'static str {
        match self {
            Expectation::Accept => "OK",
            Expectation::Reject => "FAIL",
        }
    }
}

/// Result of running one fixture sentence.
#[derive(Debug)]
pub struct CaseResult {
    pub name: String,
    pub sentence: String,
    pub expectation: Expectation,
    pub outcome: Result<TreeNode, ParseError>,
}

impl CaseResult {
    pub fn accepted(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn passed(&self) -> bool {
        match self.expectation {
            Expectation::Accept => self.outcome.is_ok(),
            Expectation::Reject => self.outcome.is_err(),
        }
    }
}

/// Pass/fail accounting over one or more suites.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub total: usize,
}

impl Summary {
    pub fn add(&mut self, case: &CaseResult) {
        self.total += 1;
        if case.passed() {
            self.passed += 1;
        }
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

/// Joins the non-empty lines of a fixture file into one sentence.
pub fn load_sentence(path: &Path) -> Result<String, RunnerError> {
    let text = fs::read_to_string(path).map_err(|source| RunnerError::UnreadableFixture {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" "))
}

/// The `.txt` fixtures under `dir`, sorted by path for stable ordering.
fn fixture_files(dir: &Path) -> Result<Vec<PathBuf>, RunnerError> {
    if !dir.is_dir() {
        return Err(RunnerError::MissingDirectory(dir.to_path_buf()));
    }
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "txt"))
        .collect();
    files.sort();
    Ok(files)
}

/// Parses every fixture in `dir` against the given expectation.
pub fn run_dir(dir: &Path, expectation: Expectation) -> Result<Vec<CaseResult>, RunnerError> {
    let mut results = Vec::new();
    for path in fixture_files(dir)? {
        let sentence = load_sentence(&path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        results.push(CaseResult {
            name,
            outcome: parse(&sentence),
            sentence,
            expectation,
        });
    }
    Ok(results)
}
