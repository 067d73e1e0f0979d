//! User-facing output for the CLI: verdicts, ASCII derivation trees, the
//! step trace table, miette error reports, and the JSON document. All
//! rendering lives here so the core stays free of presentation concerns.

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::errors::ParseError;
use crate::trace::Trace;
use crate::tree::TreeNode;

/// Column widths of the trace table: buffer, position, action, description.
const TRACE_WIDTHS: [usize; 4] = [34, 6, 20, 50];

fn stdout() -> StandardStream {
    let choice = if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Prints ACCEPTED in green or REJECTED in red.
pub fn print_verdict(accepted: bool) {
    let mut stream = stdout();
    let (color, verdict) = if accepted {
        (Color::Green, "ACCEPTED")
    } else {
        (Color::Red, "REJECTED")
    };
    let _ = stream.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    println!("{verdict}");
    let _ = stream.reset();
}

/// Prints a rejection with full miette diagnostics.
pub fn print_parse_error(error: ParseError) {
    let report = miette::Report::new(error);
    eprintln!("{report:?}");
}

/// Renders the derivation tree with box-drawing connectors, one node per
/// line, leaves showing their matched word.
pub fn render_tree(root: &TreeNode) -> String {
    let mut out = String::new();
    render_node(root, "", true, &mut out);
    out
}

fn render_node(node: &TreeNode, prefix: &str, is_last: bool, out: &mut String) {
    let connector = if is_last { "└─ " } else { "├─ " };
    let title = match node.token() {
        Some(token) => format!(
            "{} ({}): {}",
            node.label(),
            node.spanish_label(),
            token.norm
        ),
        None => format!("{} ({})", node.label(), node.spanish_label()),
    };
    out.push_str(prefix);
    out.push_str(connector);
    out.push_str(&title);
    out.push('\n');

    let child_prefix = format!("{}{}", prefix, if is_last { "   " } else { "│  " });
    let count = node.children().len();
    for (i, child) in node.children().iter().enumerate() {
        render_node(child, &child_prefix, i + 1 == count, out);
    }
}

/// Pads or truncates `text` to a display width, appending an ellipsis when
/// truncated.
fn clip(text: &str, width: usize) -> String {
    if text.width() <= width {
        let padding = width - text.width();
        return format!("{}{}", text, " ".repeat(padding));
    }
    let mut clipped = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        clipped.push(ch);
        used += w;
    }
    clipped.push('…');
    clipped
}

/// Renders the step trace as an aligned table.
pub fn render_trace_table(trace: &Trace) -> String {
    if trace.is_empty() {
        return "(sin traza disponible)\n".to_string();
    }
    let mut out = String::new();
    let header = ["Buffer restante", "Pos", "Acción", "Descripción"];
    let rule = ["----------------", "---", "------", "----------"];
    for row in [header, rule] {
        let cells: Vec<String> = row
            .iter()
            .zip(TRACE_WIDTHS)
            .map(|(cell, width)| clip(cell, width))
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }
    for record in trace {
        let position = record.position.to_string();
        let cells = [
            clip(&record.remaining, TRACE_WIDTHS[0]),
            clip(&position, TRACE_WIDTHS[1]),
            clip(record.action.as_str(), TRACE_WIDTHS[2]),
            clip(&record.description, TRACE_WIDTHS[3]),
        ];
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }
    out
}

#[derive(Serialize)]
struct JsonError {
    code: String,
    message: String,
    position: usize,
    expected: Vec<String>,
    found: String,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    sentence: &'a str,
    accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    tree: Option<&'a TreeNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonError>,
    trace: &'a Trace,
}

/// Serializes the full parse result, trace included, to stdout.
pub fn print_json(
    sentence: &str,
    result: &Result<TreeNode, ParseError>,
    trace: &Trace,
) -> Result<(), serde_json::Error> {
    let report = JsonReport {
        sentence,
        accepted: result.is_ok(),
        tree: result.as_ref().ok(),
        error: result.as_ref().err().map(|e| JsonError {
            code: format!("sintagma::parse::{}", e.kind.code_suffix()),
            message: e.to_string(),
            position: e.position,
            expected: e.expected.iter().map(ToString::to_string).collect(),
            found: e.found.to_string(),
        }),
        trace,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Prints one fixture line of the batch runner: colored PASS/FAIL status,
/// expectation, actual outcome, fixture name.
pub fn print_case(passed: bool, expectation: &str, accepted: bool, name: &str) {
    let mut stream = stdout();
    let (color, status) = if passed {
        (Color::Green, "PASS")
    } else {
        (Color::Red, "FAIL")
    };
    print!("[");
    let _ = stream.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    print!("{status}");
    let _ = stream.reset();
    println!(
        "] expect={:4} actual={:4} :: {}",
        expectation,
        if accepted { "OK" } else { "FAIL" },
        name
    );
}
