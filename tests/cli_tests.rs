//! End-to-end checks of the sintagma binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn sintagma() -> Command {
    Command::cargo_bin("sintagma").expect("binary should build")
}

#[test]
fn parse_accepts_a_valid_sentence() {
    sintagma()
        .args(["parse", "La niña mira el perro"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ACCEPTED"));
}

#[test]
fn parse_rejects_with_nonzero_exit() {
    sintagma()
        .args(["parse", "xyz corre"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("REJECTED"))
        .stderr(predicate::str::contains("unknown word"));
}

#[test]
fn parse_tree_flag_prints_the_derivation() {
    sintagma()
        .args(["parse", "--tree", "El perro corre"])
        .assert()
        .success()
        .stdout(predicate::str::contains("S (Oración)"))
        .stdout(predicate::str::contains("V (Verbo): corre"));
}

#[test]
fn parse_trace_flag_prints_the_step_table() {
    sintagma()
        .args(["parse", "--trace", "Ana duerme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buffer restante"))
        .stdout(predicate::str::contains("attempt-rule"));
}

#[test]
fn parse_roles_flag_prints_the_summary() {
    sintagma()
        .args(["parse", "--roles", "La niña mira el perro"])
        .assert()
        .success()
        .stdout(predicate::str::contains("subject: la nina"))
        .stdout(predicate::str::contains("verb: mira"))
        .stdout(predicate::str::contains("object: el perro"));
}

#[test]
fn parse_json_emits_a_valid_document() {
    let output = sintagma()
        .args(["parse", "--json", "Ana duerme"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let doc: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(doc["accepted"], serde_json::Value::Bool(true));
    assert!(doc["tree"].is_object());
    assert!(doc["trace"]["records"].is_array());
}

#[test]
fn parse_json_reports_rejections() {
    let output = sintagma()
        .args(["parse", "--json", "xyz corre"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();
    let doc: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(doc["accepted"], serde_json::Value::Bool(false));
    assert_eq!(doc["error"]["position"], serde_json::json!(0));
    assert_eq!(
        doc["error"]["code"],
        serde_json::json!("sintagma::parse::unknown_word")
    );
}

#[test]
fn test_subcommand_runs_the_fixture_suites() {
    let manifest = env!("CARGO_MANIFEST_DIR");
    sintagma()
        .args([
            "test",
            "--ok-dir",
            &format!("{manifest}/tests/fixtures/nl_ok"),
            "--fail-dir",
            &format!("{manifest}/tests/fixtures/nl_fail"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary:"))
        .stdout(predicate::str::contains("cases passed"));
}

#[test]
fn test_subcommand_fails_on_missing_directory() {
    sintagma()
        .args(["test", "--ok-dir", "definitely/not/here"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fixture directory not found"));
}
