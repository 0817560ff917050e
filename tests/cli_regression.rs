// Regression tests for the CLI surface: output shape on success, miette
// diagnostics on failure.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

fn emet() -> Command {
    Command::cargo_bin("emet").unwrap()
}

#[test]
fn cli_prints_input_then_fragment() {
    emet()
        .arg("ul>li*2")
        .assert()
        .success()
        .stdout(contains("ul>li*2").and(contains("<ul><li></li><li></li></ul>")));
}

#[test]
fn cli_content_placeholder_fills_leaves() {
    emet()
        .args(["div.root*3", "--content", "it"])
        .assert()
        .success()
        .stdout(contains(
            "<div class=\"root\">it</div><div class=\"root\">it</div><div class=\"root\">it</div>",
        ));
}

#[test]
fn cli_tree_prints_json() {
    emet()
        .args(["div.root", "--tree"])
        .assert()
        .success()
        .stdout(contains("\"label\": \"div\"").and(contains("\"class_name\": \"root\"")));
}

#[test]
fn cli_missing_argument_is_a_usage_error() {
    emet().assert().failure().stderr(contains("Usage"));
}

#[test]
fn cli_reports_miette_diagnostics_on_parse_error() {
    emet()
        .arg("123abc")
        .assert()
        .failure()
        .stderr(contains("emet::parse").or(contains("expected letter")));
}

#[test]
fn cli_reports_capacity_overflow() {
    emet()
        .args(["div*1000", "--max-output", "32"])
        .assert()
        .failure()
        .stderr(contains("emet::render::capacity_exceeded").or(contains("cap is 32")));
}
