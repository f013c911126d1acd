//! End-to-end triage flow: report, log in, list, toggle, delete.

mod common;

use common::cli::{DeskWorkspace, login, report, run_desk};
use serde_json::Value;

fn list_json(ws: &DeskWorkspace, status: &str) -> Value {
    let out = run_desk(ws, ["--json", "list", "--status", status], "list_json");
    assert!(out.status.success(), "list failed: {}", out.stderr);
    serde_json::from_str(&out.stdout).expect("list json")
}

fn card_ids(value: &Value) -> Vec<String> {
    value["rendering"]["cards"]
        .as_array()
        .map(|cards| {
            cards
                .iter()
                .map(|c| c["id"].as_str().unwrap().to_string())
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn e2e_report_list_toggle() {
    let ws = DeskWorkspace::new();

    let printer = report(&ws, "Printer jam", "Tray 2 stuck", "high");
    let wifi = report(&ws, "Wifi down", "Floor 3", "medium");
    assert_ne!(printer, wifi);
    assert!(printer.starts_with("iss-"));

    login(&ws);

    let all = list_json(&ws, "all");
    assert_eq!(all["filter"], "all");
    assert_eq!(all["counts"]["open"], 2);
    assert_eq!(all["rendering"]["kind"], "cards");
    // Newest first.
    assert_eq!(card_ids(&all), vec![wifi.clone(), printer.clone()]);

    let out = run_desk(&ws, ["resolve", &printer], "resolve");
    assert!(out.status.success(), "resolve failed: {}", out.stderr);
    assert!(out.stdout.contains(&format!("Issue {printer} resolved")));
    assert!(out.stdout.contains("Action: Re-open"));

    assert_eq!(card_ids(&list_json(&ws, "open")), vec![wifi.clone()]);
    let resolved = list_json(&ws, "resolved");
    assert_eq!(card_ids(&resolved), vec![printer.clone()]);
    assert_eq!(resolved["rendering"]["cards"][0]["toggle_label"], "Re-open");

    let out = run_desk(&ws, ["--json", "reopen", &printer], "reopen");
    assert!(out.status.success(), "reopen failed: {}", out.stderr);
    let value: Value = serde_json::from_str(&out.stdout).unwrap();
    assert_eq!(value["action"], "reopened");
    assert_eq!(value["issue"]["status"], "open");

    let empty = list_json(&ws, "resolved");
    assert_eq!(empty["rendering"]["kind"], "empty");
    assert_eq!(empty["rendering"]["message"], "No issues found for this filter.");
}

#[test]
fn e2e_text_list_shows_cards_and_empty_message() {
    let ws = DeskWorkspace::new();
    report(&ws, "Printer jam", "Tray 2 stuck", "high");
    login(&ws);

    let out = run_desk(&ws, ["list"], "list_text");
    assert!(out.status.success(), "list failed: {}", out.stderr);
    assert!(out.stdout.contains("[high] Printer jam"));
    assert!(out.stdout.contains("    Tray 2 stuck"));
    assert!(out.stdout.contains("Action: Resolve"));
    assert!(out.stdout.contains("1 open, 0 resolved, 1 total"));

    let out = run_desk(&ws, ["list", "--status", "resolved"], "list_resolved");
    assert!(out.status.success());
    assert!(out.stdout.contains("No issues found for this filter."));
}

#[test]
fn e2e_delete_is_idempotent() {
    let ws = DeskWorkspace::new();
    let id = report(&ws, "Printer jam", "Tray 2 stuck", "low");
    login(&ws);

    let out = run_desk(&ws, ["delete", &id], "delete_first");
    assert!(out.status.success(), "delete failed: {}", out.stderr);
    assert!(out.stdout.contains(&format!("Deleted {id}")));

    let out = run_desk(&ws, ["--json", "delete", &id], "delete_again");
    assert!(out.status.success());
    let value: Value = serde_json::from_str(&out.stdout).unwrap();
    assert_eq!(value["deleted"], false);

    let out = run_desk(&ws, ["--json", "stats"], "stats");
    assert!(out.status.success());
    let value: Value = serde_json::from_str(&out.stdout).unwrap();
    assert_eq!(value["total"], 0);
}

#[test]
fn e2e_toggle_unknown_id_fails() {
    let ws = DeskWorkspace::new();
    login(&ws);

    let out = run_desk(&ws, ["toggle", "iss-nope"], "toggle_unknown");
    assert!(!out.status.success());
    assert!(out.stderr.contains("Issue not found: iss-nope"));
}

#[test]
fn e2e_stats_counts_statuses() {
    let ws = DeskWorkspace::new();
    let a = report(&ws, "A", "a", "low");
    report(&ws, "B", "b", "medium");
    report(&ws, "C", "c", "high");
    login(&ws);
    assert!(run_desk(&ws, ["resolve", &a], "resolve_a").status.success());

    let out = run_desk(&ws, ["stats"], "stats_text");
    assert!(out.status.success());
    assert!(out.stdout.contains("2 open, 1 resolved, 3 total"));
}

#[test]
fn e2e_resolve_twice_keeps_issue_resolved() {
    let ws = DeskWorkspace::new();
    let id = report(&ws, "Printer jam", "Tray 2 stuck", "high");
    login(&ws);

    let out = run_desk(&ws, ["resolve", &id], "resolve_first");
    assert!(out.status.success(), "resolve failed: {}", out.stderr);
    assert!(out.stdout.contains(&format!("Issue {id} resolved")));

    let out = run_desk(&ws, ["resolve", &id], "resolve_second");
    assert!(out.status.success(), "resolve failed: {}", out.stderr);
    assert!(out.stdout.contains(&format!("Issue {id} is already resolved")));
    assert_eq!(card_ids(&list_json(&ws, "resolved")), vec![id.clone()]);

    let out = run_desk(&ws, ["--json", "reopen", &id], "reopen_first");
    let value: Value = serde_json::from_str(&out.stdout).unwrap();
    assert_eq!(value["action"], "reopened");

    let out = run_desk(&ws, ["--json", "reopen", &id], "reopen_second");
    assert!(out.status.success(), "reopen failed: {}", out.stderr);
    let value: Value = serde_json::from_str(&out.stdout).unwrap();
    assert_eq!(value["action"], "unchanged");
    assert_eq!(value["issue"]["status"], "open");
}

#[test]
fn e2e_toggle_flips_both_ways() {
    let ws = DeskWorkspace::new();
    let id = report(&ws, "Wifi down", "Floor 3", "medium");
    login(&ws);

    let out = run_desk(&ws, ["toggle", &id], "toggle_first");
    assert!(out.stdout.contains(&format!("Issue {id} resolved")));
    let out = run_desk(&ws, ["toggle", &id], "toggle_second");
    assert!(out.stdout.contains(&format!("Issue {id} reopened")));
}
