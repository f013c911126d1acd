//! The admin gate in front of triage commands.

mod common;

use common::cli::{DeskWorkspace, login, report, run_desk};

#[test]
fn e2e_triage_requires_login() {
    let ws = DeskWorkspace::new();
    let id = report(&ws, "Printer jam", "Tray 2 stuck", "high");

    for args in [
        vec!["list"],
        vec!["toggle", id.as_str()],
        vec!["delete", id.as_str()],
        vec!["stats"],
    ] {
        let out = run_desk(&ws, &args, "gated");
        assert!(!out.status.success(), "{args:?} ran without login");
        assert!(out.stderr.contains("Not logged in"), "{args:?}: {}", out.stderr);
    }
}

#[test]
fn e2e_wrong_credentials_rejected() {
    let ws = DeskWorkspace::new();
    let out = run_desk(
        &ws,
        ["login", "--username", "admin", "--password", "hunter2"],
        "bad_login",
    );
    assert!(!out.status.success());
    assert!(out.stderr.contains("Invalid credentials"));

    let out = run_desk(&ws, ["list"], "still_gated");
    assert!(out.stderr.contains("Not logged in"));
}

#[test]
fn e2e_logout_ends_session() {
    let ws = DeskWorkspace::new();
    login(&ws);
    assert_eq!(
        std::fs::read_to_string(ws.session_file()).unwrap().trim(),
        "true"
    );
    assert!(run_desk(&ws, ["list"], "list_in").status.success());

    assert!(run_desk(&ws, ["logout"], "logout").status.success());
    let out = run_desk(&ws, ["list"], "list_out");
    assert!(!out.status.success());
    assert!(out.stderr.contains("Not logged in"));

    // A second logout is harmless.
    assert!(run_desk(&ws, ["logout"], "logout_again").status.success());
}

#[test]
fn e2e_config_credentials() {
    let ws = DeskWorkspace::new();
    std::fs::create_dir_all(&ws.data_dir).unwrap();
    std::fs::write(
        ws.data_dir.join("config.yaml"),
        "admin_username: boss\nadmin_password: s3cret\n",
    )
    .unwrap();

    let out = run_desk(
        &ws,
        ["login", "-u", "admin", "-p", "password"],
        "default_creds",
    );
    assert!(!out.status.success());

    let out = run_desk(&ws, ["login", "-u", "boss", "-p", "s3cret"], "config_creds");
    assert!(out.status.success(), "login failed: {}", out.stderr);
    assert!(out.stdout.contains("Logged in as boss"));
}

#[test]
fn e2e_list_without_session_reports_hint() {
    use assert_cmd::Command;
    use predicates::prelude::*;

    let ws = DeskWorkspace::new();
    Command::cargo_bin("desk")
        .unwrap()
        .args(["list"])
        .current_dir(&ws.root)
        .env_remove("DESK_DIR")
        .env("NO_COLOR", "1")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("run `desk login` first"));
}
