use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;
use std::process::ExitStatus;

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated working directory for one test.
pub struct DeskWorkspace {
    _temp: TempDir,
    pub root: PathBuf,
    pub data_dir: PathBuf,
}

impl DeskWorkspace {
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("temp dir");
        let root = temp.path().to_path_buf();
        let data_dir = root.join(".desk");
        Self {
            _temp: temp,
            root,
            data_dir,
        }
    }

    pub fn issues_file(&self) -> PathBuf {
        self.data_dir.join("issueTrackerIssues.json")
    }

    pub fn session_file(&self) -> PathBuf {
        self.data_dir.join("isAuthenticated.json")
    }
}

pub struct DeskOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Run the `desk` binary inside `workspace`, keeping a transcript under
/// `logs/<label>.log` for failed-test debugging.
pub fn run_desk<I, S>(workspace: &DeskWorkspace, args: I, label: &str) -> DeskOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::cargo_bin("desk")
        .expect("desk binary")
        .args(args)
        .current_dir(&workspace.root)
        .env_remove("DESK_DIR")
        .env_remove("DESK_ID_PREFIX")
        .env_remove("DESK_DEFAULT_FILTER")
        .env_remove("DESK_PASSWORD")
        .env_remove("DESK_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("run desk");

    let result = DeskOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };

    let log_dir = workspace.root.join("logs");
    fs::create_dir_all(&log_dir).expect("log dir");
    fs::write(
        log_dir.join(format!("{label}.log")),
        format!(
            "status: {}\n--- stdout\n{}\n--- stderr\n{}\n",
            result.status, result.stdout, result.stderr
        ),
    )
    .expect("write log");

    result
}

/// Log in with the default admin credentials.
pub fn login(workspace: &DeskWorkspace) {
    let out = run_desk(
        workspace,
        ["login", "--username", "admin", "--password", "password"],
        "login",
    );
    assert!(out.status.success(), "login failed: {}", out.stderr);
}

/// Report an issue and return its ID (parsed from `--json` output).
pub fn report(workspace: &DeskWorkspace, title: &str, description: &str, priority: &str) -> String {
    let out = run_desk(
        workspace,
        [
            "--json",
            "report",
            "--title",
            title,
            "--description",
            description,
            "--priority",
            priority,
        ],
        "report",
    );
    assert!(out.status.success(), "report failed: {}", out.stderr);
    let value: serde_json::Value = serde_json::from_str(&out.stdout).expect("report json");
    value["issue"]["id"].as_str().expect("issue id").to_string()
}
