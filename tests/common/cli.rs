use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::ExitStatus;

use assert_cmd::Command;
use tempfile::TempDir;

/// A throwaway directory to run `bt` in.
pub struct BtWorkspace {
    _temp_dir: TempDir,
    pub root: PathBuf,
}

impl BtWorkspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(".bugtrack")
    }

    pub fn bugs_file(&self) -> PathBuf {
        self.data_dir().join("bug-tracker-bugs.json")
    }
}

pub struct BtOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl BtOutput {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}): {}", self.stdout))
    }
}

/// A `bt` command rooted in `workspace` with a clean environment.
pub fn bt_command(workspace: &BtWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("bt").expect("bt binary");
    cmd.current_dir(&workspace.root)
        .env_remove("BT_DATA_DIR")
        .env_remove("BT_LOG")
        .env("BT_ACTOR", "Test Runner");
    cmd
}

/// Run `bt` inside `workspace`.
///
/// `label` names the step in failure messages.
pub fn run_bt<I, S>(workspace: &BtWorkspace, args: I, label: &str) -> BtOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = bt_command(workspace);
    cmd.args(args);
    capture(&mut cmd, label)
}

pub fn capture(cmd: &mut Command, label: &str) -> BtOutput {
    let output = cmd.output().unwrap_or_else(|e| panic!("{label}: {e}"));
    BtOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Run `bt` and assert it succeeded.
pub fn run_bt_ok<I, S>(workspace: &BtWorkspace, args: I, label: &str) -> BtOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = run_bt(workspace, args, label);
    assert!(
        output.status.success(),
        "{label} failed\nstdout: {}\nstderr: {}",
        output.stdout,
        output.stderr
    );
    output
}
