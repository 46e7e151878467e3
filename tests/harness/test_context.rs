//! Shared testing harness for `ghflow` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::FakeTools;

/// Isolated project, command bundle, `$HOME` and `PATH` for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    bundle_dir: PathBuf,
    tools: FakeTools,
}

impl TestContext {
    /// Environment with both `git` and `gh` available.
    pub(crate) fn new() -> Self {
        Self::with_tools(&["git", "gh"])
    }

    /// Environment where only `installed` resolve on `PATH`.
    pub(crate) fn with_tools(installed: &[&str]) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(root.path().join("home")).expect("Failed to create test home");

        let bundle_dir = root.path().join("bundle");
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        copy_dir(&manifest_dir.join("commands"), &bundle_dir.join("commands"));
        copy_dir(&manifest_dir.join("hooks"), &bundle_dir.join("hooks"));

        let tools = FakeTools::new(root.path(), installed);

        Self { root, work_dir, bundle_dir, tools }
    }

    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    /// Project directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Checkout of the command bundle passed with `--source`.
    pub(crate) fn bundle_dir(&self) -> &Path {
        &self.bundle_dir
    }

    pub(crate) fn tools(&self) -> &FakeTools {
        &self.tools
    }

    /// Write a file relative to the project directory.
    pub(crate) fn write_project_file(&self, name: &str, content: &str) {
        let path = self.work_dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write project file");
    }

    /// Build a command for invoking the compiled `ghflow` binary in the project.
    pub(crate) fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `ghflow` binary within a custom directory.
    pub(crate) fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("ghflow").expect("Failed to locate ghflow binary");
        cmd.current_dir(dir.as_ref())
            .env("HOME", self.root.path().join("home"))
            .env("PATH", &self.tools.bin_dir)
            .env_remove("GHFLOW_SOURCE")
            .env_remove("GHFLOW_LOG");
        cmd
    }

    /// `ghflow install --source <bundle>` in the project directory.
    pub(crate) fn install_cmd(&self) -> Command {
        let mut cmd = self.cli();
        cmd.arg("install").arg("--source").arg(self.bundle_dir());
        cmd
    }

    /// Run an install from the bundle and assert success.
    pub(crate) fn install(&self) {
        self.install_cmd().assert().success();
    }

    pub(crate) fn claude_path(&self) -> PathBuf {
        self.work_dir.join(".claude")
    }

    pub(crate) fn settings_path(&self) -> PathBuf {
        self.claude_path().join("settings.toml")
    }

    pub(crate) fn read_settings(&self) -> String {
        fs::read_to_string(self.settings_path()).expect("settings.toml should be readable")
    }

    pub(crate) fn update_script_path(&self) -> PathBuf {
        self.work_dir.join("update-ghflow.sh")
    }

    /// Assert that every artifact of a successful install exists.
    pub(crate) fn assert_installed(&self) {
        let commands = self.claude_path().join("commands");
        assert!(commands.is_dir(), ".claude/commands should exist");
        assert!(self.claude_path().join("hooks").is_dir(), ".claude/hooks should exist");
        assert!(self.settings_path().is_file(), ".claude/settings.toml should exist");
        assert!(self.update_script_path().is_file(), "update-ghflow.sh should exist");
        let count = fs::read_dir(&commands)
            .expect("commands dir readable")
            .filter_map(Result::ok)
            .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "md"))
            .count();
        assert!(count > 0, "at least one command should be installed");
    }

    /// Names of the `.md` files in the bundle's `commands/` directory.
    pub(crate) fn bundle_commands(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.bundle_dir.join("commands"))
            .expect("bundle commands readable")
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .filter(|name| name.ends_with(".md"))
            .collect();
        names.sort();
        names
    }
}

fn copy_dir(src: &Path, dest: &Path) {
    fs::create_dir_all(dest).expect("Failed to create bundle dir");
    for entry in fs::read_dir(src).expect("Failed to read bundle source") {
        let entry = entry.expect("Failed to read entry");
        let target = dest.join(entry.file_name());
        if entry.file_type().expect("file type").is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), &target).expect("Failed to copy bundle file");
        }
    }
}
