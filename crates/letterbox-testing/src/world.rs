//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated data directory
//! - Seeding letters.json and config.toml
//! - Executing CLI commands with a pinned `--now`

use anyhow::Result;
use assert_cmd::Command;
use letterbox_types::Letter;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::NOW;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use letterbox_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new()
///     .with_letters(&fixtures::sample_mailbox())
///     .with_viewer("bob");
///
/// let result = world.run(&["letter", "list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    viewer: Option<String>,
    now: Option<String>,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment evaluated at [`NOW`].
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".letterbox");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            viewer: None,
            now: Some(NOW.to_string()),
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn letters_path(&self) -> PathBuf {
        self.data_dir.join("letters.json")
    }

    /// Write `letters` as the whole store.
    pub fn with_letters(self, letters: &[Letter]) -> Self {
        let json = serde_json::to_string_pretty(letters).expect("Failed to serialize letters");
        std::fs::write(self.letters_path(), json).expect("Failed to write letters.json");
        self
    }

    /// Write raw TOML to config.toml.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.data_dir.join("config.toml"), toml)
            .expect("Failed to write config.toml");
        self
    }

    /// Pass `--viewer` on every invocation.
    pub fn with_viewer(mut self, viewer: &str) -> Self {
        self.viewer = Some(viewer.to_string());
        self
    }

    /// Evaluate at another instant; `None` uses the real clock.
    pub fn with_now(mut self, now: Option<&str>) -> Self {
        self.now = now.map(str::to_string);
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Letters currently on disk.
    pub fn stored_letters(&self) -> Result<Vec<Letter>> {
        let path = self.letters_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?)
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());

        if let Some(viewer) = &self.viewer {
            cmd.arg("--viewer").arg(viewer);
        }
        if let Some(now) = &self.now {
            cmd.arg("--now").arg(now);
        }

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG").env_remove("LETTERBOX_PATH");
        cmd.env("NO_COLOR", "1");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run with `--format plain`.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_format("plain", args)
    }

    /// Run with `--format json`.
    pub fn run_json(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_format("json", args)
    }

    /// Run `args` without `--data-dir`, `--viewer` or `--now`; env vars still apply.
    #[allow(deprecated)]
    pub fn run_raw(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("letterbox")
            .map_err(|e| anyhow::anyhow!("Failed to find letterbox binary: {}", e))?;

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG").env_remove("LETTERBOX_PATH");
        cmd.env("NO_COLOR", "1");
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        cmd.args(args);

        CliResult::from_output(cmd.output()?)
    }

    #[allow(deprecated)]
    fn run_with_format(&self, format: &str, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("letterbox")
            .map_err(|e| anyhow::anyhow!("Failed to find letterbox binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.arg("--format").arg(format);
        cmd.args(args);

        CliResult::from_output(cmd.output()?)
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    fn from_output(output: std::process::Output) -> Result<Self> {
        Ok(Self {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
