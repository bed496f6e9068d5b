//! TestWorld pattern for CLI integration tests.
//!
//! Every world owns a temp directory that is both the working directory
//! of the binary and its config home, so a user's own `config.toml`
//! never leaks into a test run.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Isolated environment for running `xjs`.
///
/// # Example
/// ```no_run
/// use xjs_testing::TestWorld;
///
/// let world = TestWorld::new().with_sample("status_2x.yaml");
/// let result = world.run(&["-a", "status_2x.yaml"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_home: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_home = temp_dir.path().join(".config");
        std::fs::create_dir_all(&config_home).expect("Failed to create config dir");

        Self {
            temp_dir,
            config_home,
            env_vars: HashMap::new(),
        }
    }

    /// Working directory of every run
    pub fn cwd(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Copy a sample report into the working directory under its own name
    pub fn with_sample(self, name: &str) -> Self {
        fixtures::copy_sample(name, self.cwd(), name).expect("Failed to copy sample");
        self
    }

    /// Copy a sample report into the working directory under another name
    pub fn with_sample_as(self, name: &str, dest_name: &str) -> Self {
        fixtures::copy_sample(name, self.cwd(), dest_name).expect("Failed to copy sample");
        self
    }

    /// Write an arbitrary file (a broken report, a config) into the working directory
    pub fn with_file(self, name: &str, content: &str) -> Self {
        std::fs::write(self.cwd().join(name), content).expect("Failed to write file");
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a command to run inside this world
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(self.cwd())
            .env("XDG_CONFIG_HOME", &self.config_home)
            .env_remove("XJS_CONFIG")
            .env_remove("XJS_LOG")
            .env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the `xjs` binary with `args`.
    ///
    /// Uses `Command::cargo_bin()`, which needs the binary built by
    /// `cargo test`.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("xjs")
            .map_err(|e| anyhow::anyhow!("Failed to find xjs binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
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
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.status.code()
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
