//! Common test utilities for vaultpress CLI tests.
//!
//! `TestEnv` gives each test its own home directory (vault discovery and user
//! config) and site directory (working directory, `vaultpress.toml`, `content/`).

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Isolated home + site directories
pub struct TestEnv {
    _root: TempDir,
    home: PathBuf,
    site: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        let home = root.path().join("home");
        let site = root.path().join("site");
        fs::create_dir_all(&home).unwrap();
        fs::create_dir_all(&site).unwrap();
        Self {
            _root: root,
            home,
            site,
        }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn site(&self) -> &Path {
        &self.site
    }

    /// Create a vault at `<home>/<relative>` with an empty publish folder.
    pub fn vault(&self, relative: &str) -> PathBuf {
        let vault = self.home.join(relative);
        fs::create_dir_all(vault.join(".obsidian")).unwrap();
        fs::create_dir_all(vault.join("publish")).unwrap();
        vault
    }

    /// Add a note to the vault's publish folder.
    pub fn note(&self, vault: &Path, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = vault.join("publish").join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn write_config(&self, toml: &str) {
        fs::write(self.site.join("vaultpress.toml"), toml).unwrap();
    }

    pub fn content(&self, name: &str) -> String {
        fs::read_to_string(self.site.join("content").join(name)).unwrap()
    }

    /// `vaultpress` running inside the site directory with the isolated home.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_vaultpress"));
        cmd.current_dir(&self.site)
            .env("VAULTPRESS_TEST_HOME", &self.home)
            .env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("VAULTPRESS_VAULT")
            .env_remove("VAULTPRESS_CONTENT")
            .env_remove("VAULTPRESS_INTERVAL")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> TestOutput {
        TestOutput::from(self.command().args(args).output().unwrap())
    }
}

/// Decoded process output
#[derive(Debug)]
pub struct TestOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl TestOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<Output> for TestOutput {
    fn from(output: Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
