//! External command execution via `std::process`

use std::process::{Command, Stdio};

use crate::domain::ports::{CommandOutput, CommandRunner, CommandSpec};
use crate::error::{VaultPressError, VaultPressResult};

/// Runs commands as child processes of this one.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(spec: &CommandSpec) -> Command {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);
        cmd
    }

    fn spawn_error(spec: &CommandSpec, err: std::io::Error) -> VaultPressError {
        VaultPressError::CommandSpawn {
            program: spec.program.clone(),
            message: err.to_string(),
        }
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run_captured(&self, spec: &CommandSpec) -> VaultPressResult<CommandOutput> {
        tracing::debug!(command = %spec, "running captured");
        let output = Self::command(spec)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Self::spawn_error(spec, e))?;

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn run_attached(&self, spec: &CommandSpec) -> VaultPressResult<Option<i32>> {
        tracing::debug!(command = %spec, "running attached");
        let status = Self::command(spec)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Self::spawn_error(spec, e))?;
        Ok(status.code())
    }
}
