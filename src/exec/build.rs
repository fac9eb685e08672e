// src/exec/build.rs

use std::process::Stdio;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tokio::process::Command;
use tracing::{info, warn};

/// Outcome of one build invocation.
#[derive(Debug, Clone, Copy)]
pub struct BuildResult {
    pub success: bool,
    pub elapsed: Duration,
}

impl BuildResult {
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

/// Invokes the external build command.
///
/// The command's own stdout/stderr go straight through to the operator;
/// the runner only observes the exit status and the wall-clock duration.
#[derive(Debug, Clone)]
pub struct BuildRunner {
    cmd: String,
}

impl BuildRunner {
    pub fn new(cmd: impl Into<String>) -> Self {
        Self { cmd: cmd.into() }
    }

    /// Run the build to completion, blocking the calling flow.
    ///
    /// `Err` means the command could not be invoked at all; a non-zero
    /// exit is a normal `BuildResult` with `success == false`.
    pub async fn build(&self) -> Result<BuildResult> {
        info!(cmd = %self.cmd, "building");
        let begin = Instant::now();

        let status = shell_command(&self.cmd)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .with_context(|| format!("running build command '{}'", self.cmd))?;

        let result = BuildResult {
            success: status.success(),
            elapsed: begin.elapsed(),
        };

        if result.success {
            info!(elapsed_ms = result.elapsed_ms(), "build passed");
        } else {
            warn!(
                elapsed_ms = result.elapsed_ms(),
                exit_code = status.code().unwrap_or(-1),
                "build failed"
            );
        }

        Ok(result)
    }
}

/// Build a shell command appropriate for the platform.
fn shell_command(cmd: &str) -> Command {
    if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(cmd);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(cmd);
        c
    }
}
