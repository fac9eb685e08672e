// src/exec/supervisor.rs

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::process::{Child, Command};
use tokio::time::timeout;
use tracing::{info, warn};

/// Owns the single current instance of the built binary.
///
/// At most one instance is considered current at any time: `restart`
/// signals the old process and waits (bounded by the grace period) for it
/// to be reaped before the replacement is started. The supervisor lives
/// inside the watch-loop task, which serializes all access to the handle.
#[derive(Debug)]
pub struct Supervisor {
    program: PathBuf,
    grace: Duration,
    current: Option<Child>,
}

impl Supervisor {
    pub fn new(program: impl Into<PathBuf>, grace: Duration) -> Self {
        Self {
            program: program.into(),
            grace,
            current: None,
        }
    }

    /// Supervise `./<app>` relative to the current working directory,
    /// which is where the build command drops its output.
    pub fn for_app(app: &str, grace: Duration) -> Self {
        Self::new(PathBuf::from(format!("./{app}")), grace)
    }

    /// Whether an instance is currently considered live.
    pub fn has_current(&self) -> bool {
        self.current.is_some()
    }

    /// Process id of the current instance, if one is running.
    pub fn current_pid(&self) -> Option<u32> {
        self.current.as_ref().and_then(|c| c.id())
    }

    /// Launch the built binary with the operator's stdout/stderr, record
    /// it as the current instance, and return without waiting — the child
    /// runs concurrently with the watch loop.
    pub fn start(&mut self) -> Result<()> {
        info!(app = %self.program.display(), "start running app");

        let child = Command::new(&self.program)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .with_context(|| format!("starting {}", self.program.display()))?;

        self.current = Some(child);
        Ok(())
    }

    /// Terminate the current instance (if any), then start a replacement.
    /// With no current instance this is a plain [`Supervisor::start`].
    ///
    /// The kill is best-effort: a failure (typically a process that
    /// already exited on its own) is logged and never blocks the new
    /// start.
    pub async fn restart(&mut self) -> Result<()> {
        if let Some(child) = self.current.take() {
            self.terminate(child).await;
        }
        self.start()
    }

    /// Stop the current instance without starting a replacement.
    pub async fn shutdown(&mut self) {
        if let Some(child) = self.current.take() {
            self.terminate(child).await;
        }
    }

    /// Signal the old instance, then wait up to the grace period for it to
    /// be reaped, so old and new instances do not normally coexist. On
    /// timeout the overlap is logged and the restart proceeds anyway.
    async fn terminate(&self, mut child: Child) {
        info!(app = %self.program.display(), pid = ?child.id(), "kill old running app");

        if let Err(err) = child.start_kill() {
            warn!(error = %err, "could not signal old instance; it likely exited already");
        }

        match timeout(self.grace, child.wait()).await {
            Ok(Ok(status)) => info!(?status, "old instance exited"),
            Ok(Err(err)) => warn!(error = %err, "could not reap old instance"),
            Err(_) => warn!(
                grace_ms = self.grace.as_millis() as u64,
                "old instance still running after grace period; continuing"
            ),
        }
    }
}
