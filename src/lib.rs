// src/lib.rs

pub mod cli;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod watch;

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::cli::CliArgs;
use crate::errors::StartupError;
use crate::exec::{BuildRunner, Supervisor};
use crate::watch::{ChangeFilter, LoopEvent, SourceFilter, WatchLoop, spawn_watcher, walk_dirs};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - app-name resolution
/// - directory enumeration (the watch set)
/// - the initial build + start
/// - the filesystem watcher
/// - Ctrl-C handling
/// - the watch loop
pub async fn run(args: CliArgs) -> Result<()> {
    let root = project_root()?;
    let app_name = resolve_app_name(args.app_name.clone(), &root)?;

    let watch_set = walk_dirs(&root)?;
    info!(dirs = watch_set.len(), app = %app_name, "watch set enumerated");

    let filter = ChangeFilter::new(
        SourceFilter::from_extensions(&args.extensions)?,
        Duration::from_millis(args.debounce_ms),
    );
    let builder = BuildRunner::new(&args.build_cmd);
    let mut supervisor = Supervisor::for_app(&app_name, Duration::from_millis(args.grace_ms));

    // Build once up front so there is something to run before the first edit.
    let result = builder.build().await?;
    if result.success {
        supervisor.start()?;
    } else {
        warn!(app = %app_name, "initial build failed; waiting for changes before starting");
    }

    // Single channel carrying filesystem events, watcher transport errors,
    // and the shutdown request into the loop.
    let (tx, rx) = mpsc::unbounded_channel::<LoopEvent>();

    let _watcher_handle = spawn_watcher(&watch_set, tx.clone())?;

    // Ctrl-C → graceful shutdown.
    {
        let tx = tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(LoopEvent::Shutdown);
        });
    }

    info!("begin to watch app: {app_name}");

    WatchLoop::new(filter, builder, supervisor, rx).run().await
}

/// The project root is the current working directory; both the build
/// command and the built binary are invoked relative to it.
fn project_root() -> Result<PathBuf, StartupError> {
    env::current_dir().map_err(StartupError::ProjectRoot)
}

/// The positional argument wins; otherwise the binary is assumed to be
/// named after the project directory, as `go build` names its output.
fn resolve_app_name(arg: Option<String>, root: &Path) -> Result<String, StartupError> {
    match arg {
        Some(name) => Ok(name),
        None => root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| StartupError::AppName(root.to_path_buf())),
    }
}
