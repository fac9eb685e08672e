#![cfg(unix)]

mod common;

use std::fs;
use std::time::Duration;

use tokio::sync::mpsc;

use hotrun::watch::{LoopEvent, spawn_watcher, walk_dirs};

#[tokio::test(flavor = "multi_thread")]
async fn edits_in_subscribed_directories_reach_the_channel() -> anyhow::Result<()> {
    common::init_tracing();

    let tmp = tempfile::tempdir()?;
    fs::create_dir(tmp.path().join("src"))?;

    let watch_set = walk_dirs(tmp.path())?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _handle = spawn_watcher(&watch_set, tx)?;

    // Give the OS-level subscription a moment to settle.
    tokio::time::sleep(Duration::from_millis(200)).await;
    fs::write(tmp.path().join("src/main.go"), "package main\n")?;

    let seen = tokio::time::timeout(Duration::from_secs(5), async {
        while let Some(event) = rx.recv().await {
            if let LoopEvent::Fs(event) = event {
                if event.paths.iter().any(|p| p.ends_with("main.go")) {
                    return true;
                }
            }
        }
        false
    })
    .await
    .unwrap_or(false);

    assert!(seen, "expected a notification for src/main.go");
    Ok(())
}

#[tokio::test]
async fn subscribing_a_missing_directory_is_fatal() -> anyhow::Result<()> {
    common::init_tracing();

    let tmp = tempfile::tempdir()?;
    let missing = vec![tmp.path().join("gone")];
    let (tx, _rx) = mpsc::unbounded_channel();

    assert!(spawn_watcher(&missing, tx).is_err());
    Ok(())
}
