#![cfg(unix)]

mod common;

use std::time::Duration;

use hotrun::exec::Supervisor;

const GRACE: Duration = Duration::from_secs(5);

#[tokio::test]
async fn restart_replaces_the_current_instance() -> anyhow::Result<()> {
    common::init_tracing();

    let tmp = tempfile::tempdir()?;
    let script = common::write_script(tmp.path(), "app", "sleep 30");
    let mut supervisor = Supervisor::new(&script, GRACE);

    supervisor.start()?;
    let first = supervisor.current_pid().expect("pid of first instance");
    assert!(common::pid_alive(first));

    supervisor.restart().await?;
    let second = supervisor.current_pid().expect("pid of second instance");

    assert_ne!(first, second);
    assert!(supervisor.has_current());
    // The old instance was reaped before the new one became current.
    assert!(!common::pid_alive(first));

    supervisor.shutdown().await;
    assert!(!supervisor.has_current());
    assert!(!common::pid_alive(second));

    Ok(())
}

#[tokio::test]
async fn restart_without_a_current_instance_is_a_plain_start() -> anyhow::Result<()> {
    common::init_tracing();

    let tmp = tempfile::tempdir()?;
    let script = common::write_script(tmp.path(), "app", "sleep 30");
    let mut supervisor = Supervisor::new(&script, GRACE);

    assert!(!supervisor.has_current());
    supervisor.restart().await?;
    assert!(supervisor.has_current());

    supervisor.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn restart_proceeds_when_the_old_instance_already_exited() -> anyhow::Result<()> {
    common::init_tracing();

    let tmp = tempfile::tempdir()?;
    let script = common::write_script(tmp.path(), "app", "exit 0");
    let mut supervisor = Supervisor::new(&script, GRACE);

    supervisor.start()?;
    tokio::time::sleep(Duration::from_millis(300)).await;

    // The kill may fail or hit a dead process; restart must still start a
    // replacement.
    supervisor.restart().await?;
    assert!(supervisor.has_current());

    supervisor.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn start_fails_when_the_binary_is_missing() {
    common::init_tracing();

    let tmp = tempfile::tempdir().expect("tempdir");
    let mut supervisor = Supervisor::new(tmp.path().join("no-such-app"), GRACE);

    assert!(supervisor.start().is_err());
    assert!(!supervisor.has_current());
}
