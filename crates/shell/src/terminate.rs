// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-tree termination.
//!
//! Termination is best effort and idempotent: by the time it runs the tree
//! may already be gone, and "not found" is success. Nothing here returns an
//! error.

use async_trait::async_trait;
use std::process::Output;
use tokio::process::Command;

/// Kills a process and every descendant it spawned.
#[async_trait]
pub trait TreeTerminator: Clone + Send + Sync + 'static {
    async fn terminate(&self, pid: u32);
}

/// Platform variant, picked once with [`PlatformTerminator::detect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlatformTerminator {
    /// `SIGKILL` to the child's process group.
    #[cfg(unix)]
    ProcessGroup,
    /// `taskkill /T /F`, falling back to a plain `/F` on the root.
    Taskkill,
}

impl PlatformTerminator {
    #[cfg(unix)]
    pub fn detect() -> Self {
        PlatformTerminator::ProcessGroup
    }

    #[cfg(not(unix))]
    pub fn detect() -> Self {
        PlatformTerminator::Taskkill
    }
}

impl Default for PlatformTerminator {
    fn default() -> Self {
        Self::detect()
    }
}

#[async_trait]
impl TreeTerminator for PlatformTerminator {
    async fn terminate(&self, pid: u32) {
        match self {
            #[cfg(unix)]
            PlatformTerminator::ProcessGroup => kill_process_group(pid),
            PlatformTerminator::Taskkill => taskkill_tree(pid).await,
        }
    }
}

/// The child was started as a process-group leader, so its pid is also the
/// group id.
#[cfg(unix)]
fn kill_process_group(pid: u32) {
    use nix::errno::Errno;
    use nix::sys::signal::{killpg, Signal};
    use nix::unistd::Pid;

    let Ok(raw) = i32::try_from(pid) else {
        tracing::warn!(pid, "pid out of range for process group kill");
        return;
    };
    match killpg(Pid::from_raw(raw), Signal::SIGKILL) {
        Ok(()) => tracing::debug!(pid, "killed process group"),
        Err(Errno::ESRCH) => tracing::debug!(pid, "process group already gone"),
        Err(e) => tracing::debug!(pid, error = %e, "process group kill failed"),
    }
}

async fn taskkill_tree(pid: u32) {
    let pid_arg = pid.to_string();
    match run_taskkill(&["/PID", &pid_arg, "/T", "/F"]).await {
        Ok(out) if out.status.success() => {
            tracing::debug!(pid, "taskkill removed process tree");
            return;
        }
        Ok(out) if reports_already_gone(&out) => {
            tracing::debug!(pid, "process tree already gone");
            return;
        }
        Ok(out) => tracing::debug!(
            pid,
            code = ?out.status.code(),
            "taskkill /T failed, killing root only"
        ),
        Err(e) => tracing::debug!(
            pid,
            error = %e,
            "taskkill /T could not run, killing root only"
        ),
    }

    match run_taskkill(&["/PID", &pid_arg, "/F"]).await {
        Ok(out) if out.status.success() => tracing::debug!(pid, "taskkill removed root process"),
        Ok(out) => tracing::debug!(pid, code = ?out.status.code(), "taskkill fallback failed"),
        Err(e) => tracing::debug!(pid, error = %e, "taskkill fallback could not run"),
    }
}

async fn run_taskkill(args: &[&str]) -> std::io::Result<Output> {
    let mut cmd = Command::new("taskkill");
    cmd.args(args).kill_on_drop(true);
    #[cfg(windows)]
    cmd.creation_flags(crate::spawn::CREATE_NO_WINDOW);
    cmd.output().await
}

/// taskkill's exit code when the target does not exist.
const TASKKILL_NOT_FOUND: i32 = 128;

/// Phrases taskkill uses when the target has already exited.
const ALREADY_GONE: [&str; 4] = [
    "not found",
    "no running instance",
    "does not exist",
    "no tasks are running",
];

fn reports_already_gone(out: &Output) -> bool {
    if out.status.code() == Some(TASKKILL_NOT_FOUND) {
        return true;
    }
    let stdout = String::from_utf8_lossy(&out.stdout);
    let stderr = String::from_utf8_lossy(&out.stderr);
    is_already_gone_message(&stdout) || is_already_gone_message(&stderr)
}

pub(crate) fn is_already_gone_message(message: &str) -> bool {
    let message = message.to_ascii_lowercase();
    ALREADY_GONE.iter().any(|phrase| message.contains(phrase))
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::TreeTerminator;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Records every pid it is asked to terminate.
    #[derive(Clone, Default)]
    pub struct FakeTerminator {
        calls: Arc<Mutex<Vec<u32>>>,
    }

    impl FakeTerminator {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn calls(&self) -> Vec<u32> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl TreeTerminator for FakeTerminator {
        async fn terminate(&self, pid: u32) {
            self.calls.lock().push(pid);
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeTerminator;

#[cfg(test)]
#[path = "terminate_tests.rs"]
mod tests;
