// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Starting the PowerShell child.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::{Child, ChildStderr, ChildStdout, Command};
use tokio_util::sync::CancellationToken;

use crate::command::build_command;
use crate::resolve::PowerShellExecutable;

/// Suppresses the console window of a child on Windows.
#[cfg(windows)]
pub(crate) const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Everything needed to start one child.
#[derive(Debug, Clone)]
pub struct SpawnRequest {
    pub executable: PowerShellExecutable,
    /// Opaque script text, written to stdin.
    pub script: String,
    /// Used exactly as given.
    pub workdir: PathBuf,
}

impl SpawnRequest {
    /// The argument vector the child is started with. Depends only on the
    /// executable.
    pub fn argv(&self) -> [OsString; 5] {
        build_command(&self.executable.path)
    }

    /// Bytes written to stdin: the script, newline-terminated so the last
    /// statement is submitted.
    pub fn stdin_payload(&self) -> Vec<u8> {
        let mut payload = self.script.clone().into_bytes();
        if !payload.ends_with(b"\n") {
            payload.push(b'\n');
        }
        payload
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SpawnError {
    #[error("failed to start {program}: {source}")]
    Start {
        program: String,
        source: io::Error,
    },

    #[error("{program} exited before its process id could be read")]
    MissingPid { program: String },

    #[error("{stream} of {program} was not captured")]
    MissingPipe {
        program: String,
        stream: &'static str,
    },
}

/// A running child. `pid` is captured at spawn time so termination can
/// target it even after the `Child` has been handed off.
#[derive(Debug)]
pub struct ShellProcess {
    pub pid: u32,
    pub child: Child,
    pub stdout: ChildStdout,
    pub stderr: ChildStderr,
}

/// Start the child described by `request`.
///
/// The child runs in its own process group on Unix so the whole tree can be
/// signalled at once. The script is fed to stdin from a background task that
/// gives up when `cancel` fires; stdin is closed once the script is written.
pub fn spawn_shell(
    request: SpawnRequest,
    cancel: &CancellationToken,
) -> Result<ShellProcess, SpawnError> {
    let program = request.executable.path.display().to_string();
    let [executable, args @ ..] = request.argv();

    let mut cmd = Command::new(executable);
    cmd.args(args)
        .current_dir(&request.workdir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    #[cfg(unix)]
    cmd.process_group(0);
    #[cfg(windows)]
    cmd.creation_flags(CREATE_NO_WINDOW);

    let start_error = |source| SpawnError::Start {
        program: program.clone(),
        source,
    };
    let mut child = cmd.spawn().map_err(start_error)?;
    let Some(pid) = child.id() else {
        return Err(SpawnError::MissingPid { program });
    };
    tracing::debug!(
        pid,
        program = %program,
        workdir = %request.workdir.display(),
        "spawned shell"
    );

    let missing = |stream| SpawnError::MissingPipe {
        program: program.clone(),
        stream,
    };
    let stdin = child.stdin.take().ok_or_else(|| missing("stdin"))?;
    let stdout = child.stdout.take().ok_or_else(|| missing("stdout"))?;
    let stderr = child.stderr.take().ok_or_else(|| missing("stderr"))?;

    let payload = request.stdin_payload();
    let cancel = cancel.clone();
    tokio::spawn(async move {
        let mut stdin = stdin;
        let write = async {
            stdin.write_all(&payload).await?;
            stdin.shutdown().await
        };
        tokio::select! {
            result = write => match result {
                Ok(()) => {}
                // The shell may exit without reading all of its input.
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
                Err(e) => tracing::warn!(pid, error = %e, "failed to write script to stdin"),
            },
            _ = cancel.cancelled() => tracing::debug!(pid, "stdin write cancelled"),
        }
    });

    Ok(ShellProcess {
        pid,
        child,
        stdout,
        stderr,
    })
}

#[cfg(test)]
#[path = "spawn_tests.rs"]
mod tests;
