// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One invocation, start to footer.

use std::path::PathBuf;
use std::process::ExitStatus;
use std::sync::Arc;
use std::time::Duration;

use psr_core::{
    append_footer, Clock, ExecutionMetadata, SystemClock, TerminationCause, SYNTHETIC_EXIT_CODE,
};
use psr_shell::{
    collect_combined, spawn_shell, ExecutableResolver, PlatformTerminator, ShellKind, ShellProcess,
    SpawnRequest, TerminationSignal, TreeTerminator,
};
use psr_storage::{OverflowStore, StorageError, TruncateLimits};
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::RunnerConfig;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(120_000);

/// How long output may keep draining once the tree has been killed.
pub const DRAIN_TIMEOUT: Duration = Duration::from_secs(2);

/// Footer `shell` value when no executable was found.
pub const UNRESOLVED_SHELL: &str = "none";

/// Inputs for one invocation.
#[derive(Debug, Clone)]
pub struct ExecutionRequest {
    /// Opaque script text.
    pub script: String,
    /// Already resolved by the caller; used as given.
    pub workdir: PathBuf,
    /// Zero disables the timeout.
    pub timeout: Duration,
    /// Owned by the caller.
    pub cancel: CancellationToken,
}

impl ExecutionRequest {
    pub fn new(script: impl Into<String>, workdir: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
            workdir: workdir.into(),
            timeout: DEFAULT_TIMEOUT,
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }
}

/// The only failures `run` reports as errors. Everything else is folded
/// into the returned text.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// What happened before truncation and footer assembly.
struct Execution {
    shell: Option<ShellKind>,
    body: String,
    /// Present only for a natural exit whose status was read.
    status: Option<ExitStatus>,
}

impl Execution {
    fn failed(shell: Option<ShellKind>, error: impl std::fmt::Display) -> Self {
        let body = error.to_string();
        tracing::warn!(error = %body, "invocation failed");
        Self {
            shell,
            body,
            status: None,
        }
    }

    /// No output and no status, e.g. when nothing was spawned.
    fn empty(shell: ShellKind) -> Self {
        Self {
            shell: Some(shell),
            body: String::new(),
            status: None,
        }
    }
}

/// Runs scripts through PowerShell.
pub struct ScriptRunner<T: TreeTerminator = PlatformTerminator, C: Clock = SystemClock> {
    resolver: Arc<dyn ExecutableResolver>,
    terminator: T,
    store: OverflowStore<C>,
    limits: TruncateLimits,
}

impl ScriptRunner {
    /// Platform terminator, system clock, and the configured executable (or
    /// `PATH` discovery).
    pub fn from_config(config: &RunnerConfig) -> Self {
        let store = OverflowStore::new(config.overflow_dir()).with_retention(config.retention);
        ScriptRunner::new(config.resolver(), PlatformTerminator::detect(), store)
            .with_limits(config.limits)
    }
}

impl<T: TreeTerminator, C: Clock> ScriptRunner<T, C> {
    pub fn new(
        resolver: Arc<dyn ExecutableResolver>,
        terminator: T,
        store: OverflowStore<C>,
    ) -> Self {
        Self {
            resolver,
            terminator,
            store,
            limits: TruncateLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: TruncateLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn store(&self) -> &OverflowStore<C> {
        &self.store
    }

    /// Run one script and return its output followed by the metadata footer.
    ///
    /// Resolution, spawn, and stream failures become the body with exit code
    /// `-1`. Timeouts and aborts keep whatever output arrived and also report
    /// `-1`. Only a failure to persist over-sized output is an `Err`.
    pub async fn run(&self, request: ExecutionRequest) -> Result<String, RunError> {
        let timeout_ms = request.timeout.as_millis() as u64;
        let span = tracing::info_span!(
            "psr.run",
            workdir = %request.workdir.display(),
            timeout_ms,
            exit_code = tracing::field::Empty,
            cause = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );
        async {
            let clock = self.store.clock();
            let start = clock.now();
            let mut signal = TerminationSignal::new(&request.cancel, request.timeout);

            let execution = self.execute(&request, &signal).await;
            signal.disarm();
            let cause = signal.cause();
            let duration_ms = clock.elapsed_ms(start);

            let exit_code = match (cause, execution.status) {
                (TerminationCause::Exit, Some(status)) => {
                    status.code().map(i64::from).unwrap_or(SYNTHETIC_EXIT_CODE)
                }
                _ => SYNTHETIC_EXIT_CODE,
            };

            let bounded = self.store.bound(&execution.body, &self.limits)?;
            let shell = execution.shell.map_or(UNRESOLVED_SHELL, ShellKind::as_str);
            let meta = ExecutionMetadata {
                exit_code,
                ended_by: cause,
                shell: shell.to_string(),
                resolved_workdir: request.workdir.display().to_string(),
                timeout_ms,
                duration_ms,
                truncated: bounded.is_truncated().then_some(true),
                output_path: bounded.output_path().map(|p| p.display().to_string()),
            };
            let span = tracing::Span::current();
            span.record("exit_code", exit_code);
            span.record("cause", cause.as_str());
            span.record("duration_ms", duration_ms);
            tracing::info!(truncated = bounded.is_truncated(), "invocation finished");
            Ok::<_, RunError>(append_footer(bounded.content(), &meta))
        }
        .instrument(span)
        .await
    }

    async fn execute(&self, request: &ExecutionRequest, signal: &TerminationSignal) -> Execution {
        let executable = match self.resolver.resolve() {
            Ok(executable) => executable,
            Err(e) => return Execution::failed(None, e),
        };
        let shell = executable.kind;
        if signal.is_raised() {
            tracing::debug!("cancelled before spawn");
            return Execution::empty(shell);
        }
        let spawn = SpawnRequest {
            executable,
            script: request.script.clone(),
            workdir: request.workdir.clone(),
        };
        match spawn_shell(spawn, signal.token()) {
            Ok(process) => self.supervise(shell, process, signal).await,
            Err(e) => Execution::failed(Some(shell), e),
        }
    }

    /// Race collection against the termination signal, then clean up.
    async fn supervise(
        &self,
        shell: ShellKind,
        process: ShellProcess,
        signal: &TerminationSignal,
    ) -> Execution {
        let ShellProcess {
            pid,
            mut child,
            stdout,
            stderr,
        } = process;
        let work = async move {
            let output = collect_combined(stdout, stderr)
                .await
                .map_err(|e| e.to_string())?;
            // Only after both streams hit EOF, so trailing output is not lost.
            let status = child
                .wait()
                .await
                .map_err(|e| format!("failed to wait for shell: {e}"))?;
            Ok::<_, String>((output, status))
        };
        tokio::pin!(work);

        let finished = tokio::select! {
            biased;
            result = &mut work => Some(result),
            _ = signal.cancelled() => None,
        };

        // Runs even when the child may already have exited: killing a gone
        // tree is a no-op.
        if signal.cause().is_cancellation() || matches!(finished, Some(Err(_))) {
            tracing::debug!(pid, cause = %signal.cause(), "terminating process tree");
            self.terminator.terminate(pid).await;
        }

        let result = match finished {
            Some(result) => result,
            None => match tokio::time::timeout(DRAIN_TIMEOUT, &mut work).await {
                Ok(result) => result,
                Err(_) => {
                    tracing::warn!(pid, "output still open after termination, abandoning it");
                    return Execution::empty(shell);
                }
            },
        };

        match result {
            Ok((output, status)) => Execution {
                shell: Some(shell),
                body: output,
                status: Some(status),
            },
            Err(message) => Execution::failed(Some(shell), message),
        }
    }
}

/// Run `script` in `workdir` with settings from the environment.
pub async fn run(
    script: &str,
    workdir: impl Into<PathBuf>,
    timeout_ms: u64,
    cancel: CancellationToken,
) -> Result<String, RunError> {
    let config = RunnerConfig::from_env()?;
    let request = ExecutionRequest::new(script, workdir)
        .with_timeout(Duration::from_millis(timeout_ms))
        .with_cancel(cancel);
    ScriptRunner::from_config(&config).run(request).await
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
