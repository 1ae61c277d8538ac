// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Merges external cancellation and an internal timeout into one signal.
//!
//! The cause starts as `Exit`. Whichever of abort or timeout is observed
//! first is recorded and the merged token is cancelled; later events are
//! no-ops. A single watcher task owns the timer, so raising the signal
//! also drops the pending sleep.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;

use psr_core::TerminationCause;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

pub struct TerminationSignal {
    token: CancellationToken,
    cause: Arc<AtomicU8>,
    watcher: Option<JoinHandle<()>>,
}

impl TerminationSignal {
    /// Arm the coordinator. A zero `timeout` disables the timer.
    ///
    /// If `external` is already cancelled the cause is `Abort` immediately,
    /// `external` itself is handed out as the signal, and no task is started.
    /// Otherwise a watcher task is spawned, so this must run inside a Tokio
    /// runtime.
    pub fn new(external: &CancellationToken, timeout: Duration) -> Self {
        if external.is_cancelled() {
            tracing::debug!("cancelled before start");
            return Self {
                token: external.clone(),
                cause: Arc::new(AtomicU8::new(TerminationCause::Abort.to_u8())),
                watcher: None,
            };
        }

        let token = CancellationToken::new();
        let cause = Arc::new(AtomicU8::new(TerminationCause::Exit.to_u8()));
        let watcher = tokio::spawn(watch(
            external.clone(),
            token.clone(),
            Arc::clone(&cause),
            timeout,
        ));
        Self {
            token,
            cause,
            watcher: Some(watcher),
        }
    }

    /// The merged signal to hand to the spawner.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Resolves once either cause has fired.
    pub async fn cancelled(&self) {
        self.token.cancelled().await
    }

    pub fn is_raised(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Current cause; `Exit` until abort or timeout fires, stable afterwards.
    pub fn cause(&self) -> TerminationCause {
        TerminationCause::from_u8(self.cause.load(Ordering::Acquire))
    }

    /// True while a watcher task (and therefore possibly a timer) is live.
    pub fn is_watching(&self) -> bool {
        self.watcher.as_ref().is_some_and(|w| !w.is_finished())
    }

    /// Stop watching without raising the signal. Causes observed after
    /// this are ignored.
    pub fn disarm(&mut self) {
        if let Some(watcher) = self.watcher.take() {
            watcher.abort();
        }
    }
}

impl Drop for TerminationSignal {
    fn drop(&mut self) {
        self.disarm();
    }
}

/// Record `event` if nothing has been recorded yet. Returns whether this
/// call won.
fn record(cause: &AtomicU8, event: TerminationCause) -> bool {
    let mut current = cause.load(Ordering::Acquire);
    loop {
        let settled = TerminationCause::from_u8(current).settle(event);
        if settled.to_u8() == current {
            return false;
        }
        match cause.compare_exchange(
            current,
            settled.to_u8(),
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => return true,
            Err(actual) => current = actual,
        }
    }
}

async fn watch(
    external: CancellationToken,
    token: CancellationToken,
    cause: Arc<AtomicU8>,
    timeout: Duration,
) {
    let armed = !timeout.is_zero();
    let event = tokio::select! {
        _ = external.cancelled() => TerminationCause::Abort,
        _ = tokio::time::sleep(timeout), if armed => TerminationCause::Timeout,
        _ = token.cancelled() => return,
    };
    if record(&cause, event) {
        tracing::debug!(
            cause = %event,
            timeout_ms = timeout.as_millis() as u64,
            "termination signal raised"
        );
    }
    token.cancel();
}

#[cfg(test)]
#[path = "signal_tests.rs"]
mod tests;
