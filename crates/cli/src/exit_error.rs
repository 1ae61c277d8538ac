// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use psr_core::{ExecutionMetadata, TerminationCause};

/// Process exit for a run that timed out.
pub const TIMEOUT_EXIT_CODE: i32 = 124;
/// Process exit for a run cancelled by the caller (Ctrl-C).
pub const ABORT_EXIT_CODE: i32 = 130;

/// Error that carries a specific process exit code.
///
/// An empty message exits silently.
#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Map a finished run onto the CLI's own exit status.
    ///
    /// Returns `None` for a clean exit. Script exit codes pass through when
    /// they fit in a process status; anything else collapses to 1.
    pub fn for_outcome(metadata: &ExecutionMetadata) -> Option<Self> {
        match metadata.ended_by {
            TerminationCause::Timeout => Some(Self::new(
                TIMEOUT_EXIT_CODE,
                format!("psr: timed out after {}ms", metadata.timeout_ms),
            )),
            TerminationCause::Abort => Some(Self::new(ABORT_EXIT_CODE, "psr: cancelled")),
            TerminationCause::Exit => match metadata.exit_code {
                0 => None,
                code @ 1..=255 => Some(Self::new(i32::try_from(code).unwrap_or(1), "")),
                _ => Some(Self::new(1, "")),
            },
        }
    }
}

impl std::fmt::Display for ExitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
