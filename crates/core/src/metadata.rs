// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The record describing one finished invocation.

use serde::{Deserialize, Serialize};

use crate::TerminationCause;

/// Exit code reported when the child's own code is unavailable or
/// irrelevant: timeouts, aborts, and engine failures.
pub const SYNTHETIC_EXIT_CODE: i64 = -1;

/// Metadata for one invocation, serialized once into the result footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionMetadata {
    pub exit_code: i64,
    pub ended_by: TerminationCause,
    /// Shell kind (`pwsh`, `powershell`), or `none` when resolution failed.
    pub shell: String,
    pub resolved_workdir: String,
    pub timeout_ms: u64,
    pub duration_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncated: Option<bool>,
    /// Overflow file holding the full output, when truncated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
}

impl ExecutionMetadata {
    pub fn is_truncated(&self) -> bool {
        self.truncated.unwrap_or(false)
    }
}
