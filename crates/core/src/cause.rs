// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Why an invocation ended.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The reason an invocation ended.
///
/// `Exit` is the initial state. The first of `Timeout` or `Abort` to be
/// observed replaces it and is never overwritten afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminationCause {
    /// The process ended on its own.
    #[default]
    Exit,
    /// The internal deadline elapsed first.
    Timeout,
    /// External cancellation fired first.
    Abort,
}

impl TerminationCause {
    /// First-cause-wins transition.
    ///
    /// Returns the cause after `event` is observed in state `self`.
    pub fn settle(self, event: TerminationCause) -> TerminationCause {
        match self {
            TerminationCause::Exit => event,
            settled => settled,
        }
    }

    /// True once a cancellation cause has been recorded.
    pub fn is_cancellation(self) -> bool {
        !matches!(self, TerminationCause::Exit)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TerminationCause::Exit => "exit",
            TerminationCause::Timeout => "timeout",
            TerminationCause::Abort => "abort",
        }
    }

    /// Compact encoding for atomic storage.
    pub fn to_u8(self) -> u8 {
        match self {
            TerminationCause::Exit => 0,
            TerminationCause::Timeout => 1,
            TerminationCause::Abort => 2,
        }
    }

    /// Inverse of [`TerminationCause::to_u8`]; unknown values read as `Exit`.
    pub fn from_u8(raw: u8) -> TerminationCause {
        match raw {
            1 => TerminationCause::Timeout,
            2 => TerminationCause::Abort,
            _ => TerminationCause::Exit,
        }
    }
}

impl fmt::Display for TerminationCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "cause_tests.rs"]
mod tests;
