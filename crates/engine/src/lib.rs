// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! psr-engine: runs one PowerShell script and reports how it went
//!
//! [`ScriptRunner::run`] resolves the shell, starts it, collects output
//! while racing the timeout and external cancellation, kills the process
//! tree when the run did not end on its own, bounds the output, and appends
//! the metadata footer. Every outcome short of an overflow-store failure is
//! returned as text.

pub mod config;
pub mod env;
pub mod pattern;
pub mod runner;

pub use config::RunnerConfig;
pub use pattern::always_pattern;
pub use runner::{
    run, ExecutionRequest, RunError, ScriptRunner, DEFAULT_TIMEOUT, DRAIN_TIMEOUT, UNRESOLVED_SHELL,
};
