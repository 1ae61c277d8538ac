// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the engine.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use psr_storage::{DEFAULT_MAX_BYTES, DEFAULT_MAX_LINES, DEFAULT_RETENTION};

use crate::runner::DEFAULT_TIMEOUT;

fn parsed<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key)
        .ok()
        .and_then(|s| s.trim().parse::<T>().ok())
}

/// Default invocation timeout (`PSR_TIMEOUT_MS`, 120s). `0` disables it.
pub fn default_timeout() -> Duration {
    parsed::<u64>("PSR_TIMEOUT_MS")
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_TIMEOUT)
}

/// Preview line cap (`PSR_MAX_LINES`)
pub fn max_lines() -> usize {
    parsed("PSR_MAX_LINES")
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_MAX_LINES)
}

/// Preview byte cap (`PSR_MAX_BYTES`)
pub fn max_bytes() -> usize {
    parsed("PSR_MAX_BYTES")
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_MAX_BYTES)
}

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Overflow retention (`PSR_RETENTION_DAYS`, 7 days)
pub fn retention() -> Duration {
    parsed::<u64>("PSR_RETENTION_DAYS")
        .and_then(|days| days.checked_mul(SECS_PER_DAY))
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_RETENTION)
}

/// Explicit PowerShell executable (`PSR_POWERSHELL`), skipping PATH discovery.
pub fn powershell_override() -> Option<PathBuf> {
    std::env::var_os("PSR_POWERSHELL")
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
