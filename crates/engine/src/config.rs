// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runner configuration.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use psr_shell::{ExecutableResolver, PathResolver, PowerShellExecutable};
use psr_storage::{overflow_dir, Direction, StorageError, TruncateLimits, DEFAULT_RETENTION};

use crate::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Application data root; overflow files live in `tool-output/` below it.
    pub data_dir: PathBuf,
    pub limits: TruncateLimits,
    pub retention: Duration,
    /// Use this executable instead of searching `PATH`.
    pub powershell: Option<PathBuf>,
}

impl RunnerConfig {
    /// Defaults rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            limits: TruncateLimits::default(),
            retention: DEFAULT_RETENTION,
            powershell: None,
        }
    }

    /// Read every setting from the environment.
    pub fn from_env() -> Result<Self, StorageError> {
        Ok(Self {
            data_dir: psr_storage::data_dir()?,
            limits: TruncateLimits {
                max_lines: env::max_lines(),
                max_bytes: env::max_bytes(),
                direction: Direction::Head,
            },
            retention: env::retention(),
            powershell: env::powershell_override(),
        })
    }

    pub fn overflow_dir(&self) -> PathBuf {
        overflow_dir(&self.data_dir)
    }

    /// The configured executable, or `PATH` discovery when none is set.
    pub fn resolver(&self) -> Arc<dyn ExecutableResolver> {
        match &self.powershell {
            Some(path) => Arc::new(PowerShellExecutable::at(path)),
            None => Arc::new(PathResolver::from_env()),
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.limits.direction = direction;
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
