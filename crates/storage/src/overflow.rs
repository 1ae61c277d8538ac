// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisting full output when the preview had to be cut.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, UNIX_EPOCH};

use psr_core::{Clock, SystemClock};
use uuid::Uuid;

use crate::truncate::TruncateLimits;
use crate::StorageError;

/// Overflow files older than this are pruned.
pub const DEFAULT_RETENTION: Duration = Duration::from_secs(7 * 24 * 60 * 60);

const FILE_PREFIX: &str = "tool_";
const RANDOM_SUFFIX_LEN: usize = 12;

/// Outcome of bounding one output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TruncationResult {
    Unchanged(String),
    Truncated {
        /// Preview with marker and hint, in place of the output.
        content: String,
        /// File holding the complete output.
        path: PathBuf,
    },
}

impl TruncationResult {
    pub fn content(&self) -> &str {
        match self {
            TruncationResult::Unchanged(content)
            | TruncationResult::Truncated { content, .. } => content,
        }
    }

    pub fn output_path(&self) -> Option<&Path> {
        match self {
            TruncationResult::Unchanged(_) => None,
            TruncationResult::Truncated { path, .. } => Some(path),
        }
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, TruncationResult::Truncated { .. })
    }
}

/// Directory of overflow files with a retention window.
///
/// File names are unique per write, so concurrent invocations may share a
/// store.
#[derive(Debug, Clone)]
pub struct OverflowStore<C: Clock = SystemClock> {
    dir: PathBuf,
    retention: Duration,
    clock: C,
}

impl OverflowStore<SystemClock> {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_clock(dir, SystemClock)
    }
}

impl<C: Clock> OverflowStore<C> {
    pub fn with_clock(dir: impl Into<PathBuf>, clock: C) -> Self {
        Self {
            dir: dir.into(),
            retention: DEFAULT_RETENTION,
            clock,
        }
    }

    pub fn with_retention(mut self, retention: Duration) -> Self {
        self.retention = retention;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn retention(&self) -> Duration {
        self.retention
    }

    /// Bound `text` to `limits`, persisting the full text when it does not fit.
    pub fn bound(
        &self,
        text: &str,
        limits: &TruncateLimits,
    ) -> Result<TruncationResult, StorageError> {
        let Some(preview) = limits.preview(text) else {
            return Ok(TruncationResult::Unchanged(text.to_string()));
        };
        let path = self.persist(text)?;
        tracing::debug!(
            path = %path.display(),
            omitted = preview.omitted,
            unit = %preview.unit,
            "output truncated"
        );
        let content = preview.render(limits.direction, &path.display().to_string());
        Ok(TruncationResult::Truncated { content, path })
    }

    /// Write `text` verbatim to a new file, then prune expired files.
    pub fn persist(&self, text: &str) -> Result<PathBuf, StorageError> {
        let create_error = |source| StorageError::CreateDir {
            path: self.dir.clone(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(create_error)?;
        let path = self.dir.join(self.file_name());
        if let Err(source) = fs::write(&path, text) {
            return Err(StorageError::Write { path, source });
        }
        self.prune();
        Ok(path)
    }

    /// Remove files last modified before the retention window. Entries that
    /// cannot be inspected or removed are skipped. Returns how many were removed.
    pub fn prune(&self) -> usize {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(
                    dir = %self.dir.display(),
                    error = %e,
                    "overflow directory not readable"
                );
                return 0;
            }
        };
        let retention_ms = u64::try_from(self.retention.as_millis()).unwrap_or(u64::MAX);
        let cutoff_ms = self.clock.epoch_ms().saturating_sub(retention_ms);

        let mut removed = 0;
        for entry in entries.flatten() {
            let path = entry.path();
            let Some(modified_ms) = modified_epoch_ms(&entry) else {
                continue;
            };
            if modified_ms >= cutoff_ms {
                continue;
            }
            match fs::remove_file(&path) {
                Ok(()) => removed += 1,
                Err(e) => tracing::debug!(
                    path = %path.display(),
                    error = %e,
                    "failed to prune overflow file"
                ),
            }
        }
        if removed > 0 {
            tracing::info!(removed, dir = %self.dir.display(), "pruned overflow files");
        }
        removed
    }

    /// `tool_<epoch_ms>_<12 hex>`
    fn file_name(&self) -> String {
        let random = Uuid::new_v4().simple().to_string();
        let epoch_ms = self.clock.epoch_ms();
        format!("{FILE_PREFIX}{epoch_ms}_{}", &random[..RANDOM_SUFFIX_LEN])
    }
}

/// Modification time of a regular file, in ms since the epoch.
fn modified_epoch_ms(entry: &fs::DirEntry) -> Option<u64> {
    let meta = entry.metadata().ok()?;
    if !meta.is_file() {
        return None;
    }
    let since_epoch = meta.modified().ok()?.duration_since(UNIX_EPOCH).ok()?;
    Some(since_epoch.as_millis() as u64)
}

#[cfg(test)]
#[path = "overflow_tests.rs"]
mod tests;
