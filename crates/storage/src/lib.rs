// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! psr-storage: bounded output and the overflow store
//!
//! Output over the line or byte cap is cut down to a preview. The full text
//! is written verbatim to `<data-root>/tool-output/` and files older than
//! the retention window are pruned after each write.

pub mod env;
mod error;
pub mod overflow;
pub mod truncate;

pub use env::{data_dir, overflow_dir, resolve_data_dir, Platform, APP_DIR, OVERFLOW_DIR};
pub use error::StorageError;
pub use overflow::{OverflowStore, TruncationResult, DEFAULT_RETENTION};
pub use truncate::{
    Direction, OmittedUnit, Preview, TruncateLimits, DEFAULT_MAX_BYTES, DEFAULT_MAX_LINES,
};
