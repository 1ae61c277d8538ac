// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Application data root resolution.
//!
//! Priority: `PSR_DATA_DIR` > `XDG_DATA_HOME/psrun` > platform default.
//! Empty variables count as unset.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::StorageError;

/// Subdirectory name under data homes.
pub const APP_DIR: &str = "psrun";
/// Subdirectory of the data root holding overflow files.
pub const OVERFLOW_DIR: &str = "tool-output";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Other
        }
    }
}

/// Resolve the data root from the process environment.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    resolve_data_dir(
        |key| std::env::var_os(key),
        Platform::current(),
        dirs::home_dir(),
    )
}

/// Resolve the data root from explicit inputs.
pub fn resolve_data_dir(
    env: impl Fn(&str) -> Option<OsString>,
    platform: Platform,
    home: Option<PathBuf>,
) -> Result<PathBuf, StorageError> {
    let var = |key: &str| env(key).filter(|v| !v.is_empty());

    if let Some(dir) = var("PSR_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }
    if let Some(xdg) = var("XDG_DATA_HOME") {
        return Ok(PathBuf::from(xdg).join(APP_DIR));
    }
    if platform == Platform::Windows {
        if let Some(local) = var("LOCALAPPDATA") {
            return Ok(PathBuf::from(local).join(APP_DIR));
        }
    }

    let home = home.ok_or(StorageError::NoDataDir)?;
    Ok(match platform {
        Platform::MacOs => home
            .join("Library")
            .join("Application Support")
            .join(APP_DIR),
        Platform::Windows => home.join("AppData").join("Local").join(APP_DIR),
        Platform::Other => home.join(".local").join("share").join(APP_DIR),
    })
}

/// `<data_root>/tool-output`
pub fn overflow_dir(data_root: &Path) -> PathBuf {
    data_root.join(OVERFLOW_DIR)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
