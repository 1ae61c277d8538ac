// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! PowerShell executable discovery.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

/// Which PowerShell flavour an executable is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    /// Cross-platform PowerShell 7+.
    Pwsh,
    /// Windows PowerShell 5.x.
    PowerShell,
}

impl ShellKind {
    /// Discovery order.
    pub const SEARCH_ORDER: [ShellKind; 2] = [ShellKind::Pwsh, ShellKind::PowerShell];

    pub fn as_str(self) -> &'static str {
        match self {
            ShellKind::Pwsh => "pwsh",
            ShellKind::PowerShell => "powershell",
        }
    }

    /// Name looked up on `PATH`.
    pub fn executable_name(self) -> &'static str {
        match self {
            ShellKind::Pwsh => "pwsh",
            ShellKind::PowerShell => "powershell.exe",
        }
    }

    /// Infer the kind from an explicit executable path.
    ///
    /// `powershell` / `powershell.exe` is Windows PowerShell; anything else
    /// is treated as `pwsh`.
    pub fn from_path(path: &Path) -> ShellKind {
        let stem = path.file_stem().and_then(OsStr::to_str).unwrap_or_default();
        if stem.eq_ignore_ascii_case("powershell") {
            ShellKind::PowerShell
        } else {
            ShellKind::Pwsh
        }
    }
}

impl fmt::Display for ShellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A located PowerShell binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerShellExecutable {
    pub kind: ShellKind,
    pub path: PathBuf,
}

impl PowerShellExecutable {
    /// Wrap an explicit path, inferring its kind from the file name.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            kind: ShellKind::from_path(&path),
            path,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error(
        "PowerShell not found. Please install PowerShell (pwsh) or Windows PowerShell (powershell.exe)."
    )]
    NotFound,
}

/// Source of the PowerShell executable for an invocation.
pub trait ExecutableResolver: Send + Sync {
    fn resolve(&self) -> Result<PowerShellExecutable, ResolveError>;
}

/// A fixed executable resolves to itself.
impl ExecutableResolver for PowerShellExecutable {
    fn resolve(&self) -> Result<PowerShellExecutable, ResolveError> {
        Ok(self.clone())
    }
}

/// Searches `PATH` for `pwsh`, then `powershell.exe`.
///
/// Matching follows the `which` crate: `PATHEXT` extensions on Windows, an
/// execute bit on Unix.
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    path: Option<OsString>,
    cwd: PathBuf,
}

impl PathResolver {
    pub fn new(path: Option<OsString>) -> Self {
        Self {
            path,
            cwd: PathBuf::from("."),
        }
    }

    /// Snapshot `PATH` and the current directory from the process.
    pub fn from_env() -> Self {
        Self {
            path: std::env::var_os("PATH"),
            cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Locate `name` in the search path.
    pub fn find(&self, name: &str) -> Option<PathBuf> {
        let path = self.path.as_deref()?;
        which::which_in(name, Some(path), &self.cwd).ok()
    }
}

impl ExecutableResolver for PathResolver {
    fn resolve(&self) -> Result<PowerShellExecutable, ResolveError> {
        for kind in ShellKind::SEARCH_ORDER {
            if let Some(path) = self.find(kind.executable_name()) {
                tracing::debug!(shell = %kind, path = %path.display(), "resolved PowerShell");
                return Ok(PowerShellExecutable { kind, path });
            }
        }
        Err(ResolveError::NotFound)
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
