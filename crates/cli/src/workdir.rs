// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Working-directory resolution for `psr run`.

use std::path::{Component, Path, PathBuf};

/// Resolve `requested` against `base`, lexically.
///
/// No filesystem access: a missing directory is reported by the run itself.
/// `..` above the root stays at the root.
pub fn resolve(base: &Path, requested: Option<&Path>) -> PathBuf {
    let requested = requested.unwrap_or(Path::new("."));
    let joined = if requested.is_absolute() {
        requested.to_path_buf()
    } else {
        base.join(requested)
    };
    normalize(&joined)
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
#[path = "workdir_tests.rs"]
mod tests;
