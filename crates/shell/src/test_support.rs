// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test doubles for code that drives a PowerShell child.

#[cfg(unix)]
use std::path::Path;

#[cfg(unix)]
use crate::resolve::PowerShellExecutable;

/// Write an executable named `pwsh` into `dir` that ignores its flags and
/// runs stdin with `/bin/sh`.
///
/// Lets process-level tests run on hosts without PowerShell. The returned
/// executable has kind `pwsh`.
#[cfg(unix)]
pub fn stand_in_pwsh(dir: &Path) -> std::io::Result<PowerShellExecutable> {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("pwsh");
    std::fs::write(&path, "#!/bin/sh\nexec /bin/sh -s\n")?;
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))?;
    Ok(PowerShellExecutable::at(path))
}
