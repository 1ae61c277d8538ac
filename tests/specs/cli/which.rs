// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `psr which`

use crate::prelude::*;

#[test]
fn reports_configured_executable() {
    cli()
        .args(&["which"])
        .env("PSR_POWERSHELL", "/opt/microsoft/powershell/7/pwsh")
        .passes()
        .stdout_has("pwsh: /opt/microsoft/powershell/7/pwsh");
}

#[test]
fn infers_windows_powershell_from_name() {
    cli()
        .args(&["which"])
        .env("PSR_POWERSHELL", "/mnt/c/Windows/powershell.exe")
        .passes()
        .stdout_has("powershell:");
}

#[test]
fn fails_when_nothing_on_path() {
    let empty = tempfile::tempdir().unwrap();
    cli()
        .args(&["which"])
        .env("PATH", empty.path())
        .exits(1)
        .stderr_has("PowerShell not found. Please install PowerShell (pwsh)");
}

#[cfg(unix)]
#[test]
#[serial(processes)]
fn finds_pwsh_on_path() {
    let sandbox = Sandbox::new();
    let bin = sandbox.pwsh().parent().unwrap().to_path_buf();
    let expected = format!("pwsh: {}", sandbox.pwsh().display());
    cli()
        .args(&["which"])
        .env("PATH", &bin)
        .passes()
        .stdout_has(&expected);
}
