// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `psr pattern`

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn first_command_becomes_the_pattern() {
    let run = cli()
        .args(&["pattern", "Get-ChildItem -Path C:\\ -Recurse"])
        .passes();
    assert_eq!(run.stdout().as_str(), "Get-ChildItem *\n");
}

#[test]
fn call_operator_is_skipped() {
    let run = cli().args(&["pattern", "& ./build.ps1 -Release"]).passes();
    assert_eq!(run.stdout().as_str(), "./build.ps1 *\n");
}

#[test]
fn reads_script_from_stdin() {
    let run = cli()
        .args(&["pattern"])
        .stdin("\n  Set-Location C:\\\nGet-Item .\n")
        .passes();
    assert_eq!(run.stdout().as_str(), "Set-Location *\n");
}

#[test]
fn empty_script_allows_everything() {
    let run = cli().args(&["pattern", "   "]).passes();
    assert_eq!(run.stdout().as_str(), "* *\n");
}
