// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help and version output.

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("run")
        .stdout_has("footer")
        .stdout_has("which")
        .stdout_has("prune")
        .stdout_has("pattern");
}

#[test]
fn run_help_shows_options() {
    cli()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("--workdir")
        .stdout_has("--timeout")
        .stdout_has("--tail");
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    cli().exits(2);
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}
