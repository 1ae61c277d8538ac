// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed PowerShell argument vector.
//!
//! The script is always delivered on stdin. Nothing derived from it is ever
//! placed on the command line, and `-EncodedCommand` is never used.

use std::ffi::OsString;
use std::path::Path;

/// Flags following the executable, in order. `-Command -` reads the
/// command text from standard input.
pub const COMMAND_FLAGS: [&str; 4] = ["-NoProfile", "-NonInteractive", "-Command", "-"];

/// `[executable, -NoProfile, -NonInteractive, -Command, -]`
pub fn build_command(executable: &Path) -> [OsString; 5] {
    let [no_profile, non_interactive, command, stdin_marker] = COMMAND_FLAGS.map(OsString::from);
    [
        executable.as_os_str().to_owned(),
        no_profile,
        non_interactive,
        command,
        stdin_marker,
    ]
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
