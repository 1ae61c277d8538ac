// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! "Always allow" pattern for a script.

/// Tokens that only invoke what follows them.
const CALL_OPERATORS: [&str; 2] = ["&", "."];

/// `"<command> *"` for the first real command word of `script`.
///
/// Leading call operators (`&`, `.`) are skipped as whole tokens only, so
/// `./build.ps1` is kept as the command. Returns `"* *"` when the script has
/// no command word.
pub fn always_pattern(script: &str) -> String {
    script
        .split_whitespace()
        .find(|token| !CALL_OPERATORS.contains(token))
        .map(|command| format!("{command} *"))
        .unwrap_or_else(|| "* *".to_string())
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
