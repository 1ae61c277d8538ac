// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::builder::styling::{Ansi256Color, Color, Style, Styles};
use std::io::IsTerminal;

/// Section headers and labels: steel blue
const LABEL: u8 = 74;
/// Literals in help output: light grey
const LITERAL: u8 = 250;
/// Placeholders and secondary text: medium grey
const MUTED: u8 = 245;

const RESET: &str = "\x1b[0m";

/// Decide whether to emit ANSI codes.
///
/// `NO_COLOR=1` disables, `COLOR=1` forces, otherwise follow `is_tty`.
fn colorize_with(env: impl Fn(&str) -> Option<String>, is_tty: bool) -> bool {
    if env("NO_COLOR").is_some_and(|v| v == "1") {
        return false;
    }
    if env("COLOR").is_some_and(|v| v == "1") {
        return true;
    }
    is_tty
}

fn stdout_is_colorable() -> bool {
    colorize_with(
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal(),
    )
}

pub fn stderr_is_colorable() -> bool {
    colorize_with(
        |key| std::env::var(key).ok(),
        std::io::stderr().is_terminal(),
    )
}

/// Clap help styles in the project palette.
pub fn styles() -> Styles {
    if !stdout_is_colorable() {
        return Styles::plain();
    }
    let fg = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    Styles::styled()
        .header(fg(LABEL))
        .literal(fg(LITERAL))
        .placeholder(fg(MUTED))
}

fn paint(code: u8, text: &str, enabled: bool) -> String {
    if enabled {
        format!("\x1b[38;5;{code}m{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// A field label on stdout.
pub fn label(text: &str) -> String {
    paint(LABEL, text, stdout_is_colorable())
}

/// Secondary detail on stdout.
pub fn muted(text: &str) -> String {
    paint(MUTED, text, stdout_is_colorable())
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
