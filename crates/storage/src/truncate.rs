// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line- and byte-bounded previews.

use std::fmt;

pub const DEFAULT_MAX_LINES: usize = 2000;
pub const DEFAULT_MAX_BYTES: usize = 50 * 1024;

/// Which end of the text the preview keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Head,
    Tail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruncateLimits {
    pub max_lines: usize,
    pub max_bytes: usize,
    pub direction: Direction,
}

impl Default for TruncateLimits {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            max_bytes: DEFAULT_MAX_BYTES,
            direction: Direction::Head,
        }
    }
}

/// Which cap stopped the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OmittedUnit {
    Lines,
    Bytes,
}

impl fmt::Display for OmittedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OmittedUnit::Lines => "lines",
            OmittedUnit::Bytes => "bytes",
        })
    }
}

/// A bounded slice of over-sized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// Kept lines, rejoined with `\n`.
    pub text: String,
    pub kept_lines: usize,
    /// Amount left out, in `unit`.
    pub omitted: usize,
    pub unit: OmittedUnit,
}

impl TruncateLimits {
    pub fn fits(&self, text: &str) -> bool {
        text.len() <= self.max_bytes && text.split('\n').count() <= self.max_lines
    }

    /// Cut `text` down to the limits. `None` when it already fits.
    ///
    /// Lines are taken from the chosen end while both the line count and the
    /// byte budget (line bytes plus one per joining newline) stay within the
    /// caps. When the byte budget is what stopped the walk, the omission is
    /// reported in bytes, otherwise in lines.
    pub fn preview(&self, text: &str) -> Option<Preview> {
        if self.fits(text) {
            return None;
        }

        let lines: Vec<&str> = text.split('\n').collect();
        let mut kept: Vec<&str> = Vec::new();
        let mut bytes = 0;
        let mut hit_bytes = false;

        let ordered: Box<dyn Iterator<Item = &&str>> = match self.direction {
            Direction::Head => Box::new(lines.iter()),
            Direction::Tail => Box::new(lines.iter().rev()),
        };
        for line in ordered {
            if kept.len() >= self.max_lines {
                break;
            }
            let size = line.len() + usize::from(!kept.is_empty());
            if bytes + size > self.max_bytes {
                hit_bytes = true;
                break;
            }
            kept.push(line);
            bytes += size;
        }
        if self.direction == Direction::Tail {
            kept.reverse();
        }

        let (omitted, unit) = if hit_bytes {
            (text.len() - bytes, OmittedUnit::Bytes)
        } else {
            (lines.len() - kept.len(), OmittedUnit::Lines)
        };
        Some(Preview {
            text: kept.join("\n"),
            kept_lines: kept.len(),
            omitted,
            unit,
        })
    }
}

impl Preview {
    /// Full message shown in place of the output, pointing at `saved_to`.
    pub fn render(&self, direction: Direction, saved_to: &str) -> String {
        let marker = format!("...{} {} truncated...", self.omitted, self.unit);
        let hint = format!(
            "Output was truncated. Full output saved to: {saved_to}\n\
             Search the saved file, or read it in sections, to see the rest."
        );
        match direction {
            Direction::Head => format!("{}\n\n{marker}\n\n{hint}", self.text),
            Direction::Tail => format!("{marker}\n\n{hint}\n\n{}", self.text),
        }
    }
}

#[cfg(test)]
#[path = "truncate_tests.rs"]
mod tests;
