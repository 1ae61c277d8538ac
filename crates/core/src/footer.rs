// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tagged metadata trailer appended to every result.
//!
//! The footer is `<powershell_metadata>{json}</powershell_metadata>` on a
//! single line. Script output may contain look-alike tags, so parsing always
//! takes the last closing tag and the nearest opening tag before it.

use crate::ExecutionMetadata;

pub const FOOTER_OPEN: &str = "<powershell_metadata>";
pub const FOOTER_CLOSE: &str = "</powershell_metadata>";

/// Render the footer block for `meta`.
///
/// `<` is escaped inside the JSON so a workdir or path containing the
/// closing tag cannot end the block early.
pub fn format_footer(meta: &ExecutionMetadata) -> String {
    let json = match serde_json::to_string(meta) {
        Ok(json) => json.replace('<', "\\u003c"),
        // Plain struct with string keys: serialization cannot fail.
        Err(_) => String::from("{}"),
    };
    format!("{FOOTER_OPEN}{json}{FOOTER_CLOSE}")
}

/// Append the footer to `body`, separated by a single newline.
pub fn append_footer(body: &str, meta: &ExecutionMetadata) -> String {
    let footer = format_footer(meta);
    if body.is_empty() {
        return footer;
    }
    let sep = if body.ends_with('\n') { "" } else { "\n" };
    format!("{body}{sep}{footer}")
}

/// Parse the last footer block in `text`.
///
/// The block runs from the last closing tag back to the nearest opening tag,
/// so a stray unclosed tag earlier in the output cannot swallow it. Returns
/// `None` when there is no block, or when the last block does not carry
/// every required field with the right type.
pub fn parse_footer(text: &str) -> Option<ExecutionMetadata> {
    let close = text.rfind(FOOTER_CLOSE)?;
    let open = text[..close].rfind(FOOTER_OPEN)?;
    let json = text[open + FOOTER_OPEN.len()..close].trim();
    serde_json::from_str(json).ok()
}

#[cfg(test)]
#[path = "footer_tests.rs"]
mod tests;
