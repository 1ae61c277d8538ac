// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Over-long output is cut to a preview and saved in full.

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
#[serial(processes)]
fn long_output_is_truncated_and_saved() {
    let sandbox = Sandbox::new();
    let run = sandbox
        .psr()
        .args(&["run", "seq 1 20"])
        .env("PSR_MAX_LINES", "5")
        .passes()
        .stdout_has("1\n2\n3\n4\n5\n\n...")
        .stdout_has("lines truncated...")
        .stdout_has("Output was truncated. Full output saved to: ")
        .stdout_lacks("\n20\n");

    let footer = run.footer();
    assert_eq!(footer.truncated, Some(true));
    let saved = footer.output_path.expect("output path");
    let store = sandbox.data().join("tool-output");
    assert!(saved.starts_with(&store.display().to_string()));

    let full = std::fs::read_to_string(&saved).unwrap();
    let expected: String = (1..=20).map(|n| format!("{n}\n")).collect();
    assert_eq!(full, expected);
}

#[test]
#[serial(processes)]
fn tail_keeps_the_end() {
    let sandbox = Sandbox::new();
    sandbox
        .psr()
        .args(&["run", "--tail", "seq 1 20"])
        .env("PSR_MAX_LINES", "3")
        .passes()
        .stdout_has("lines truncated...")
        .stdout_has("\n\n19\n20\n<powershell_metadata>")
        .stdout_lacks("\n1\n");
}

#[test]
#[serial(processes)]
fn byte_cap_reports_bytes() {
    let sandbox = Sandbox::new();
    sandbox
        .psr()
        .args(&["run", "printf 'abcdefghij%.0s' $(seq 1 100)"])
        .env("PSR_MAX_BYTES", "64")
        .passes()
        .stdout_has("bytes truncated...");
}

#[test]
#[serial(processes)]
fn short_output_is_untouched() {
    let sandbox = Sandbox::new();
    let run = sandbox
        .psr()
        .args(&["run", "seq 1 3"])
        .passes()
        .stdout_lacks("truncated...");
    assert_eq!(run.footer().truncated, None);
    assert!(!sandbox.data().join("tool-output").exists());
}
