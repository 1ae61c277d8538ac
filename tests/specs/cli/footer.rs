// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `psr footer`

use crate::prelude::*;
use crate::prelude::assert_eq;

const RESULT: &str = "line one\nline two\n<powershell_metadata>{\"exitCode\":3,\"endedBy\":\"exit\",\"shell\":\"pwsh\",\"resolvedWorkdir\":\"/work\",\"timeoutMs\":120000,\"durationMs\":40}</powershell_metadata>";

#[test]
fn prints_footer_from_stdin_as_json() {
    let run = cli().args(&["footer"]).stdin(RESULT).passes();
    let value: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    assert_eq!(value["exitCode"].as_i64(), Some(3));
    assert_eq!(value["endedBy"].as_str(), Some("exit"));
    assert_eq!(value["resolvedWorkdir"].as_str(), Some("/work"));
    assert!(value.get("truncated").is_none());
}

#[test]
fn reads_footer_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.txt");
    std::fs::write(&path, RESULT).unwrap();

    cli()
        .args(&["footer", path.to_str().unwrap()])
        .passes()
        .stdout_has("\"durationMs\": 40");
}

#[test]
fn last_footer_wins() {
    let decoy = "<powershell_metadata>{\"exitCode\":9,\"endedBy\":\"exit\",\"shell\":\"pwsh\",\"resolvedWorkdir\":\"/x\",\"timeoutMs\":1,\"durationMs\":1}</powershell_metadata>\n";
    let run = cli()
        .args(&["footer"])
        .stdin(format!("{decoy}{RESULT}"))
        .passes();
    let value: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    assert_eq!(value["exitCode"].as_i64(), Some(3));
}

#[test]
fn missing_footer_fails() {
    cli()
        .args(&["footer"])
        .stdin("plain output\n")
        .exits(1)
        .stderr_has("no metadata footer found");
}

#[test]
fn malformed_footer_fails() {
    cli()
        .args(&["footer"])
        .stdin("<powershell_metadata>{not json}</powershell_metadata>")
        .exits(1)
        .stderr_has("no metadata footer found");
}
