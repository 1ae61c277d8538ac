// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Where the script and working directory come from.

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
#[serial(processes)]
fn script_from_argument() {
    let sandbox = Sandbox::new();
    let run = sandbox
        .psr()
        .args(&["run", "echo hello"])
        .passes()
        .stdout_has("hello\n<powershell_metadata>");
    let footer = run.footer();
    assert_eq!(footer.exit_code, 0);
    assert_eq!(footer.shell, "pwsh");
    assert_eq!(footer.timeout_ms, 120_000);
}

#[test]
#[serial(processes)]
fn script_from_stdin() {
    let sandbox = Sandbox::new();
    sandbox
        .psr()
        .args(&["run"])
        .stdin("echo piped")
        .passes()
        .stdout_has("piped\n");
}

#[test]
#[serial(processes)]
fn script_from_file() {
    let sandbox = Sandbox::new();
    let script = sandbox.file("build.ps1", "echo one\necho two\n");
    sandbox
        .psr()
        .args(&["run", "-f", script.to_str().unwrap()])
        .passes()
        .stdout_has("one\ntwo\n");
}

#[test]
#[serial(processes)]
fn script_and_file_conflict() {
    let sandbox = Sandbox::new();
    sandbox
        .psr()
        .args(&["run", "echo hi", "-f", "x.ps1"])
        .exits(2);
}

#[test]
#[serial(processes)]
fn relative_workdir_resolves_against_current_dir() {
    let sandbox = Sandbox::new();
    sandbox.file("nested/dir/marker.txt", "found-it\n");

    let run = sandbox
        .psr()
        .args(&["run", "-w", "nested/./dir", "cat marker.txt"])
        .passes()
        .stdout_has("found-it");
    let expected = sandbox.work().canonicalize().unwrap().join("nested/dir");
    let footer = run.footer();
    assert_eq!(footer.resolved_workdir, expected.display().to_string());
}

#[test]
#[serial(processes)]
fn missing_workdir_is_reported_in_the_body() {
    let sandbox = Sandbox::new();
    let run = sandbox
        .psr()
        .args(&["run", "-w", "gone", "echo never"])
        .exits(1)
        .stdout_lacks("never");
    assert_eq!(run.footer().exit_code, -1);
}

#[test]
#[serial(processes)]
fn script_text_is_not_interpreted_by_the_launcher() {
    let sandbox = Sandbox::new();
    sandbox
        .psr()
        .args(&["run", "echo \"a'b\" $((1 + 2)) `echo x`"])
        .passes()
        .stdout_has("a'b 3 x");
}
