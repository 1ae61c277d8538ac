// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exit codes, timeouts, and failures before the script runs.

use psr_core::TerminationCause;

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
#[serial(processes)]
fn script_exit_code_passes_through() {
    let sandbox = Sandbox::new();
    let run = sandbox
        .psr()
        .args(&["run", "echo partial; exit 42"])
        .exits(42)
        .stdout_has("partial");
    let footer = run.footer();
    assert_eq!(footer.exit_code, 42);
    assert_eq!(footer.ended_by, TerminationCause::Exit);
}

#[test]
#[serial(processes)]
fn stderr_is_merged_into_the_body() {
    let sandbox = Sandbox::new();
    sandbox
        .psr()
        .args(&["run", "echo to-stderr >&2; exit 3"])
        .exits(3)
        .stdout_has("to-stderr");
}

#[test]
#[serial(processes)]
fn timeout_kills_the_script() {
    let sandbox = Sandbox::new();
    let script = "echo started; sleep 30; echo finished";
    let started = std::time::Instant::now();
    let run = sandbox
        .psr()
        .args(&["run", "-t", "300", script])
        .exits(124)
        .stdout_has("started")
        .stdout_lacks("finished")
        .stderr_has("timed out after 300ms");
    assert!(started.elapsed() < std::time::Duration::from_secs(20));

    let footer = run.footer();
    assert_eq!(footer.exit_code, -1);
    assert_eq!(footer.ended_by, TerminationCause::Timeout);
    assert_eq!(footer.timeout_ms, 300);
}

#[test]
#[serial(processes)]
fn timeout_defaults_from_environment() {
    let sandbox = Sandbox::new();
    let run = sandbox
        .psr()
        .args(&["run", "sleep 30"])
        .env("PSR_TIMEOUT_MS", "200")
        .exits(124);
    assert_eq!(run.footer().timeout_ms, 200);
}

#[test]
#[serial(processes)]
fn zero_timeout_disables_the_timer() {
    let sandbox = Sandbox::new();
    let run = sandbox
        .psr()
        .args(&["run", "-t", "0", "sleep 1; echo done"])
        .passes()
        .stdout_has("done");
    assert_eq!(run.footer().timeout_ms, 0);
}

#[test]
#[serial(processes)]
fn unstartable_shell_reports_in_the_footer() {
    let sandbox = Sandbox::new();
    let run = sandbox
        .psr()
        .args(&["run", "echo hi"])
        .env("PSR_POWERSHELL", "/nonexistent/pwsh")
        .exits(1);
    let footer = run.footer();
    assert_eq!(footer.exit_code, -1);
    assert_eq!(footer.ended_by, TerminationCause::Exit);
}

#[test]
#[serial(processes)]
fn stray_footer_tag_in_output_keeps_timeout_status() {
    let sandbox = Sandbox::new();
    let script = "echo 'printed <powershell_metadata> early'; sleep 30";
    let run = sandbox
        .psr()
        .args(&["run", "-t", "300", script])
        .exits(124)
        .stdout_has("printed <powershell_metadata> early");
    assert_eq!(run.footer().ended_by, TerminationCause::Timeout);
}
