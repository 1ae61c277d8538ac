// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Builders and proptest strategies shared with other crates' tests.

use proptest::prelude::*;

use crate::{ExecutionMetadata, TerminationCause};

/// A plausible record for a clean exit.
pub fn metadata() -> ExecutionMetadata {
    ExecutionMetadata {
        exit_code: 0,
        ended_by: TerminationCause::Exit,
        shell: "pwsh".to_string(),
        resolved_workdir: "/work".to_string(),
        timeout_ms: 120_000,
        duration_ms: 15,
        truncated: None,
        output_path: None,
    }
}

pub fn arb_cause() -> impl Strategy<Value = TerminationCause> {
    prop_oneof![
        Just(TerminationCause::Exit),
        Just(TerminationCause::Timeout),
        Just(TerminationCause::Abort),
    ]
}

/// Any valid metadata record, including boundary values and strings that
/// contain the footer's own tags.
pub fn arb_metadata() -> impl Strategy<Value = ExecutionMetadata> {
    let text = prop_oneof![
        ".*",
        Just("</powershell_metadata>".to_string()),
        Just("C:\\Users\\me\\<dir>".to_string()),
    ];
    let millis = || prop_oneof![Just(0u64), any::<u32>().prop_map(u64::from)];
    let outcome = (
        prop_oneof![
            Just(0i64),
            Just(-1),
            Just(i64::from(u32::MAX)),
            any::<i32>().prop_map(i64::from),
        ],
        arb_cause(),
        prop_oneof![
            Just("pwsh".to_string()),
            Just("powershell".to_string()),
            Just("none".to_string()),
        ],
        text.clone(),
    );
    let details = (
        millis(),
        millis(),
        proptest::option::of(any::<bool>()),
        proptest::option::of(text),
    );
    (outcome, details).prop_map(|(outcome, details)| {
        let (exit_code, ended_by, shell, resolved_workdir) = outcome;
        let (timeout_ms, duration_ms, truncated, output_path) = details;
        ExecutionMetadata {
            exit_code,
            ended_by,
            shell,
            resolved_workdir,
            timeout_ms,
            duration_ms,
            truncated,
            output_path,
        }
    })
}
