// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `psr which`

use anyhow::Result;
use psr_engine::RunnerConfig;
use psr_shell::ExecutableResolver as _;

use crate::color;
use crate::exit_error::ExitError;

pub fn handle() -> Result<()> {
    let config = RunnerConfig::from_env()?;
    let exe = config
        .resolver()
        .resolve()
        .map_err(|e| ExitError::new(1, e.to_string()))?;
    let kind = color::label(&format!("{}:", exe.kind));
    println!("{kind} {}", exe.path.display());
    Ok(())
}
