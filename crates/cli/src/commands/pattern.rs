// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `psr pattern`

use anyhow::Result;
use clap::Args;
use psr_engine::always_pattern;

use super::read_input;

#[derive(Args)]
pub struct PatternArgs {
    /// Script text (default: stdin)
    pub script: Option<String>,
}

pub fn handle(args: PatternArgs) -> Result<()> {
    let script = match args.script {
        Some(script) => script,
        None => read_input(None)?,
    };
    println!("{}", always_pattern(&script));
    Ok(())
}
