// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `psr footer`

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use psr_core::parse_footer;

use super::read_input;
use crate::exit_error::ExitError;

#[derive(Args)]
pub struct FooterArgs {
    /// File holding a previous `psr run` result (default: stdin)
    pub file: Option<PathBuf>,
}

pub fn handle(args: FooterArgs) -> Result<()> {
    let text = read_input(args.file.as_deref())?;
    let Some(metadata) = parse_footer(&text) else {
        return Err(ExitError::new(1, "psr: no metadata footer found").into());
    };
    println!("{}", serde_json::to_string_pretty(&metadata)?);
    Ok(())
}
