// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `psr prune`

use anyhow::Result;
use psr_engine::RunnerConfig;
use psr_storage::OverflowStore;

use crate::color;

pub fn handle() -> Result<()> {
    let config = RunnerConfig::from_env()?;
    let store = OverflowStore::new(config.overflow_dir()).with_retention(config.retention);
    let removed = store.prune();
    let noun = if removed == 1 { "file" } else { "files" };
    let dir = color::muted(&format!("({})", store.dir().display()));
    println!("Pruned {removed} overflow {noun} {dir}");
    Ok(())
}
