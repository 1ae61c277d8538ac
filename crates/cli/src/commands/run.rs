// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `psr run`

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use psr_core::parse_footer;
use psr_engine::{env, ExecutionRequest, RunnerConfig, ScriptRunner};
use psr_storage::Direction;
use tokio_util::sync::CancellationToken;

use super::read_input;
use crate::exit_error::ExitError;
use crate::workdir;

#[derive(Args)]
pub struct RunArgs {
    /// Script text (read from stdin when neither this nor --file is given)
    pub script: Option<String>,

    /// Read the script from a file
    #[arg(short, long, conflicts_with = "script")]
    pub file: Option<PathBuf>,

    /// Working directory, relative to the current one
    #[arg(short, long)]
    pub workdir: Option<PathBuf>,

    /// Timeout in milliseconds, 0 for none (default: $PSR_TIMEOUT_MS or 120000)
    #[arg(short, long = "timeout")]
    pub timeout_ms: Option<u64>,

    /// Keep the end of over-long output instead of the beginning
    #[arg(long)]
    pub tail: bool,
}

pub async fn handle(args: RunArgs) -> Result<()> {
    let script = match args.script {
        Some(script) => script,
        None => read_input(args.file.as_deref())?,
    };
    let cwd = std::env::current_dir().context("reading current directory")?;
    let workdir = workdir::resolve(&cwd, args.workdir.as_deref());
    let timeout = args
        .timeout_ms
        .map(Duration::from_millis)
        .unwrap_or_else(env::default_timeout);

    let mut config = RunnerConfig::from_env()?;
    if args.tail {
        config = config.with_direction(Direction::Tail);
    }

    let cancel = CancellationToken::new();
    let interrupt = tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("interrupted, cancelling run");
                cancel.cancel();
            }
        }
    });

    let request = ExecutionRequest::new(script, workdir)
        .with_timeout(timeout)
        .with_cancel(cancel);
    let result = ScriptRunner::from_config(&config).run(request).await;
    interrupt.abort();
    let text = result?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{text}")?;
    stdout.flush()?;

    match parse_footer(&text).and_then(|metadata| ExitError::for_outcome(&metadata)) {
        Some(exit) => Err(exit.into()),
        None => Ok(()),
    }
}
