// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `psr run` against a stand-in `pwsh` that pipes its stdin to `/bin/sh`.

mod exit;
mod input;
mod overflow;
