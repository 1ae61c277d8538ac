// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! psr-shell: PowerShell child-process plumbing
//!
//! Everything needed to run one script in one PowerShell child:
//!
//! - [`resolve`]: find `pwsh` or `powershell.exe`
//! - [`command`]: the fixed argument vector (script text never reaches argv)
//! - [`signal`]: merge external cancellation with a timeout, first cause wins
//! - [`spawn`]: start the child with the script on stdin
//! - [`collect`]: drain stdout and stderr concurrently in arrival order
//! - [`terminate`]: kill the child and all of its descendants

pub mod collect;
pub mod command;
pub mod decode;
pub mod resolve;
pub mod signal;
pub mod spawn;
pub mod terminate;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use collect::{collect_combined, CollectError, StreamKind};
pub use command::{build_command, COMMAND_FLAGS};
pub use decode::Utf8StreamDecoder;
pub use resolve::{ExecutableResolver, PathResolver, PowerShellExecutable, ResolveError, ShellKind};
pub use signal::TerminationSignal;
pub use spawn::{spawn_shell, ShellProcess, SpawnError, SpawnRequest};
#[cfg(any(test, feature = "test-support"))]
pub use terminate::FakeTerminator;
pub use terminate::{PlatformTerminator, TreeTerminator};
