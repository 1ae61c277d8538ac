// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! psr-core: shared vocabulary for the PowerShell script runner (psr)
//!
//! Holds the types every other crate agrees on: why an invocation ended,
//! the metadata record describing it, and the tagged footer that carries
//! that record back to callers.

pub mod cause;
pub mod clock;
pub mod footer;
pub mod metadata;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use cause::TerminationCause;
pub use clock::{Clock, FakeClock, SystemClock};
pub use footer::{append_footer, format_footer, parse_footer, FOOTER_CLOSE, FOOTER_OPEN};
pub use metadata::{ExecutionMetadata, SYNTHETIC_EXIT_CODE};
