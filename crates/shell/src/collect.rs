// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Combined stdout/stderr collection.
//!
//! Both streams are drained concurrently, each with its own decoder. Every
//! chunk is stamped from one shared counter at the moment it is read, and the
//! two streams are merged by stamp so the result interleaves the way the
//! output actually arrived.

use std::fmt;
use std::io;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::decode::Utf8StreamDecoder;

/// Bytes requested per read.
pub const READ_CHUNK_SIZE: usize = 8192;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Stdout,
    Stderr,
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StreamKind::Stdout => "stdout",
            StreamKind::Stderr => "stderr",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    #[error("failed to read {stream}: {source}")]
    Read {
        stream: StreamKind,
        source: io::Error,
    },
}

#[derive(Debug)]
struct Chunk {
    seq: u64,
    text: String,
}

/// Drain both streams to EOF and return their merged text.
///
/// A read error on either stream fails the whole collection; nothing
/// collected so far is returned.
pub async fn collect_combined<O, E>(stdout: O, stderr: E) -> Result<String, CollectError>
where
    O: AsyncRead + Unpin,
    E: AsyncRead + Unpin,
{
    let sequence = AtomicU64::new(0);
    let (out, err) = tokio::try_join!(
        drain(stdout, StreamKind::Stdout, &sequence),
        drain(stderr, StreamKind::Stderr, &sequence),
    )?;
    Ok(merge(out, err))
}

async fn drain<R>(
    mut reader: R,
    stream: StreamKind,
    sequence: &AtomicU64,
) -> Result<Vec<Chunk>, CollectError>
where
    R: AsyncRead + Unpin,
{
    let mut decoder = Utf8StreamDecoder::new();
    let mut buf = vec![0u8; READ_CHUNK_SIZE];
    let mut chunks = Vec::new();

    loop {
        let n = reader
            .read(&mut buf)
            .await
            .map_err(|source| CollectError::Read { stream, source })?;
        if n == 0 {
            break;
        }
        let seq = sequence.fetch_add(1, Ordering::Relaxed);
        let text = decoder.decode(&buf[..n]);
        if !text.is_empty() {
            chunks.push(Chunk { seq, text });
        }
    }

    let tail = decoder.flush();
    if !tail.is_empty() {
        chunks.push(Chunk {
            seq: sequence.fetch_add(1, Ordering::Relaxed),
            text: tail,
        });
    }
    tracing::trace!(%stream, chunks = chunks.len(), "stream drained");
    Ok(chunks)
}

/// Merge two already-ordered chunk lists by sequence number.
fn merge(out: Vec<Chunk>, err: Vec<Chunk>) -> String {
    let capacity = out.iter().chain(&err).map(|c| c.text.len()).sum();
    let mut text = String::with_capacity(capacity);
    let mut out = out.into_iter().peekable();
    let mut err = err.into_iter().peekable();
    loop {
        let next = match (out.peek(), err.peek()) {
            (Some(a), Some(b)) if a.seq <= b.seq => out.next(),
            (Some(_), Some(_)) => err.next(),
            (Some(_), None) => out.next(),
            (None, Some(_)) => err.next(),
            (None, None) => break,
        };
        if let Some(chunk) = next {
            text.push_str(&chunk.text);
        }
    }
    text
}

#[cfg(test)]
#[path = "collect_tests.rs"]
mod tests;
