//! Copies and appends NUL-terminated strings into fixed-capacity byte buffers.
//!
//! The length of a destination slice is its capacity, terminator included. Every function here
//! leaves a non-empty destination NUL-terminated within its capacity, whatever the outcome. The
//! current content of a destination is found by scanning it for its terminator on each call.
//!
//! Copying into the destination stops at a NUL byte in the source, and the rest of the requested
//! span is zero-filled. Bytes after the new terminator are never touched.
//!
//! # Example
//!
//! ```
//! use fixstr::{bounded, error::Error};
//!
//! let mut buf = [0xff; 6];
//! assert_eq!(bounded::copy(&mut buf, "ab"), Ok(2));
//! assert_eq!(bounded::append(&mut buf, "cde"), Ok(5));
//! assert_eq!(&buf, b"abcde\0");
//!
//! assert_eq!(bounded::append(&mut buf, "f"), Err(Error::Truncated));
//! ```

use crate::{
    error::{Error, Result},
    position::Position,
    source::Source,
};

/// Returns the number of bytes in `bytes` before the first NUL, looking at no more than `max`
/// bytes.
pub fn strnlen(bytes: &[u8], max: usize) -> usize {
    let bytes = &bytes[..bytes.len().min(max)];
    bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len())
}

/// Copies `source` into `dst`, replacing its content.
///
/// Returns the new content length, or [`Error::Truncated`] when `source` does not fit, in which
/// case `dst` holds as much of it as possible.
#[track_caller]
pub fn copy<S: Source + ?Sized>(dst: &mut [u8], source: &S) -> Result<usize> {
    reset(dst);
    append(dst, source)
}

/// Copies `len` bytes of `source` into `dst`, replacing its content.
///
/// If the content of `source` is shorter than `len`, the remainder is filled with NUL bytes.
#[track_caller]
pub fn copy_with_length<S: Source + ?Sized>(
    dst: &mut [u8],
    source: &S,
    len: usize,
) -> Result<usize> {
    reset(dst);
    append_with_length(dst, source, len)
}

/// Concatenates `sources` into `dst`, replacing its content.
///
/// Stops at the first source that does not fit.
#[track_caller]
pub fn copy_multi<S: Source>(dst: &mut [u8], sources: &[S]) -> Result<usize> {
    reset(dst);
    append_multi(dst, sources)
}

/// Appends `source` to the content of `dst`.
#[track_caller]
pub fn append<S: Source + ?Sized>(dst: &mut [u8], source: &S) -> Result<usize> {
    let start = start_of(dst)?;
    let bytes = source.source_bytes().unwrap_or_default();
    let len = strnlen(bytes, dst.len());
    write_at(dst, start, bytes, len)
}

/// Appends `len` bytes of `source` to the content of `dst`.
///
/// An absent source contributes nothing regardless of `len`.
#[track_caller]
pub fn append_with_length<S: Source + ?Sized>(
    dst: &mut [u8],
    source: &S,
    len: usize,
) -> Result<usize> {
    let start = start_of(dst)?;
    match source.source_bytes() {
        Some(bytes) => write_at(dst, start, bytes, len),
        None => write_at(dst, start, &[], 0),
    }
}

/// Appends each of `sources` in order to the content of `dst`.
///
/// Stops at the first source that does not fit; the following ones are not looked at.
#[track_caller]
pub fn append_multi<S: Source>(dst: &mut [u8], sources: &[S]) -> Result<usize> {
    let mut start = start_of(dst)?;
    // An empty list still has to leave `dst` terminated.
    if sources.is_empty() {
        return write_at(dst, start, &[], 0);
    }
    for source in sources {
        let bytes = source.source_bytes().unwrap_or_default();
        let len = strnlen(bytes, dst.len());
        start = write_at(dst, start, bytes, len)?;
    }
    Ok(start)
}

/// Empties `dst` if it has any capacity.
fn reset(dst: &mut [u8]) {
    if let Some(first) = dst.first_mut() {
        *first = 0;
    }
}

/// Returns the current content length of `dst`.
#[track_caller]
fn start_of(dst: &[u8]) -> Result<usize> {
    if dst.is_empty() {
        log::warn!("{}: write into a buffer without capacity", Position::caller());
        return Err(Error::InvalidTarget);
    }
    Ok(strnlen(dst, dst.len()))
}

/// Writes `len` bytes of `bytes` at `start` and terminates them, or as many as fit before the
/// last byte of `dst` and terminates there.
///
/// `dst` must not be empty and `start` must not exceed its length.
#[track_caller]
fn write_at(dst: &mut [u8], start: usize, bytes: &[u8], len: usize) -> Result<usize> {
    let size = dst.len();
    if size - start <= len {
        // `start == size` when `dst` had no terminator at all.
        let start = start.min(size - 1);
        fill(&mut dst[start..size - 1], bytes);
        dst[size - 1] = 0;
        log::debug!(
            "{}: write of {} bytes at offset {} truncated to fit {} bytes",
            Position::caller(),
            len,
            start,
            size
        );
        return Err(Error::Truncated);
    }

    fill(&mut dst[start..start + len], bytes);
    dst[start + len] = 0;
    Ok(start + len)
}

/// Copies `bytes` into `dst` up to the first NUL, then zero-fills the rest of `dst`.
fn fill(dst: &mut [u8], bytes: &[u8]) {
    let n = strnlen(bytes, dst.len());
    dst[..n].copy_from_slice(&bytes[..n]);
    dst[n..].fill(0);
}
