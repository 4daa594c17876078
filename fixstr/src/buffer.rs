//! Provides NUL-terminated string buffers with a fixed capacity under no [alloc] environments.
//!
//! Both buffers keep their content in C string form: the content ends at the first NUL byte and
//! always fits in `capacity() - 1` bytes. A buffer with zero capacity holds nothing and rejects
//! every write with [`Error::InvalidTarget`](crate::error::Error::InvalidTarget).

use core::fmt::{self, Display, Write};
use core::hash::{Hash, Hasher};
use core::str::Utf8Error;

use custom_debug::Debug;

use crate::{bounded, error::Result, source::Source};

/// Formats the content of a buffer as text for [`Debug`].
fn debug_content<B: AsRef<[u8]>>(buf: &B, f: &mut fmt::Formatter) -> fmt::Result {
    let buf = buf.as_ref();
    let content = &buf[..bounded::strnlen(buf, buf.len())];
    write!(f, "\"")?;
    for chunk in content.utf8_chunks() {
        write!(f, "{}", chunk.valid().escape_debug())?;
        for b in chunk.invalid() {
            write!(f, "\\x{:02x}", b)?;
        }
    }
    write!(f, "\"")
}

/// Writes `content` replacing invalid UTF-8 sequences with U+FFFD.
fn display_lossy(content: &[u8], f: &mut fmt::Formatter) -> fmt::Result {
    for chunk in content.utf8_chunks() {
        f.write_str(chunk.valid())?;
        if !chunk.invalid().is_empty() {
            f.write_char(char::REPLACEMENT_CHARACTER)?;
        }
    }
    Ok(())
}

/// Provides a bounded string buffer over a borrowed byte buffer.
#[derive(Debug)]
pub struct StrBuf<'buf> {
    #[debug(with = debug_content)]
    buf: &'buf mut [u8],
}

impl<'buf> StrBuf<'buf> {
    /// Constructs [StrBuf] with `buf`, keeping the string `buf` already holds.
    pub fn new(buf: &'buf mut [u8]) -> Self {
        Self { buf }
    }

    /// Constructs [StrBuf] with `buf` and empties it.
    pub fn empty(buf: &'buf mut [u8]) -> Self {
        let mut buf = Self::new(buf);
        buf.clear();
        buf
    }

    /// Total size of the inner buffer, terminator included.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Length of the content.
    pub fn len(&self) -> usize {
        bounded::strnlen(&self.buf[..], self.buf.len())
    }

    /// Returns `true` if there is no content.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes the content.
    pub fn clear(&mut self) {
        if let Some(first) = self.buf.first_mut() {
            *first = 0;
        }
    }

    /// Content bytes without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len()]
    }

    /// Content bytes followed by the terminator. If the inner buffer has no terminator (only
    /// possible when it was handed over that way and not written since), there is none to include.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        let len = self.len();
        &self.buf[..(len + 1).min(self.buf.len())]
    }

    /// Converts the content into `&`[`str`].
    pub fn to_str(&self) -> core::result::Result<&str, Utf8Error> {
        core::str::from_utf8(self.as_bytes())
    }

    /// Replaces the content with `source`. See [`bounded::copy()`].
    #[track_caller]
    pub fn copy<S: Source + ?Sized>(&mut self, source: &S) -> Result<usize> {
        bounded::copy(self.buf, source)
    }

    /// Replaces the content with `len` bytes of `source`. See [`bounded::copy_with_length()`].
    #[track_caller]
    pub fn copy_with_length<S: Source + ?Sized>(
        &mut self,
        source: &S,
        len: usize,
    ) -> Result<usize> {
        bounded::copy_with_length(self.buf, source, len)
    }

    /// Replaces the content with the concatenation of `sources`. See [`bounded::copy_multi()`].
    #[track_caller]
    pub fn copy_multi<S: Source>(&mut self, sources: &[S]) -> Result<usize> {
        bounded::copy_multi(self.buf, sources)
    }

    /// Appends `source`. See [`bounded::append()`].
    #[track_caller]
    pub fn append<S: Source + ?Sized>(&mut self, source: &S) -> Result<usize> {
        bounded::append(self.buf, source)
    }

    /// Appends `len` bytes of `source`. See [`bounded::append_with_length()`].
    #[track_caller]
    pub fn append_with_length<S: Source + ?Sized>(
        &mut self,
        source: &S,
        len: usize,
    ) -> Result<usize> {
        bounded::append_with_length(self.buf, source, len)
    }

    /// Appends each of `sources`. See [`bounded::append_multi()`].
    #[track_caller]
    pub fn append_multi<S: Source>(&mut self, sources: &[S]) -> Result<usize> {
        bounded::append_multi(self.buf, sources)
    }
}

impl Write for StrBuf<'_> {
    /// When trying to write string whose length runs over the inner buffer, writes string within
    /// the limit and returns an [Error](fmt::Error).
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s).map(|_| ()).map_err(|_| fmt::Error)
    }
}

impl Display for StrBuf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_lossy(self.as_bytes(), f)
    }
}

impl Source for StrBuf<'_> {
    fn source_bytes(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }
}

/// Provides a bounded string buffer owning `N` bytes, terminator included.
///
/// Comparison and hashing look at the content only.
#[derive(Debug, Clone)]
pub struct FixedStr<const N: usize> {
    #[debug(with = debug_content)]
    buf: [u8; N],
}

impl<const N: usize> FixedStr<N> {
    /// Constructs an empty [FixedStr].
    pub const fn new() -> Self {
        Self { buf: [0; N] }
    }

    /// Returns a [StrBuf] view writing into `self`.
    pub fn as_buf(&mut self) -> StrBuf<'_> {
        StrBuf::new(&mut self.buf)
    }

    /// Total size, terminator included.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Length of the content.
    pub fn len(&self) -> usize {
        bounded::strnlen(&self.buf, N)
    }

    /// Returns `true` if there is no content.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes the content.
    pub fn clear(&mut self) {
        self.as_buf().clear();
    }

    /// Content bytes without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len()]
    }

    /// Content bytes followed by the terminator. Empty when `N` is `0`.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..(self.len() + 1).min(N)]
    }

    /// Converts the content into `&`[`str`].
    pub fn to_str(&self) -> core::result::Result<&str, Utf8Error> {
        core::str::from_utf8(self.as_bytes())
    }

    /// Replaces the content with `source`. See [`bounded::copy()`].
    #[track_caller]
    pub fn copy<S: Source + ?Sized>(&mut self, source: &S) -> Result<usize> {
        bounded::copy(&mut self.buf, source)
    }

    /// Replaces the content with `len` bytes of `source`. See [`bounded::copy_with_length()`].
    #[track_caller]
    pub fn copy_with_length<S: Source + ?Sized>(
        &mut self,
        source: &S,
        len: usize,
    ) -> Result<usize> {
        bounded::copy_with_length(&mut self.buf, source, len)
    }

    /// Replaces the content with the concatenation of `sources`. See [`bounded::copy_multi()`].
    #[track_caller]
    pub fn copy_multi<S: Source>(&mut self, sources: &[S]) -> Result<usize> {
        bounded::copy_multi(&mut self.buf, sources)
    }

    /// Appends `source`. See [`bounded::append()`].
    #[track_caller]
    pub fn append<S: Source + ?Sized>(&mut self, source: &S) -> Result<usize> {
        bounded::append(&mut self.buf, source)
    }

    /// Appends `len` bytes of `source`. See [`bounded::append_with_length()`].
    #[track_caller]
    pub fn append_with_length<S: Source + ?Sized>(
        &mut self,
        source: &S,
        len: usize,
    ) -> Result<usize> {
        bounded::append_with_length(&mut self.buf, source, len)
    }

    /// Appends each of `sources`. See [`bounded::append_multi()`].
    #[track_caller]
    pub fn append_multi<S: Source>(&mut self, sources: &[S]) -> Result<usize> {
        bounded::append_multi(&mut self.buf, sources)
    }
}

impl<const N: usize> Default for FixedStr<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Write for FixedStr<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s).map(|_| ()).map_err(|_| fmt::Error)
    }
}

impl<const N: usize> Display for FixedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_lossy(self.as_bytes(), f)
    }
}

impl<const N: usize> Source for FixedStr<N> {
    fn source_bytes(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }
}

impl<const N: usize, const M: usize> PartialEq<FixedStr<M>> for FixedStr<N> {
    fn eq(&self, other: &FixedStr<M>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> Eq for FixedStr<N> {}

impl<const N: usize> Hash for FixedStr<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl<const N: usize> PartialEq<str> for FixedStr<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<&str> for FixedStr<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}
