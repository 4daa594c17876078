//! Values that can be written into a bounded buffer.

use core::ffi::CStr;

/// Something that can be copied or appended into a bounded buffer.
///
/// The content of a source ends at its first NUL byte or at its end, whichever comes first.
pub trait Source {
    /// Returns the bytes to write, or [`None`] for an absent source. An absent source contributes
    /// nothing.
    fn source_bytes(&self) -> Option<&[u8]>;
}

impl Source for [u8] {
    fn source_bytes(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl<const N: usize> Source for [u8; N] {
    fn source_bytes(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl Source for str {
    fn source_bytes(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }
}

impl Source for CStr {
    fn source_bytes(&self) -> Option<&[u8]> {
        Some(self.to_bytes())
    }
}

impl<T: Source + ?Sized> Source for &T {
    fn source_bytes(&self) -> Option<&[u8]> {
        (**self).source_bytes()
    }
}

impl<T: Source> Source for Option<T> {
    fn source_bytes(&self) -> Option<&[u8]> {
        self.as_ref().and_then(Source::source_bytes)
    }
}
