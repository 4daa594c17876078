//! Bounds-checked string buffers for fixed-capacity storage.
//!
//! [`bounded`] copies and appends NUL-terminated strings into plain byte buffers, never writing
//! past their end and always leaving them terminated. [`buffer`] wraps the same operations into
//! buffer types that know their own capacity. The other modules provide the small helpers that
//! usually come along with such code.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(missing_docs)]

pub mod basic;
pub mod bounded;
pub mod buffer;
pub mod error;
pub mod position;
pub mod source;

/// Provides `<FIELD>_SIZE` (and `<FIELD>_DIM` for array fields) associated constants for every
/// field of a struct.
///
/// # Example
///
/// ```
/// use fixstr::MemberSize;
///
/// #[derive(MemberSize)]
/// struct Record {
///     id: u32,
///     name: [u8; 16],
/// }
///
/// assert_eq!(Record::ID_SIZE, 4);
/// assert_eq!(Record::NAME_SIZE, 16);
/// assert_eq!(Record::NAME_DIM, 16);
/// ```
pub use fixstr_macros::MemberSize;
