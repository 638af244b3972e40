#![cfg_attr(not(test), no_std)]

//! # hex-view
//!
//! A lazy, validating view presenting a string of hex digit pairs as a
//! sequence of bytes. The view borrows the caller's text and never
//! allocates; bytes are decoded on demand into a buffer, into any
//! [`Extend`] destination, or one at a time through an iterator.
//!
//! Construction only checks that the length is even. Digit validity is
//! checked at decode time, in one of two modes: the diagnostic operations
//! always produce a full output and report validity as a boolean, while
//! the raising operations and the iterator fail with a typed error at the
//! first observed problem.
//!
//! ```
//! use hex_view::HexView;
//!
//! let view: HexView = HexView::new("DeadBeef").unwrap();
//! assert_eq!(view.size(), 4);
//!
//! let key: [u8; 4] = view.to_array().unwrap();
//! assert_eq!(key, [0xDE, 0xAD, 0xBE, 0xEF]);
//!
//! for byte in view.iter() {
//!     let byte = byte.unwrap();
//!     // ...
//! }
//! ```
//!
//! The error type raised by the fallible operations is a type parameter of
//! the view; any type implementing `From<DecodeHexError>` can be plugged
//! in, so decode failures surface directly as the caller's own error enum.

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod error;

mod digit;
mod iter;
mod view;

pub use crate::{
    digit::hex_digit,
    error::DecodeHexError,
    iter::HexIter,
    view::{Byte, HexView},
};
