use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::digit::hex_digit;
use crate::error::DecodeHexError;
use crate::view::Byte;

/// Lazy forward iterator over the bytes of a [`HexView`](crate::HexView),
/// decoding one digit pair per step.
///
/// A pair containing an invalid digit yields `Err` for exactly that
/// element; the cursor still advances past it. Decoding is stateless, so
/// cloning gives an independent cursor and fresh iterators from the same
/// view produce identical sequences.
pub struct HexIter<'a, B = u8, E = DecodeHexError> {
    buf: &'a [u8],
    i: usize,
    _marker: PhantomData<(B, E)>,
}

impl<'a, B, E> HexIter<'a, B, E> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        HexIter {
            buf,
            i: 0,
            _marker: PhantomData,
        }
    }
}

impl<B, E> Clone for HexIter<'_, B, E> {
    fn clone(&self) -> Self {
        HexIter {
            buf: self.buf,
            i: self.i,
            _marker: PhantomData,
        }
    }
}

// Equality is cursor position over the same text, not remaining contents.
impl<B, E> PartialEq for HexIter<'_, B, E> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.buf, other.buf) && self.i == other.i
    }
}

impl<B, E> Eq for HexIter<'_, B, E> {}

impl<B, E> fmt::Debug for HexIter<'_, B, E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("HexIter")
            .field("pos", &(self.i / 2))
            .field("size", &(self.buf.len() / 2))
            .finish()
    }
}

impl<'a, B: Byte, E: From<DecodeHexError>> Iterator for HexIter<'a, B, E> {
    type Item = Result<B, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.buf.len() {
            return None;
        }
        let mut valid = true;
        let b = (hex_digit(self.buf[self.i], &mut valid) << 4)
            | hex_digit(self.buf[self.i + 1], &mut valid);
        self.i += 2;
        if valid {
            Some(Ok(B::from_byte(b)))
        } else {
            Some(Err(DecodeHexError::InvalidDigit.into()))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.buf.len() - self.i) / 2;
        (remaining, Some(remaining))
    }
}

impl<B: Byte, E: From<DecodeHexError>> ExactSizeIterator for HexIter<'_, B, E> {}

impl<B: Byte, E: From<DecodeHexError>> FusedIterator for HexIter<'_, B, E> {}
