use core::fmt;
use core::marker::PhantomData;

use crate::digit::hex_digit;
use crate::error::DecodeHexError;
use crate::iter::HexIter;

/// Output element type of a [`HexView`].
///
/// Implemented for `u8` and `i8`; implement it for your own one-byte
/// wrapper types to decode straight into them.
pub trait Byte: Copy {
    fn from_byte(b: u8) -> Self;
}

impl Byte for u8 {
    #[inline]
    fn from_byte(b: u8) -> Self {
        b
    }
}

impl Byte for i8 {
    #[inline]
    fn from_byte(b: u8) -> Self {
        b as i8
    }
}

/// Borrowed view presenting a string of hex digit pairs as a sequence of
/// decoded bytes.
///
/// The view owns nothing and never allocates; decoding happens on demand,
/// into a destination supplied by the caller or lazily through
/// [`iter`](HexView::iter). Construction only checks that the length is
/// even. Digit validity is checked at decode time, either as an aggregate
/// boolean ([`insert_into`](HexView::insert_into),
/// [`parse_to`](HexView::parse_to)) or as a typed failure
/// ([`place_into`](HexView::place_into), [`to_array`](HexView::to_array),
/// the iterator).
///
/// `B` is the output element type. `E` is the error type raised by the
/// fallible operations; any type convertible from [`DecodeHexError`] works,
/// so callers plug in their own error enum without wrapping the view.
pub struct HexView<'a, B = u8, E = DecodeHexError> {
    text: &'a str,
    _marker: PhantomData<(B, E)>,
}

impl<B, E> Clone for HexView<'_, B, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B, E> Copy for HexView<'_, B, E> {}

impl<B, E> fmt::Debug for HexView<'_, B, E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("HexView").field(&self.text).finish()
    }
}

impl<'a, B, E> HexView<'a, B, E> {
    /// Number of decodable bytes, i.e. half the text length.
    pub fn size(&self) -> usize {
        self.text.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The underlying text.
    pub fn as_str(&self) -> &'a str {
        self.text
    }
}

impl<'a, B: Byte, E: From<DecodeHexError>> HexView<'a, B, E> {
    /// Wraps `text` without scanning it. Fails with
    /// [`DecodeHexError::OddLength`] if the length is not a multiple of
    /// two.
    pub fn new(text: &'a str) -> Result<Self, E> {
        if text.len() % 2 != 0 {
            trace!("hex input has odd length {}", text.len());
            return Err(DecodeHexError::OddLength.into());
        }
        Ok(HexView {
            text,
            _marker: PhantomData,
        })
    }

    /// Decodes every digit pair into `out`, one element at a time.
    ///
    /// The decode is total: all [`size()`](HexView::size) elements are
    /// written even when the text contains invalid digits (each invalid
    /// digit contributes a zero nibble). The return value reports whether
    /// every digit was valid; `false` means the output is best-effort and
    /// the caller decides whether to trust it.
    pub fn insert_into<T: Extend<B>>(&self, out: &mut T) -> bool {
        let mut valid = true;
        out.extend(self.text.as_bytes().chunks_exact(2).map(|pair| {
            B::from_byte((hex_digit(pair[0], &mut valid) << 4) | hex_digit(pair[1], &mut valid))
        }));
        valid
    }

    /// Decodes into a buffer of exactly [`size()`](HexView::size) elements.
    ///
    /// Returns `false` without touching `out` when the length does not
    /// match. Otherwise behaves like [`insert_into`](HexView::insert_into):
    /// the buffer is fully written and the return value reports digit
    /// validity.
    #[must_use]
    pub fn parse_to(&self, out: &mut [B]) -> bool {
        if out.len() != self.size() {
            return false;
        }
        let mut valid = true;
        for (slot, pair) in out.iter_mut().zip(self.text.as_bytes().chunks_exact(2)) {
            *slot =
                B::from_byte((hex_digit(pair[0], &mut valid) << 4) | hex_digit(pair[1], &mut valid));
        }
        valid
    }

    /// Decodes into a buffer of exactly [`size()`](HexView::size) elements,
    /// raising instead of reporting.
    ///
    /// Fails with [`DecodeHexError::SizeMismatch`] before any write when
    /// the length does not match, and with
    /// [`DecodeHexError::InvalidDigit`] after the full decode when any
    /// digit was bad. Already written elements stay written on the invalid
    /// digit path.
    pub fn place_into(&self, out: &mut [B]) -> Result<(), E> {
        if out.len() != self.size() {
            trace!(
                "destination holds {} elements, expected {}",
                out.len(),
                self.size()
            );
            return Err(DecodeHexError::SizeMismatch.into());
        }
        if self.parse_to(out) {
            Ok(())
        } else {
            Err(DecodeHexError::InvalidDigit.into())
        }
    }

    /// Like [`insert_into`](HexView::insert_into), but raises
    /// [`DecodeHexError::InvalidDigit`] instead of returning a boolean.
    /// `out` still receives all [`size()`](HexView::size) elements.
    pub fn place_into_extend<T: Extend<B>>(&self, out: &mut T) -> Result<(), E> {
        if self.insert_into(out) {
            Ok(())
        } else {
            Err(DecodeHexError::InvalidDigit.into())
        }
    }

    /// Decodes to a fixed-size array. Fails like
    /// [`place_into`](HexView::place_into) when `N` differs from
    /// [`size()`](HexView::size) or a digit is invalid.
    pub fn to_array<const N: usize>(&self) -> Result<[B; N], E> {
        let mut out = [B::from_byte(0); N];
        self.place_into(&mut out)?;
        Ok(out)
    }

    /// Lazy iterator over the decoded bytes, decoding one digit pair per
    /// step. Each fresh iterator restarts from the beginning.
    pub fn iter(&self) -> HexIter<'a, B, E> {
        HexIter::new(self.text.as_bytes())
    }
}

impl<'a, B: Byte, E: From<DecodeHexError>> IntoIterator for HexView<'a, B, E> {
    type Item = Result<B, E>;
    type IntoIter = HexIter<'a, B, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, 'v, B: Byte, E: From<DecodeHexError>> IntoIterator for &'v HexView<'a, B, E> {
    type Item = Result<B, E>;
    type IntoIter = HexIter<'a, B, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, E: From<DecodeHexError>, const N: usize> TryFrom<HexView<'a, u8, E>> for [u8; N] {
    type Error = E;

    fn try_from(view: HexView<'a, u8, E>) -> Result<Self, E> {
        view.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    fn view(text: &str) -> HexView {
        HexView::new(text).unwrap()
    }

    #[test]
    fn construction_checks_parity_only() {
        assert_eq!(view("DeadBeef").size(), 4);
        assert_eq!(view("").size(), 0);
        assert!(view("").is_empty());
        // Garbage digits are fine at construction time.
        assert_eq!(view("zz").size(), 1);

        for text in ["a", "abc", "00000"] {
            assert_eq!(
                HexView::<u8>::new(text).unwrap_err(),
                DecodeHexError::OddLength
            );
        }
    }

    #[test]
    fn insert_into_heapless_vec() {
        let mut out: Vec<u8, 4> = Vec::new();
        assert!(view("DeadBeef").insert_into(&mut out));
        assert_eq!(out.as_slice(), &[0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn insert_into_is_total_over_invalid_digits() {
        let mut out = std::vec::Vec::new();
        assert!(!view("00zzff").insert_into(&mut out));
        // Both nibbles of the bad pair decode as zero.
        assert_eq!(out, &[0x00, 0x00, 0xFF]);
    }

    #[test]
    fn parse_to_roundtrip() {
        let mut out = [0u8; 2];
        assert!(view("00ff").parse_to(&mut out));
        assert_eq!(out, [0x00, 0xFF]);
    }

    #[test]
    fn parse_to_rejects_wrong_size_without_writing() {
        let mut out = [0xAAu8; 3];
        assert!(!view("00ff").parse_to(&mut out));
        assert_eq!(out, [0xAA; 3]);

        let mut out = [0xAAu8; 1];
        assert!(!view("00ff").parse_to(&mut out));
        assert_eq!(out, [0xAA; 1]);
    }

    #[test]
    fn parse_to_reports_invalid_digits_but_fills() {
        let mut out = [0xAAu8; 1];
        assert!(!view("zz").parse_to(&mut out));
        assert_eq!(out, [0x00]);
    }

    #[test]
    fn place_into_distinguishes_failures() {
        let mut short = [0u8; 1];
        assert_eq!(
            view("00ff").place_into(&mut short).unwrap_err(),
            DecodeHexError::SizeMismatch
        );
        assert_eq!(short, [0]);

        let mut out = [0u8; 2];
        assert_eq!(
            view("0gff").place_into(&mut out).unwrap_err(),
            DecodeHexError::InvalidDigit
        );

        let mut out = [0u8; 2];
        assert_eq!(view("beef").place_into(&mut out), Ok(()));
        assert_eq!(out, [0xBE, 0xEF]);
    }

    #[test]
    fn place_into_extend_raises_on_invalid_digit() {
        let mut out: Vec<u8, 8> = Vec::new();
        assert_eq!(view("cafe").place_into_extend(&mut out), Ok(()));
        assert_eq!(out.as_slice(), &[0xCA, 0xFE]);

        let mut out: Vec<u8, 8> = Vec::new();
        assert_eq!(
            view("ca:e").place_into_extend(&mut out).unwrap_err(),
            DecodeHexError::InvalidDigit
        );
        // Still wrote every element before reporting.
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn to_array() {
        let bytes: [u8; 4] = view("DeadBeef").to_array().unwrap();
        assert_eq!(bytes, [0xDE, 0xAD, 0xBE, 0xEF]);

        let empty: [u8; 0] = view("").to_array().unwrap();
        assert_eq!(empty, []);

        assert_eq!(
            view("DeadBeef").to_array::<2>().unwrap_err(),
            DecodeHexError::SizeMismatch
        );
        assert_eq!(
            view("DeadBee!").to_array::<4>().unwrap_err(),
            DecodeHexError::InvalidDigit
        );
    }

    #[test]
    fn try_from_array_conversion() {
        let key: [u8; 2] = view("00ff").try_into().unwrap();
        assert_eq!(key, [0x00, 0xFF]);
    }

    #[test]
    fn case_insensitive() {
        for text in ["ab", "AB", "aB", "Ab"] {
            assert_eq!(view(text).to_array::<1>().unwrap(), [0xAB]);
        }
    }

    #[test]
    fn decodes_into_signed_bytes() {
        let view: HexView<i8> = HexView::new("ff7f").unwrap();
        let out: [i8; 2] = view.to_array().unwrap();
        assert_eq!(out, [-1, 127]);
    }

    #[test]
    fn caller_supplied_error_type() {
        #[derive(Debug, PartialEq)]
        enum FrameError {
            BadChecksumEncoding(DecodeHexError),
        }

        impl From<DecodeHexError> for FrameError {
            fn from(e: DecodeHexError) -> Self {
                FrameError::BadChecksumEncoding(e)
            }
        }

        let err = HexView::<u8, FrameError>::new("abc").unwrap_err();
        assert_eq!(
            err,
            FrameError::BadChecksumEncoding(DecodeHexError::OddLength)
        );

        let view: HexView<u8, FrameError> = HexView::new("q0").unwrap();
        assert_eq!(
            view.to_array::<1>().unwrap_err(),
            FrameError::BadChecksumEncoding(DecodeHexError::InvalidDigit)
        );
    }

    #[test]
    fn view_is_copy_and_reusable() {
        let v = view("ff");
        let w = v;
        let mut a = [0u8; 1];
        let mut b = [0u8; 1];
        assert!(v.parse_to(&mut a));
        assert!(w.parse_to(&mut b));
        assert_eq!(a, b);
    }
}
