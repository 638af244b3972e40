use core::fmt;

/// Error type produced by the fallible operations of
/// [`HexView`](crate::HexView) when no caller-supplied error type is in
/// play.
///
/// Views parameterized over a custom error type build it from this one via
/// `From`, so each variant maps to exactly one failure condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecodeHexError {
    /// The input string has an odd number of characters, so it cannot be
    /// split into digit pairs. Detected at view construction.
    OddLength,
    /// The destination buffer length does not match the decoded length.
    /// Detected before anything is written.
    SizeMismatch,
    /// A character outside `0-9a-fA-F` was encountered.
    InvalidDigit,
}

impl fmt::Display for DecodeHexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecodeHexError::OddLength => "input string has an odd number of characters".fmt(f),
            DecodeHexError::SizeMismatch => "destination size does not match decoded size".fmt(f),
            DecodeHexError::InvalidDigit => "invalid hex digit".fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            DecodeHexError::OddLength.to_string(),
            "input string has an odd number of characters"
        );
        assert_eq!(
            DecodeHexError::SizeMismatch.to_string(),
            "destination size does not match decoded size"
        );
        assert_eq!(DecodeHexError::InvalidDigit.to_string(), "invalid hex digit");
    }
}
