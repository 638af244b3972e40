/// Decodes a single ASCII character as a hex digit, case-insensitive.
///
/// Returns the 4-bit value for `0-9`, `a-f` and `A-F`. Any other character
/// decodes as `0` and clears `valid`; the flag is never set back, so one
/// flag can be threaded through a whole decode loop and checked once at
/// the end instead of unwrapping a result per character.
#[inline]
pub fn hex_digit(c: u8, valid: &mut bool) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => {
            *valid = false;
            0
        }
    }
}
