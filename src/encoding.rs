//! Percent-encoding of URI components.

/// Uppercase hex digits used for `%XX` escapes.
const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Returns true if the byte is in the RFC 3986 `unreserved` set.
#[must_use]
pub const fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~')
}

/// Percent-encodes a string for use as a single URI component.
///
/// ASCII alphanumerics and `- _ . ~` pass through unchanged. Every other
/// byte of the UTF-8 encoding, reserved delimiters and space included,
/// is written as `%XX` with uppercase hex digits.
///
/// # Examples
///
/// ```
/// use url_builder::encode_component;
///
/// assert_eq!(encode_component("a b"), "a%20b");
/// assert_eq!(encode_component("c&d"), "c%26d");
/// assert_eq!(encode_component("safe-._~"), "safe-._~");
/// ```
#[must_use]
pub fn encode_component(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for &byte in input.as_bytes() {
        if is_unreserved(byte) {
            encoded.push(char::from(byte));
        } else {
            encoded.push('%');
            encoded.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
            encoded.push(char::from(HEX_DIGITS[usize::from(byte & 0x0F)]));
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreserved_pass_through() {
        let input = "AZaz09-_.~";
        assert_eq!(encode_component(input), input);
    }

    #[test]
    fn space_is_escaped() {
        assert_eq!(encode_component("a b"), "a%20b");
    }

    #[test]
    fn reserved_delimiters_are_escaped() {
        assert_eq!(
            encode_component(":/?#[]@!$&'()*+,;="),
            "%3A%2F%3F%23%5B%5D%40%21%24%26%27%28%29%2A%2B%2C%3B%3D"
        );
    }

    #[test]
    fn percent_sign_is_escaped() {
        assert_eq!(encode_component("100%"), "100%25");
    }

    #[test]
    fn multibyte_utf8_is_escaped_per_byte() {
        assert_eq!(encode_component("é"), "%C3%A9");
        assert_eq!(encode_component("日"), "%E6%97%A5");
    }

    #[test]
    fn empty_input() {
        assert_eq!(encode_component(""), "");
    }

    #[test]
    fn is_unreserved_rejects_reserved() {
        assert!(is_unreserved(b'~'));
        assert!(!is_unreserved(b'/'));
        assert!(!is_unreserved(b' '));
        assert!(!is_unreserved(0x80));
    }
}
