//! Form body encoding for the `/text` endpoint

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Content type of the `/text` request body
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Form field the device reads the message from
const MESSAGE_FIELD: &str = "message";

/// Bytes left unescaped in a URI component: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
///
/// Everything else, including space, is `%XX`-encoded. Space becomes `%20`,
/// never `+`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build the `message=<percent-encoded text>` request body.
///
/// The text is sent as-is (untrimmed), UTF-8 encoded.
pub fn encode_message_body(text: &str) -> String {
    format!(
        "{MESSAGE_FIELD}={}",
        utf8_percent_encode(text, URI_COMPONENT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_is_percent_20() {
        assert_eq!(encode_message_body("hello world"), "message=hello%20world");
    }

    #[test]
    fn test_alphanumerics_untouched() {
        assert_eq!(encode_message_body("abcXYZ019"), "message=abcXYZ019");
    }

    #[test]
    fn test_unreserved_marks_untouched() {
        assert_eq!(encode_message_body("-_.!~*'()"), "message=-_.!~*'()");
    }

    #[test]
    fn test_form_delimiters_escaped() {
        assert_eq!(encode_message_body("a&b=c+d"), "message=a%26b%3Dc%2Bd");
    }

    #[test]
    fn test_reserved_uri_chars_escaped() {
        assert_eq!(encode_message_body("/?#:@"), "message=%2F%3F%23%3A%40");
    }

    #[test]
    fn test_utf8_multibyte() {
        assert_eq!(encode_message_body("é"), "message=%C3%A9");
        assert_eq!(encode_message_body("☃"), "message=%E2%98%83");
    }

    #[test]
    fn test_newline_and_surrounding_whitespace_preserved() {
        assert_eq!(encode_message_body(" hi\n"), "message=%20hi%0A");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(encode_message_body(""), "message=");
    }
}
