// src/github/decode.rs
// =============================================================================
// Turns the `content` field of a contents-endpoint response back into text.
//
// GitHub base64-encodes the file and wraps the encoded text at 60 columns,
// so the payload is full of line breaks. We:
// 1. drop the line breaks
// 2. base64-decode to raw bytes
// 3. decode those bytes as UTF-8 (multi-byte characters must survive)
// =============================================================================

use base64::{prelude::BASE64_STANDARD, Engine};

use crate::error::{BrowseError, Result};
use crate::github::types::FileContents;

// Decodes a whole contents response
//
// Returns an empty string when the response has no `content` field.
pub fn decode_file_contents(contents: &FileContents) -> Result<String> {
    let encoded = match contents.content.as_deref() {
        Some(encoded) if !encoded.is_empty() => encoded,
        _ => return Ok(String::new()),
    };

    match contents.encoding.as_deref() {
        None | Some("base64") => decode_content(encoded),
        Some(other) => Err(BrowseError::decode(format!("unsupported encoding '{}'", other))),
    }
}

// Decodes one base64 payload into UTF-8 text
pub fn decode_content(encoded: &str) -> Result<String> {
    let compact: String = encoded
        .chars()
        .filter(|c| *c != '\n' && *c != '\r')
        .collect();

    let bytes = BASE64_STANDARD.decode(compact.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    // GitHub wraps at 60 encoded characters per line
    fn encode_wrapped(text: &str) -> String {
        let encoded = BASE64_STANDARD.encode(text.as_bytes());
        encoded
            .as_bytes()
            .chunks(60)
            .map(|chunk| std::str::from_utf8(chunk).unwrap())
            .collect::<Vec<_>>()
            .join("\n")
            + "\n"
    }

    #[test]
    fn test_multibyte_text_survives() {
        let text = "# Überschrift\n\nこんにちは世界 🦀 — naïve café\n".repeat(5);
        let encoded = encode_wrapped(&text);
        assert!(encoded.contains('\n'));
        assert_eq!(decode_content(&encoded).unwrap(), text);
    }

    #[test]
    fn test_crlf_line_breaks_are_dropped() {
        let encoded = BASE64_STANDARD.encode("hello world");
        let (a, b) = encoded.split_at(4);
        let wrapped = format!("{}\r\n{}\r\n", a, b);
        assert_eq!(decode_content(&wrapped).unwrap(), "hello world");
    }

    #[test]
    fn test_missing_content_is_empty() {
        let contents = FileContents::default();
        assert_eq!(decode_file_contents(&contents).unwrap(), "");
    }

    #[test]
    fn test_empty_content_with_encoding_none() {
        // Files over 1 MB come back with encoding "none" and no content
        let contents = FileContents {
            content: Some(String::new()),
            encoding: Some("none".to_string()),
        };
        assert_eq!(decode_file_contents(&contents).unwrap(), "");
    }

    #[test]
    fn test_unknown_encoding_is_a_decode_error() {
        let contents = FileContents {
            content: Some("abcd".to_string()),
            encoding: Some("rot13".to_string()),
        };
        let err = decode_file_contents(&contents).unwrap_err();
        assert!(err.to_string().contains("unsupported encoding 'rot13'"));
    }

    #[test]
    fn test_malformed_base64_is_a_decode_error() {
        let err = decode_content("!!!not base64!!!").unwrap_err();
        assert!(matches!(err, BrowseError::Decode(_)));
    }

    #[test]
    fn test_invalid_utf8_is_a_decode_error() {
        let encoded = BASE64_STANDARD.encode([0xc3, 0x28, 0xff]);
        let err = decode_content(&encoded).unwrap_err();
        assert!(matches!(err, BrowseError::Decode(_)));
    }
}
