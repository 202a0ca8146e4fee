//! Chat response framing.
//!
//! The chat endpoints do not return pure JSON: the body is free-form reply
//! text followed by a JSON metadata object framed between the literal
//! `<NanoGPT>` and `</NanoGPT>` markers. The marker literals and the split
//! order (reply first, then the first open marker, then the first close
//! marker within the remainder) are wire-compatibility requirements.

use serde_json::Value;

use crate::{Error, Result};

/// Opens the inline metadata section of a chat response.
pub const OPEN_MARKER: &str = "<NanoGPT>";
/// Closes the inline metadata section of a chat response.
pub const CLOSE_MARKER: &str = "</NanoGPT>";

/// Split a chat response body into the reply text and the embedded metadata.
///
/// Anything after the close marker is ignored. Missing markers or malformed
/// metadata JSON fail with [`Error::Parse`].
pub fn parse_reply(body: &str) -> Result<(String, Value)> {
    let (reply, remainder) = body.split_once(OPEN_MARKER).ok_or_else(|| {
        Error::parse(format!("chat response is missing the {} marker", OPEN_MARKER))
    })?;
    let (raw_metadata, _) = remainder.split_once(CLOSE_MARKER).ok_or_else(|| {
        Error::parse(format!("chat response is missing the {} marker", CLOSE_MARKER))
    })?;
    let metadata: Value = serde_json::from_str(raw_metadata)
        .map_err(|e| Error::parse(format!("malformed chat metadata: {}", e)))?;
    Ok((reply.to_string(), metadata))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn splits_reply_and_metadata() {
        let (reply, metadata) = parse_reply("Hello<NanoGPT>{\"tokens\":5}</NanoGPT>").unwrap();
        assert_eq!(reply, "Hello");
        assert_eq!(metadata, json!({"tokens": 5}));
    }

    #[test]
    fn empty_reply_is_allowed() {
        let (reply, metadata) = parse_reply("<NanoGPT>{\"tokens\":0}</NanoGPT>").unwrap();
        assert_eq!(reply, "");
        assert_eq!(metadata, json!({"tokens": 0}));
    }

    #[test]
    fn empty_metadata_object_is_allowed() {
        let (reply, metadata) = parse_reply("hi<NanoGPT>{}</NanoGPT>").unwrap();
        assert_eq!(reply, "hi");
        assert_eq!(metadata, json!({}));
    }

    #[test]
    fn missing_open_marker_fails() {
        let err = parse_reply("just text").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert!(err.to_string().contains("<NanoGPT>"));
    }

    #[test]
    fn missing_close_marker_fails() {
        let err = parse_reply("hi<NanoGPT>{\"a\":1}").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert!(err.to_string().contains("</NanoGPT>"));
    }

    #[test]
    fn malformed_metadata_json_fails() {
        let err = parse_reply("hi<NanoGPT>not json</NanoGPT>").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn trailing_content_after_close_marker_is_ignored() {
        let (reply, metadata) =
            parse_reply("hi<NanoGPT>{\"a\":1}</NanoGPT>trailing garbage").unwrap();
        assert_eq!(reply, "hi");
        assert_eq!(metadata, json!({"a": 1}));
    }

    #[test]
    fn reply_may_contain_angle_brackets() {
        let (reply, _) = parse_reply("a < b > c<NanoGPT>{}</NanoGPT>").unwrap();
        assert_eq!(reply, "a < b > c");
    }

    #[test]
    fn splits_on_first_open_marker() {
        // A second open marker inside the metadata section belongs to the
        // metadata split, matching the documented split order.
        let err = parse_reply("a<NanoGPT>{}<NanoGPT>{}</NanoGPT>").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }
}
