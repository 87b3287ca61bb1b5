//! Base64 content codec, and the draft branch naming scheme built on top of it.

use crate::{
    constants::DRAFT_PREFIX,
    errors::{SessionError, SessionResult},
};
use base64::{engine::general_purpose::STANDARD, Engine};

/// Encodes text content for transport.
pub fn encode(text: &str) -> String {
    encode_bytes(text.as_bytes())
}

/// Encodes binary content, e.g. an uploaded image, for transport.
pub fn encode_bytes(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes a base64 payload back into text.
///
/// The contents API wraps its base64 output at 60 columns, so ASCII whitespace is
/// stripped before decoding.
///
/// ## Returns
/// - `Ok(String)` - The decoded text.
/// - `Err(SessionError::Decoding)` - The payload is not base64 or not UTF-8.
pub fn decode(payload: &str) -> SessionResult<String> {
    let compact = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect::<String>();
    let bytes = STANDARD
        .decode(compact)
        .map_err(|e| SessionError::Decoding(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| SessionError::Decoding(e.to_string()))
}

/// Returns the draft branch name for a file path.
pub fn draft_branch_name(path: &str) -> String {
    format!("{}{}", DRAFT_PREFIX, encode(path))
}

/// Recovers the file path a draft branch was created for.
///
/// ## Returns
/// - `Some(Ok(path))` - The branch is a draft branch for `path`.
/// - `Some(Err(_))` - The branch carries the draft prefix but its suffix does not decode.
/// - `None` - The branch is not a draft branch.
pub fn draft_file_path(branch_name: &str) -> Option<SessionResult<String>> {
    branch_name.strip_prefix(DRAFT_PREFIX).map(decode)
}
