//! Storage format of the persisted token.
//!
//! The token is prefixed with a marker and base64 encoded. This only keeps the
//! raw bearer out of casual view in browser dev tools. It is NOT encryption and
//! anyone with access to the storage can recover the token.

use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Marker prepended before encoding; its absence after decoding means the
/// slot holds foreign data.
pub const TOKEN_PREFIX: &str = "brk_";

pub fn encode_token(token: &str) -> String {
    STANDARD.encode(format!("{TOKEN_PREFIX}{token}"))
}

/// Reverse [`encode_token`]. Returns `None` for anything it did not produce.
pub fn decode_token(encoded: &str) -> Option<String> {
    let bytes = STANDARD.decode(encoded.trim()).ok()?;
    let text = String::from_utf8(bytes).ok()?;
    text.strip_prefix(TOKEN_PREFIX)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
}
