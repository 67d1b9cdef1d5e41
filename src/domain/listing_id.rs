use base64::Engine;
use sha1::{Digest, Sha1};

/// Length of every listing id. Short enough for readable URLs, long enough
/// that accidental collisions across a campus-sized catalog are not a
/// practical concern.
pub const LISTING_ID_LEN: usize = 10;

/// Derive a listing's id from its owner and name.
///
/// The id is a pure function of `(owner_handle, name)`: SHA-1 over the
/// UTF-8 bytes of `"{owner_handle}-{name}"`, base64url-encoded without
/// padding, truncated to [`LISTING_ID_LEN`] characters. The same pair
/// always produces the same id, so re-creating a listing with the same
/// name collides on purpose; callers decide what a collision means.
///
/// The base64url alphabet (`A-Za-z0-9_-`) makes the id safe to embed in a
/// path segment without further encoding.
pub fn generate_listing_id(owner_handle: &str, name: &str) -> String {
    let input = format!("{owner_handle}-{name}");
    let digest = Sha1::digest(input.as_bytes());
    let encoded = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(digest);
    // 20 digest bytes encode to 27 ASCII chars, so the slice is in bounds.
    encoded[..LISTING_ID_LEN].to_string()
}
