//! Shared key generation for storage backends.
//!
//! Key format: `[prefix/]<random>.<extension>` where `<random>` is 32 bytes
//! of CSPRNG output encoded as URL-safe base64 without padding. Keys are
//! never reused; collision probability is treated as negligible.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::RngCore;

const KEY_RANDOM_BYTES: usize = 32;

/// Generate a fresh storage key for one published asset.
///
/// `prefix` partitions the key space (e.g. by aspect class for videos);
/// thumbnails pass `None` and land at the root of the asset directory.
pub fn generate_asset_key(prefix: Option<&str>, extension: &str) -> String {
    let mut buf = [0u8; KEY_RANDOM_BYTES];
    rand::rng().fill_bytes(&mut buf);
    let id = URL_SAFE_NO_PAD.encode(buf);

    match prefix {
        Some(prefix) => format!("{}/{}.{}", prefix, id, extension),
        None => format!("{}.{}", id, extension),
    }
}
