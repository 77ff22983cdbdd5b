use std::fmt;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use sha2::{Digest, Sha256};

/// SHA-256 of a dataset's serialized form, URL-safe base64 without padding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn of(bytes: &[u8]) -> Self {
        Self(URL_SAFE_NO_PAD.encode(Sha256::digest(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 12 characters, for display.
    pub fn short(&self) -> &str {
        &self.0[..12]
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_bytes_same_fingerprint() {
        assert_eq!(Fingerprint::of(b"cases"), Fingerprint::of(b"cases"));
        assert_ne!(Fingerprint::of(b"cases"), Fingerprint::of(b"cases "));
    }

    #[test]
    fn encoding_is_unpadded_url_safe() {
        let fp = Fingerprint::of(b"");
        // 32 bytes -> 43 base64 chars without padding
        assert_eq!(fp.as_str().len(), 43);
        assert!(!fp.as_str().contains('='));
        assert!(!fp.as_str().contains('+'));
        assert!(!fp.as_str().contains('/'));
        assert_eq!(fp.short().len(), 12);
    }
}
