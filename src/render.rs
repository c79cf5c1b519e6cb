use std::fmt;

use crate::sha256::DIGEST_LEN;
use crate::Error;

/// A finished SHA-256 digest.
///
/// Renders as 64 lowercase hex characters via [`Digest::to_hex`], `Display`
/// and `LowerHex`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    /// Lowercase hex, high nibble first, no prefix or separators.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parses a 64 character hex string. Upper and lower case are accepted.
    pub fn from_hex(s: &str) -> Result<Digest, Error> {
        if s.len() != DIGEST_LEN * 2 {
            return Err(Error::InvalidHex {
                reason: format!("expected {} characters, got {}", DIGEST_LEN * 2, s.len()),
            });
        }

        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(s, &mut bytes).map_err(|e| Error::InvalidHex {
            reason: e.to_string(),
        })?;
        Ok(Digest(bytes))
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Digest(bytes)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
