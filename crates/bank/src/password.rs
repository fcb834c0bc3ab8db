use std::fmt;

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// A salted SHA-256 digest of a password.
///
/// Every hash gets its own random salt, so equal passwords never share a digest.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash {
    salt: String,
    digest: String,
}

impl PasswordHash {
    pub fn new(password: &str) -> Self {
        let salt = Uuid::new_v4().to_string();
        let digest = sha256_hex(&salt, password);
        Self { salt, digest }
    }

    pub fn verify(&self, password: &str) -> bool {
        sha256_hex(&self.salt, password) == self.digest
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHash").finish_non_exhaustive()
    }
}

fn sha256_hex(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify() {
        let hash = PasswordHash::new("s3cr3t");
        assert!(hash.verify("s3cr3t"));
        assert!(!hash.verify("S3CR3T"));
        assert!(!hash.verify(""));
    }

    #[test]
    fn salted() {
        let first = PasswordHash::new("s3cr3t");
        let second = PasswordHash::new("s3cr3t");
        assert_ne!(first, second);
        assert_eq!(first.digest.len(), 64);
    }

    #[test]
    fn debug_hides_digest() {
        let hash = PasswordHash::new("s3cr3t");
        assert_eq!(format!("{hash:?}"), "PasswordHash { .. }");
    }
}
