// Password hashing and verification service

use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
};
use argon2::Argon2;

use crate::auth::error::AuthError;

/// Salted one-way password hasher backed by Argon2id.
///
/// Constructed once at startup and shared through application state; nothing
/// outside this type touches digests directly.
#[derive(Clone, Default)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Hash a password with a fresh random salt
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|digest| digest.to_string())
            .map_err(|_| AuthError::PasswordHashError)
    }

    /// Verify a password against a stored digest.
    ///
    /// Returns false for any malformed digest instead of erroring, so callers
    /// cannot distinguish a format failure from a plain mismatch.
    pub fn verify(&self, password: &str, digest: &str) -> bool {
        match PasswordHash::new(digest) {
            Ok(parsed) => self
                .argon2
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn hash_then_verify_succeeds() {
        let hasher = PasswordHasher::new();
        let digest = hasher.hash("pw1").unwrap();
        assert!(hasher.verify("pw1", &digest));
    }

    #[test]
    fn wrong_password_fails_verification() {
        let hasher = PasswordHasher::new();
        let digest = hasher.hash("correct-password").unwrap();
        assert!(!hasher.verify("wrong-password", &digest));
    }

    #[test]
    fn malformed_digests_verify_to_false_without_erroring() {
        let hasher = PasswordHasher::new();
        let malformed = [
            "",
            "not-a-digest",
            "$argon2id$garbage",
            "$2b$10$abcdefghijklmnopqrstuv", // bcrypt-shaped, not parseable here
        ];
        for digest in malformed {
            assert!(!hasher.verify("anything", digest));
        }
    }

    #[test]
    fn same_password_hashes_to_different_digests() {
        let hasher = PasswordHasher::new();
        let first = hasher.hash("repeatable").unwrap();
        let second = hasher.hash("repeatable").unwrap();
        assert_ne!(first, second);
        assert!(hasher.verify("repeatable", &first));
        assert!(hasher.verify("repeatable", &second));
    }

    proptest! {
        // Argon2 is deliberately slow; keep the case count small.
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn prop_hash_verify_roundtrip(password in "[ -~]{1,32}") {
            let hasher = PasswordHasher::new();
            let digest = hasher.hash(&password).unwrap();
            prop_assert!(hasher.verify(&password, &digest));
        }

        #[test]
        fn prop_junk_digests_never_verify(digest in "[ -~]{0,64}") {
            let hasher = PasswordHasher::new();
            // Random printable strings are not valid PHC digests.
            prop_assert!(!hasher.verify("password", &digest));
        }
    }
}
