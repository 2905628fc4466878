//! Argon2 password hashing implementation.

use argon2::{
    Argon2,
    password_hash::{
        self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use authgate_core::AuthFailure;
use authgate_core::ports::PasswordService;

/// Argon2-based password service, also used for client secrets.
pub struct Argon2PasswordService {
    argon2: Argon2<'static>,
}

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl Default for Argon2PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthFailure> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthFailure::internal(format!("Failed to hash password: {e}")))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthFailure> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AuthFailure::invalid_data(format!("Stored password hash is invalid: {e}")))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthFailure::internal(format!(
                "Failed to verify password: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use authgate_core::AuthFailureCode;

    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let service = Argon2PasswordService::new();
        let password = "secure_password_123";

        let hash = service.hash(password).unwrap();
        assert!(service.verify(password, &hash).unwrap());
        assert!(!service.verify("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_unparsable_hash_is_invalid_data() {
        let service = Argon2PasswordService::new();

        let err = service.verify("anything", "not-a-phc-string").unwrap_err();

        assert_eq!(err.code(), &AuthFailureCode::InvalidData);
    }
}
