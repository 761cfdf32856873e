//! Adaptive password hashing (bcrypt).
//!
//! The cost factor is fixed at startup from configuration; the hasher is an
//! immutable object handed to whoever needs it, never a global.

use bcrypt::BcryptError;

#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// `cost` is the bcrypt work factor (valid range 4..=31, validated by
    /// `Config`).
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn hash(&self, plain: &str) -> Result<String, BcryptError> {
        bcrypt::hash(plain, self.cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum cost keeps the tests fast.
    fn hasher() -> PasswordHasher {
        PasswordHasher::new(4)
    }

    #[test]
    fn hash_verifies_against_original_password() {
        let hashed = hasher().hash("correct horse battery staple").unwrap();
        assert_ne!(hashed, "correct horse battery staple");
        assert!(bcrypt::verify("correct horse battery staple", &hashed).unwrap());
    }

    #[test]
    fn wrong_password_does_not_verify() {
        let hashed = hasher().hash("secret-one").unwrap();
        assert!(!bcrypt::verify("secret-two", &hashed).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let a = hasher().hash("same-input").unwrap();
        let b = hasher().hash("same-input").unwrap();
        assert_ne!(a, b);
    }
}
