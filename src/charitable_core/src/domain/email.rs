use std::{
    hash::{Hash, Hasher},
    sync::LazyLock,
};

use regex::Regex;
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Email address is malformed")]
    Malformed,
}

/// An email address that passed the format check.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl TryFrom<Secret<String>> for Email {
    type Error = EmailError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if !EMAIL_PATTERN.is_match(value.expose_secret()) {
            return Err(EmailError::Malformed);
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, faker::internet::en::SafeEmail};

    fn parse(raw: &str) -> Result<Email, EmailError> {
        Email::try_from(Secret::from(raw.to_string()))
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        for raw in ["", "volunteer", "@example.com", "name@", "name@host", "a b@c.org"] {
            assert_eq!(parse(raw), Err(EmailError::Malformed), "{raw:?}");
        }
    }

    #[test]
    fn test_accepts_generated_addresses() {
        for _ in 0..20 {
            let raw: String = SafeEmail().fake();
            assert!(parse(&raw).is_ok(), "{raw}");
        }
    }

    #[test]
    fn test_equality_uses_address() {
        assert_eq!(
            parse("donor@example.org").unwrap(),
            parse("donor@example.org").unwrap()
        );
        assert_ne!(
            parse("donor@example.org").unwrap(),
            parse("other@example.org").unwrap()
        );
    }
}
