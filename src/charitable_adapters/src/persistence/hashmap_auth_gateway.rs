use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use charitable_core::{AuthErrorCode, AuthGateway, Email, Password};

/// In-memory account store for local runs and tests.
#[derive(Default, Clone)]
pub struct HashMapAuthGateway {
    accounts: Arc<RwLock<HashMap<Email, Password>>>,
}

impl HashMapAuthGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accounts<I>(accounts: I) -> Self
    where
        I: IntoIterator<Item = (Email, Password)>,
    {
        Self {
            accounts: Arc::new(RwLock::new(accounts.into_iter().collect())),
        }
    }
}

#[async_trait::async_trait]
impl AuthGateway for HashMapAuthGateway {
    async fn authenticate(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<(), AuthErrorCode> {
        let accounts = self.accounts.read().await;

        // Unknown email and wrong password look the same to the caller
        match accounts.get(email) {
            Some(stored) if stored.matches(password) => Ok(()),
            _ => Err(AuthErrorCode::InvalidCredentials),
        }
    }

    async fn register(&self, email: Email, password: Password) -> Result<(), AuthErrorCode> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&email) {
            return Err(AuthErrorCode::EmailTaken);
        }
        accounts.insert(email, password);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::Secret;

    fn email(raw: &str) -> Email {
        Email::try_from(Secret::from(raw.to_string())).unwrap()
    }

    fn password(raw: &str) -> Password {
        Password::try_from(Secret::from(raw.to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_register_then_authenticate() {
        let gateway = HashMapAuthGateway::new();
        gateway
            .register(email("donor@example.org"), password("password123"))
            .await
            .unwrap();

        assert_eq!(
            gateway
                .authenticate(&email("donor@example.org"), &password("password123"))
                .await,
            Ok(())
        );
    }

    #[tokio::test]
    async fn test_duplicate_registration() {
        let gateway =
            HashMapAuthGateway::with_accounts([(email("donor@example.org"), password("password123"))]);

        assert_eq!(
            gateway
                .register(email("donor@example.org"), password("different1"))
                .await,
            Err(AuthErrorCode::EmailTaken)
        );
    }

    #[tokio::test]
    async fn test_bad_credentials() {
        let gateway =
            HashMapAuthGateway::with_accounts([(email("donor@example.org"), password("password123"))]);

        assert_eq!(
            gateway
                .authenticate(&email("donor@example.org"), &password("password999"))
                .await,
            Err(AuthErrorCode::InvalidCredentials)
        );
        assert_eq!(
            gateway
                .authenticate(&email("nobody@example.org"), &password("password123"))
                .await,
            Err(AuthErrorCode::InvalidCredentials)
        );
    }
}
