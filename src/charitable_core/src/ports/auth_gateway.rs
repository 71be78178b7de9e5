use async_trait::async_trait;

use crate::domain::{auth_error::AuthErrorCode, email::Email, password::Password};

/// Port to whatever actually checks credentials.
///
/// Implementations report failures as an [`AuthErrorCode`]; turning the code
/// into a user-facing error is left to the caller.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn authenticate(&self, email: &Email, password: &Password)
    -> Result<(), AuthErrorCode>;

    async fn register(&self, email: Email, password: Password) -> Result<(), AuthErrorCode>;
}
