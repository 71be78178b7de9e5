use charitable_core::{AuthError, AuthGateway, Email, Password, create_auth_error};

/// Sign-in use case - checks credentials against the gateway
pub struct SignInUseCase<'a, G>
where
    G: AuthGateway + ?Sized,
{
    gateway: &'a G,
}

impl<'a, G> SignInUseCase<'a, G>
where
    G: AuthGateway + ?Sized,
{
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Execute the sign-in use case
    ///
    /// # Returns
    /// The signed-in email, or an `AuthError` built from the gateway's code
    #[tracing::instrument(name = "SignInUseCase::execute", skip(self, password))]
    pub async fn execute(&self, email: Email, password: Password) -> Result<Email, AuthError> {
        match self.gateway.authenticate(&email, &password).await {
            Ok(()) => Ok(email),
            Err(code) => {
                tracing::warn!(%code, "sign-in rejected");
                Err(create_auth_error(code))
            }
        }
    }
}
