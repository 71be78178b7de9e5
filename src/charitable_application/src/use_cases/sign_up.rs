use charitable_core::{AuthError, AuthGateway, Email, Password, create_auth_error};

/// Sign-up use case - registers a new account through the gateway
pub struct SignUpUseCase<'a, G>
where
    G: AuthGateway + ?Sized,
{
    gateway: &'a G,
}

impl<'a, G> SignUpUseCase<'a, G>
where
    G: AuthGateway + ?Sized,
{
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Execute the sign-up use case
    ///
    /// # Returns
    /// The registered email, or an `AuthError` such as `email_taken`
    #[tracing::instrument(name = "SignUpUseCase::execute", skip(self, password))]
    pub async fn execute(&self, email: Email, password: Password) -> Result<Email, AuthError> {
        self.gateway
            .register(email.clone(), password)
            .await
            .map_err(|code| {
                tracing::warn!(%code, "sign-up rejected");
                create_auth_error(code)
            })?;

        Ok(email)
    }
}
