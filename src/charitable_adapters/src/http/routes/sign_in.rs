use std::sync::Arc;

use axum::{Json, extract::State};
use charitable_application::SignInUseCase;
use charitable_core::{AuthError, AuthErrorCode, AuthGateway, Email, Password};
use secrecy::ExposeSecret;

use super::{CredentialsRequest, SessionResponse};
use crate::http::error::ApiError;

#[tracing::instrument(name = "Sign in", skip(gateway, request))]
pub async fn sign_in<G>(
    State(gateway): State<Arc<G>>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<SessionResponse>, ApiError>
where
    G: AuthGateway + 'static,
{
    let email = Email::try_from(request.email).map_err(AuthError::from)?;
    // The password policy is only disclosed on sign-up
    let password = Password::try_from(request.password)
        .map_err(|_| AuthError::new(AuthErrorCode::InvalidCredentials))?;

    let email = SignInUseCase::new(gateway.as_ref())
        .execute(email, password)
        .await?;

    Ok(Json(SessionResponse {
        email: email.as_ref().expose_secret().clone(),
    }))
}
