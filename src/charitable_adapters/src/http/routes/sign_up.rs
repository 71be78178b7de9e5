use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use charitable_application::SignUpUseCase;
use charitable_core::{AuthError, AuthGateway, Email, Password};
use secrecy::ExposeSecret;

use super::{CredentialsRequest, SessionResponse};
use crate::http::error::ApiError;

#[tracing::instrument(name = "Sign up", skip(gateway, request))]
pub async fn sign_up<G>(
    State(gateway): State<Arc<G>>,
    Json(request): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError>
where
    G: AuthGateway + 'static,
{
    let email = Email::try_from(request.email).map_err(AuthError::from)?;
    let password = Password::try_from(request.password).map_err(AuthError::from)?;

    let email = SignUpUseCase::new(gateway.as_ref())
        .execute(email, password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            email: email.as_ref().expose_secret().clone(),
        }),
    ))
}
