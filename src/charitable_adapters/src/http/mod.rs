pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::{Router, routing::post};
use charitable_core::AuthGateway;
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ErrorResponse};

/// Build the HTTP router around an auth gateway.
pub fn router<G>(gateway: G) -> Router
where
    G: AuthGateway + 'static,
{
    Router::new()
        .route("/auth/sign-in", post(routes::sign_in::<G>))
        .route("/auth/sign-up", post(routes::sign_up::<G>))
        .route("/volunteer/shifts/preview", post(routes::preview_shift))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(gateway))
}
