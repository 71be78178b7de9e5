//! Route handlers. Request parsing lives here; logic lives in the use cases.

mod sign_in;
mod sign_up;
mod volunteer_shift;

pub use sign_in::sign_in;
pub use sign_up::sign_up;
pub use volunteer_shift::{ShiftPreviewRequest, ShiftPreviewResponse, preview_shift};

use secrecy::Secret;
use serde::{Deserialize, Serialize};

/// Body for both sign-in and sign-up
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub email: String,
}
