use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{coded_error::CodedError, email::EmailError, password::PasswordError};

/// Message shown when a code is not in the catalog.
pub const FALLBACK_AUTH_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Reason an authentication attempt failed.
///
/// Serialized as its snake_case name, e.g. `"invalid_credentials"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthErrorCode {
    InvalidCredentials,
    EmailTaken,
    WeakPassword,
    InvalidEmail,
    NetworkError,
}

impl AuthErrorCode {
    pub const ALL: [AuthErrorCode; 5] = [
        AuthErrorCode::InvalidCredentials,
        AuthErrorCode::EmailTaken,
        AuthErrorCode::WeakPassword,
        AuthErrorCode::InvalidEmail,
        AuthErrorCode::NetworkError,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthErrorCode::InvalidCredentials => "invalid_credentials",
            AuthErrorCode::EmailTaken => "email_taken",
            AuthErrorCode::WeakPassword => "weak_password",
            AuthErrorCode::InvalidEmail => "invalid_email",
            AuthErrorCode::NetworkError => "network_error",
        }
    }

    pub fn message(&self) -> &'static str {
        get_auth_error_message(*self)
    }
}

impl fmt::Display for AuthErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown auth error code: {0}")]
pub struct UnknownAuthErrorCode(pub String);

impl FromStr for AuthErrorCode {
    type Err = UnknownAuthErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AuthErrorCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownAuthErrorCode(s.to_string()))
    }
}

/// User-facing message for an auth error code.
pub fn get_auth_error_message(code: AuthErrorCode) -> &'static str {
    match code {
        AuthErrorCode::InvalidCredentials => "Invalid email or password",
        AuthErrorCode::EmailTaken => "This email is already registered",
        AuthErrorCode::WeakPassword => "Password must be at least 8 characters long",
        AuthErrorCode::InvalidEmail => "Please enter a valid email address",
        AuthErrorCode::NetworkError => "Network error. Please check your connection",
    }
}

/// Message lookup for a code received as text, e.g. from an identity provider.
///
/// Unknown codes get [`FALLBACK_AUTH_ERROR_MESSAGE`].
pub fn auth_error_message_for(raw_code: &str) -> &'static str {
    raw_code
        .parse::<AuthErrorCode>()
        .map_or(FALLBACK_AUTH_ERROR_MESSAGE, get_auth_error_message)
}

/// An auth failure ready to be shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{message}")]
pub struct AuthError {
    message: &'static str,
    code: AuthErrorCode,
}

impl AuthError {
    pub fn new(code: AuthErrorCode) -> Self {
        Self {
            message: get_auth_error_message(code),
            code,
        }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn code(&self) -> AuthErrorCode {
        self.code
    }
}

pub fn create_auth_error(code: AuthErrorCode) -> AuthError {
    AuthError::new(code)
}

impl From<AuthErrorCode> for AuthError {
    fn from(code: AuthErrorCode) -> Self {
        AuthError::new(code)
    }
}

impl From<EmailError> for AuthError {
    fn from(_: EmailError) -> Self {
        AuthError::new(AuthErrorCode::InvalidEmail)
    }
}

impl From<PasswordError> for AuthError {
    fn from(_: PasswordError) -> Self {
        AuthError::new(AuthErrorCode::WeakPassword)
    }
}

impl CodedError for AuthError {
    fn error_code(&self) -> Option<&str> {
        Some(self.code.as_str())
    }

    fn error_message(&self) -> &str {
        self.message
    }
}
