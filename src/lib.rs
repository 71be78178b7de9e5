//! # Charitable - volunteer and donation platform core
//!
//! This is a facade crate that re-exports the public APIs of the workspace:
//! volunteer-hour validation, the auth error catalog, the sign-in / sign-up
//! use cases and the HTTP adapters around them.
//!
//! ## Structure
//!
//! - **Core domain types**: `VolunteerHours`, `Skill`, `AuthError`, `Email`, etc.
//! - **Ports**: `AuthGateway`
//! - **Use cases**: `SignInUseCase`, `SignUpUseCase`
//! - **Adapters**: `HashMapAuthGateway`, the axum `router`, settings and tracing

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use charitable_core::*;
}

pub use charitable_core::{
    AuthError, AuthErrorCode, AuthGateway, CodedError, Email, Password, Skill, VolunteerHours,
    VolunteerShift, auth_error_message_for, create_auth_error, format_volunteer_time,
    get_auth_error_message, is_valid_skill, validate_volunteer_hours,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use charitable_application::*;
}

pub use charitable_application::{SignInUseCase, SignUpUseCase};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP router, routes and error responses
    pub mod http {
        pub use charitable_adapters::http::*;
    }

    /// In-memory gateway implementations
    pub mod persistence {
        pub use charitable_adapters::persistence::*;
    }

    /// Configuration
    pub mod config {
        pub use charitable_adapters::config::*;
    }
}

pub use charitable_adapters::{persistence::HashMapAuthGateway, router, telemetry};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing `AuthGateway`
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
pub use http;
