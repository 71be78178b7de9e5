pub mod domain;
pub mod ports;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

// Re-export commonly used types for convenience
pub use domain::{
    auth_error::{
        AuthError, AuthErrorCode, FALLBACK_AUTH_ERROR_MESSAGE, UnknownAuthErrorCode,
        auth_error_message_for, create_auth_error, get_auth_error_message,
    },
    coded_error::CodedError,
    email::{Email, EmailError},
    password::{MIN_PASSWORD_LENGTH, Password, PasswordError},
    skill::{Skill, SkillError, is_valid_skill},
    volunteer_hours::{
        MAX_DAILY_HOURS, VolunteerHours, VolunteerHoursError, format_volunteer_time,
        validate_volunteer_hours,
    },
    volunteer_shift::{VolunteerShift, VolunteerShiftError},
};

pub use ports::auth_gateway::AuthGateway;
