//! Assertion helpers shared by the workspace's tests.

use crate::{AuthErrorCode, CodedError, get_auth_error_message};

/// Asserts that `error` carries `expected` and its catalog message.
#[track_caller]
pub fn assert_error_banner<E>(error: &E, expected: AuthErrorCode)
where
    E: CodedError + ?Sized,
{
    assert_eq!(error.error_code(), Some(expected.as_str()));
    assert_eq!(error.error_message(), get_auth_error_message(expected));
}
