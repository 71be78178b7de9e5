/// Anything that can be rendered as an error banner: a short machine code
/// plus the text shown to the user.
pub trait CodedError {
    fn error_code(&self) -> Option<&str>;
    fn error_message(&self) -> &str;
}
