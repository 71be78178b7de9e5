pub mod use_cases;

pub use use_cases::{sign_in::SignInUseCase, sign_up::SignUpUseCase};
