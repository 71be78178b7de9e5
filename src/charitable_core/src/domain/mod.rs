pub mod auth_error;
pub mod coded_error;
pub mod email;
pub mod password;
pub mod skill;
pub mod volunteer_hours;
pub mod volunteer_shift;
