//! Page components

mod appointments;
mod dashboard;
mod login;
mod not_found;
mod patients;

pub use appointments::*;
pub use dashboard::*;
pub use login::*;
pub use not_found::*;
pub use patients::*;
