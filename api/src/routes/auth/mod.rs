//! Authentication routes.

mod login;
mod register;
mod send_otp;
mod verify_otp;

pub use login::login;
pub use register::register;
pub use send_otp::send_otp;
pub use verify_otp::verify_otp;
