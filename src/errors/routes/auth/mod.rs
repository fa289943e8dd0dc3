pub mod login;
pub mod signup;

pub use login::LoginError;
pub use signup::SignupError;
