pub mod crypto;
pub mod schemas;
pub mod token;
