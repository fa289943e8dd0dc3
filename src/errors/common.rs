use derive_more::Display;

#[derive(Debug, Display)]
pub enum CommonError {
    Validation(validator::ValidationErrors),
    Database(surrealdb::Error),
    Hashing(argon2::password_hash::Error),
    Token(jsonwebtoken::errors::Error),
}
