use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

// Claims carried by the login token, expiry is 7 days out
pub const TOKEN_VALIDITY_DAYS: i64 = 7;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: String,
    pub email: String,
    pub exp: u64,
}

pub fn generate_auth_token(
    user_id: String,
    email: String,
    secret: &[u8],
) -> Result<String, jsonwebtoken::errors::Error> {
    let exp = (Utc::now() + Duration::days(TOKEN_VALIDITY_DAYS)).timestamp() as u64;

    let claims = Claims {
        user_id,
        email,
        exp,
    };

    let header = Header::new(Algorithm::HS256);

    encode(&header, &claims, &EncodingKey::from_secret(secret))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, DecodingKey, Validation};

    const SECRET: &[u8] = b"test-signing-secret";

    #[test]
    fn token_round_trips_with_the_signing_secret() {
        let token = generate_auth_token(
            String::from("user-123"),
            String::from("test@example.com"),
            SECRET,
        )
        .unwrap();

        let decoded = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(SECRET),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap();

        assert_eq!(decoded.claims.user_id, "user-123");
        assert_eq!(decoded.claims.email, "test@example.com");
    }

    #[test]
    fn token_expiry_is_seven_days_out() {
        let token = generate_auth_token(
            String::from("user-123"),
            String::from("test@example.com"),
            SECRET,
        )
        .unwrap();

        let decoded = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(SECRET),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap();

        let expected = (Utc::now() + Duration::days(TOKEN_VALIDITY_DAYS)).timestamp() as u64;
        // Allow for the clock ticking between generation and the assertion
        assert!(decoded.claims.exp.abs_diff(expected) <= 5);
    }

    #[test]
    fn token_does_not_verify_with_another_secret() {
        let token = generate_auth_token(
            String::from("user-123"),
            String::from("test@example.com"),
            SECRET,
        )
        .unwrap();

        let result = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"some-other-secret"),
            &Validation::new(Algorithm::HS256),
        );

        assert!(result.is_err());
    }
}
