use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::error::Result;
use crate::middleware::auth::Claims;

/// Signs an HS256 bearer token for the given user.
pub fn issue(username: &str, role: &str, ttl_hours: i64, secret: &str) -> Result<String> {
    let exp = Utc::now() + Duration::hours(ttl_hours);
    let claims = Claims {
        sub: username.to_string(),
        exp: exp.timestamp() as usize,
        role: Some(role.to_string()),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}

/// Decodes and validates signature and expiry.
pub fn verify(token: &str, secret: &str) -> Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;
    Ok(data.claims)
}
