use base64::{engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD}, Engine as _};
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::{OsRng, RngCore};
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::token::TokenType;

pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

pub fn new_token(kind: TokenType) -> String {
    let mut buf = [0u8; 32];
    let mut rng = OsRng;
    rng.fill_bytes(&mut buf);
    format!("{}_{}", kind.prefix(), URL_SAFE_NO_PAD.encode(buf))
}

/// The access token handed to clients: base64("{user_id}:{secret}").
/// Only the argon2 hash of the secret is stored.
pub fn construct_token(user_id: &Uuid, secret: &str) -> String {
    STANDARD.encode(format!("{}:{}", user_id, secret))
}

pub fn extract_token_parts(token: &str) -> Option<(Uuid, String)> {
    let decoded = STANDARD.decode(token).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user_id, secret) = decoded.split_once(':')?;
    Some((Uuid::parse_str(user_id).ok()?, secret.to_string()))
}

pub fn encrypt(token: &str) -> Result<String, argon2::password_hash::Error> {
    let mut rng = OsRng;
    let salt = SaltString::generate(&mut rng);
    let hash = Argon2::default().hash_password(token.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify(token: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default().verify_password(token.as_bytes(), &parsed).is_ok())
}

/// Resolve the bearer token to a verified user id. Route handlers thread
/// this id explicitly into every workflow call; nothing below the route
/// layer reads authentication state.
pub async fn resolve_acting_user(db: &PostgresService, token: &str) -> Result<Uuid, AppError> {
    let (user_id, secret) = extract_token_parts(token).ok_or(AppError::Unauthorized)?;
    let user = db
        .get_user_by_id(&user_id)
        .await
        .map_err(|_| AppError::Unauthorized)?;
    match verify(&secret, &user.token) {
        Ok(true) => Ok(user_id),
        _ => Err(AppError::Unauthorized),
    }
}

pub async fn token_valid(db: &PostgresService, token: &str) -> bool {
    resolve_acting_user(db, token).await.is_ok()
}
