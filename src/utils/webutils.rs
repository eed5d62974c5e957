use actix_web::{dev::ServiceRequest, error::ErrorUnauthorized};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::config::config;
use crate::utils::token::extract_token_parts;

/// Cheap bearer gate: the token must at least parse. Handlers verify the
/// secret against the stored hash before trusting the user id.
pub async fn validate_token(req: ServiceRequest, credentials: BearerAuth) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    if extract_token_parts(credentials.token()).is_some() {
        Ok(req)
    } else {
        Err((ErrorUnauthorized("Invalid token").into(), req))
    }
}

pub async fn validate_admin_token(req: ServiceRequest, credentials: BearerAuth) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    if credentials.token() == config().admin_key {
        Ok(req)
    } else {
        Err((ErrorUnauthorized("Invalid token").into(), req))
    }
}
