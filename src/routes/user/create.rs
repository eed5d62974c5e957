use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::TokenType;
use crate::types::user::{DBUserCreate, RUserCreate, UserCreateRes};
use crate::utils::token::{construct_token, encrypt, new_token};
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::types::error::AppError;

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    _auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserCreateRes> {
    let secret = new_token(TokenType::User);

    let encrypted = encrypt(&secret)
        .map_err(|_| AppError::Internal("Failed to encrypt token".to_string()))?;

    let user_id = db
        .create_user(DBUserCreate {
            name: body.name.clone(),
            email: body.email.clone(),
            token: encrypted,
        })
        .await?;

    let access_token = construct_token(&user_id, &secret);

    Ok(ApiResponse::Created(UserCreateRes {
        id: user_id,
        token: access_token,
    }))
}
