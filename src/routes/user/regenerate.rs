use std::sync::Arc;

use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::db::postgres_service::PostgresService;
use crate::types::mail::SendEmail;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserRegenerateTokenRes;
use crate::utils::mail::send_email;
use crate::utils::token::{construct_token, resolve_acting_user};

#[post("")]
async fn regenerate(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    auth: BearerAuth,
) -> ApiResult<UserRegenerateTokenRes> {
    let user_id = resolve_acting_user(&db, auth.token()).await?;

    let new_secret = db.regenerate_user_token(&user_id).await?;
    let user = db.get_user_by_id(&user_id).await?;

    let key = construct_token(&user_id, &new_secret);

    let _ = send_email(SendEmail {
        to: vec![user.email],
        subject: "Mentorship access token reset.".to_string(),
        text: Some(format!(
            "Your access token has been reset. If this wasn't you, please contact support. \n \nYour new access key is: {}",
            key
        )),
        ..Default::default()
    })
    .await;

    Ok(ApiResponse::Ok(UserRegenerateTokenRes {
        message: "Regenerated user token, email has been sent with updated token.".to_string(),
    }))
}
