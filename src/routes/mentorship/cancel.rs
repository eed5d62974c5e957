use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::mail::mail_mentorship_cancelled;
use crate::utils::token::resolve_acting_user;
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

#[post("/{id}/cancel")]
async fn cancel_mentorship(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    auth: BearerAuth,
) -> ApiResult<Response> {
    let acting_user = resolve_acting_user(&db, auth.token()).await?;

    let cancelled = db.cancel_mentorship(path.into_inner(), acting_user).await?;

    // Notify the other party, not the one who cancelled.
    let (counterpart_id, acting_id) = if cancelled.mentor_id == acting_user {
        (cancelled.mentee_id, cancelled.mentor_id)
    } else {
        (cancelled.mentor_id, cancelled.mentee_id)
    };
    let counterpart = db.get_user_by_id(&counterpart_id).await?;
    let acting = db.get_user_by_id(&acting_id).await?;

    mail_mentorship_cancelled(&counterpart.email, &acting.name)
        .await
        .ok();

    Ok(ApiResponse::Ok(Response {
        message: "Mentorship cancelled.".to_string(),
    }))
}
