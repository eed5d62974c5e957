use crate::db::postgres_service::PostgresService;
use crate::types::mentorship::RMentorshipComplete;
use crate::types::response::{ApiResponse, ApiResult};
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

#[post("/{id}/complete")]
async fn complete_mentorship(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    data: web::Json<RMentorshipComplete>,
    auth: BearerAuth,
) -> ApiResult<Response> {
    let acting_user = resolve_acting_user(&db, auth.token()).await?;

    db.complete_mentorship(path.into_inner(), acting_user, data.notes.clone())
        .await?;

    Ok(ApiResponse::Ok(Response {
        message: "Mentorship marked as completed.".to_string(),
    }))
}
