use crate::db::postgres_service::PostgresService;
use crate::types::mentorship::RMentorshipRespond;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::mail::{mail_request_accepted, mail_request_declined};
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

#[post("/{id}/respond")]
async fn respond_to_request(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    data: web::Json<RMentorshipRespond>,
    auth: BearerAuth,
) -> ApiResult<Response> {
    let acting_user = resolve_acting_user(&db, auth.token()).await?;
    let mentorship_id = path.into_inner();

    let updated = db
        .respond_to_mentorship(mentorship_id, acting_user, data.accepted, data.message.clone())
        .await?;

    let mentee = db.get_user_by_id(&updated.mentee_id).await?;
    let mentor = db.get_user_by_id(&updated.mentor_id).await?;

    if data.accepted {
        mail_request_accepted(&mentee.email, &mentor.name).await.ok();
    } else {
        mail_request_declined(&mentee.email, &mentor.name, data.message.as_deref())
            .await
            .ok();
    }

    let message = if data.accepted {
        "Mentorship request accepted. The mentorship is now active."
    } else {
        "Mentorship request declined."
    };
    Ok(ApiResponse::Ok(Response {
        message: message.to_string(),
    }))
}
