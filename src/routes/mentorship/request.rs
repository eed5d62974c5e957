use crate::types::error::AppError;
use crate::types::mentorship::{DBMentorshipRequest, RMentorshipRequest};
use crate::types::response::{ApiResponse, ApiResult};
use crate::{db::postgres_service::PostgresService, utils::mail::mail_mentorship_request};
use crate::utils::token::resolve_acting_user;
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

/*
New speakers pick an experienced speaker and send a mentorship request,
optionally scoped to focus areas. The mentor gets emailed and can accept
or decline; until then the pair has exactly one open record.
*/

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub id: String,
    pub message: String,
}

#[post("/request")]
async fn request_mentorship(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    data: web::Json<RMentorshipRequest>,
    auth: BearerAuth,
) -> ApiResult<Response> {
    let mentee_id = resolve_acting_user(&db, auth.token()).await?;

    let mentor_id = match uuid::Uuid::from_str(&data.mentor_id) {
        Ok(id) => id,
        Err(_) => {
            return Err(AppError::BadRequest(
                "Invalid mentor ID. Failed UUID parse.".to_string(),
            ))
        }
    };

    let mentorship = db
        .create_mentorship(DBMentorshipRequest {
            mentor_id,
            mentee_id,
            mentorship_type: data.mentorship_type.unwrap_or_default(),
            request_message: data.message.clone(),
            meeting_frequency: data.meeting_frequency.clone(),
            focus_area_ids: data.focus_area_ids.clone().unwrap_or_default(),
        })
        .await?;
    info!("Created mentorship request {}", mentorship.id);

    let mentor = db.get_user_by_id(&mentor_id).await?;
    let mentee = db.get_user_by_id(&mentee_id).await?;

    mail_mentorship_request(&mentor.email, &mentee.name, data.message.as_deref())
        .await
        .ok();

    Ok(ApiResponse::Created(Response {
        id: mentorship.id.to_string(),
        message: "Mentorship request sent.".to_string(),
    }))
}
