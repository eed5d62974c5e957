use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::mentorship::{ListMentorshipsQuery, MentorshipWithRelations, PendingCounts};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::token::resolve_acting_user;
use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

#[get("")]
async fn list_mentorships(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<ListMentorshipsQuery>,
    auth: BearerAuth,
) -> ApiResult<Vec<entity::mentorship::Model>> {
    let user_id = resolve_acting_user(&db, auth.token()).await?;

    let mentorships = db
        .list_mentorships_for_user(user_id, query.role, query.status, query.include_terminal)
        .await?;

    Ok(ApiResponse::Ok(mentorships))
}

#[get("/pending/counts")]
async fn pending_counts(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    auth: BearerAuth,
) -> ApiResult<PendingCounts> {
    let user_id = resolve_acting_user(&db, auth.token()).await?;

    Ok(ApiResponse::Ok(db.count_pending_for_user(user_id).await?))
}

#[get("/shared/{user_id}")]
async fn shared_expertise(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    auth: BearerAuth,
) -> ApiResult<Vec<entity::expertise_area::Model>> {
    let acting_user = resolve_acting_user(&db, auth.token()).await?;
    let other = path.into_inner();

    Ok(ApiResponse::Ok(db.shared_expertise(acting_user, other).await?))
}

#[get("/{id}")]
async fn get_mentorship(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    auth: BearerAuth,
) -> ApiResult<MentorshipWithRelations> {
    let acting_user = resolve_acting_user(&db, auth.token()).await?;

    let detail = db.get_mentorship_with_relationships(path.into_inner()).await?;
    if detail.mentor.id != acting_user && detail.mentee.id != acting_user {
        return Err(AppError::Forbidden);
    }

    Ok(ApiResponse::Ok(detail))
}
