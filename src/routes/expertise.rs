use actix_web::{get, post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::expertise::{RExpertiseAssign, RExpertiseCreate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::token::resolve_acting_user;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub id: String,
    pub message: String,
}

#[post("")]
async fn create_area(
    _req: actix_web::HttpRequest,
    _auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    data: web::Json<RExpertiseCreate>,
) -> ApiResult<Response> {
    let id = db.create_expertise_area(data.name.clone()).await?;

    Ok(ApiResponse::Created(Response {
        id: id.to_string(),
        message: format!("Expertise area {} has been created.", data.name),
    }))
}

#[derive(Serialize, Deserialize)]
pub struct AssignResponse {
    pub message: String,
}

#[post("")]
async fn assign_expertise(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    data: web::Json<RExpertiseAssign>,
    auth: BearerAuth,
) -> ApiResult<AssignResponse> {
    let user_id = resolve_acting_user(&db, auth.token()).await?;

    db.assign_user_expertise(user_id, data.expertise_area_id).await?;

    Ok(ApiResponse::Ok(AssignResponse {
        message: "Expertise area added to your profile.".to_string(),
    }))
}

#[get("")]
async fn list_areas(
    _req: actix_web::HttpRequest,
    _auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<Vec<entity::expertise_area::Model>> {
    Ok(ApiResponse::Ok(db.list_expertise_areas().await?))
}
