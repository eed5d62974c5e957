use serde::{Serialize, Deserialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct RUserCreate {
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize)]
pub struct DBUserCreate {
    pub name: String,
    pub email: String,
    pub token: String,
}

#[derive(Serialize, Deserialize)]
pub struct UserCreateRes {
    pub id: Uuid,
    pub token: String,
}

#[derive(Serialize, Deserialize)]
pub struct UserRegenerateTokenRes {
    pub message: String,
}

/// User projection safe to put in API responses (no token hash).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<entity::user::Model> for PublicUser {
    fn from(u: entity::user::Model) -> Self {
        PublicUser { id: u.id, name: u.name, email: u.email }
    }
}
