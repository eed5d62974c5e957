use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct RExpertiseCreate {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RExpertiseAssign {
    pub expertise_area_id: Uuid,
}
