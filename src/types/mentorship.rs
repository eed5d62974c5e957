use serde::{Deserialize, Serialize};
use uuid::Uuid;

use entity::mentorship::{MentorshipStatus, MentorshipType};
use crate::types::user::PublicUser;

/// Which side of a mentorship a listing query refers to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MentorshipRole {
    Mentor,
    Mentee,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RMentorshipRequest {
    pub mentor_id: String,
    pub mentorship_type: Option<MentorshipType>,
    pub message: Option<String>,
    pub focus_area_ids: Option<Vec<Uuid>>,
    pub meeting_frequency: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RMentorshipRespond {
    pub accepted: bool,
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RMentorshipComplete {
    pub notes: Option<String>,
}

pub struct DBMentorshipRequest {
    pub mentor_id: Uuid,
    pub mentee_id: Uuid,
    pub mentorship_type: MentorshipType,
    pub request_message: Option<String>,
    pub meeting_frequency: Option<String>,
    pub focus_area_ids: Vec<Uuid>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ListMentorshipsQuery {
    pub role: MentorshipRole,
    pub status: Option<MentorshipStatus>,
    // Terminal records are opt-in; open records are what "my mentorships" means.
    #[serde(default)]
    pub include_terminal: bool,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct PendingCounts {
    pub outbound: u64,
    pub inbound: u64,
}

#[derive(Serialize, Debug)]
pub struct MentorshipWithRelations {
    pub mentorship: entity::mentorship::Model,
    pub mentor: PublicUser,
    pub mentee: PublicUser,
    pub focus_areas: Vec<entity::expertise_area::Model>,
}
