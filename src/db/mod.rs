pub mod postgres_service;
pub mod user;
pub mod mentorship;
pub mod expertise;
