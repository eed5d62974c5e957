use actix_web::{web, App};
use entity::mentorship::Model as MentorshipModel;
use mentor_match::{
    db::postgres_service::PostgresService,
    types::{mentorship::DBMentorshipRequest, token::TokenType, user::DBUserCreate},
    utils::token::{construct_token, encrypt, new_token},
};
use std::sync::Arc;
use uuid::Uuid;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(mentor_match::routes::configure_routes)
    }

    #[allow(dead_code)]
    pub fn admin_token(&self) -> String {
        mentor_match::config::config().admin_key.clone()
    }

    pub async fn create_test_user(&self, name: &str) -> (Uuid, String) {
        let secret = new_token(TokenType::User);
        let encrypted_token = encrypt(&secret).expect("Failed to encrypt token");
        let random_id = Uuid::new_v4();

        let user_id = self
            .db
            .create_user(DBUserCreate {
                name: name.to_string(),
                email: format!("user-{}@test.com", random_id),
                token: encrypted_token,
            })
            .await
            .expect("Failed to create user");

        let access_token = construct_token(&user_id, &secret);

        (user_id, access_token)
    }

    #[allow(dead_code)]
    pub async fn create_expertise_area(&self, name: &str) -> Uuid {
        self.db
            .create_expertise_area(name.to_string())
            .await
            .expect("Failed to create expertise area")
    }

    /// Open a pending request directly in the database, skipping the HTTP layer.
    #[allow(dead_code)]
    pub async fn open_request(&self, mentor_id: Uuid, mentee_id: Uuid) -> MentorshipModel {
        self.db
            .create_mentorship(DBMentorshipRequest {
                mentor_id,
                mentee_id,
                mentorship_type: Default::default(),
                request_message: None,
                meeting_frequency: None,
                focus_area_ids: vec![],
            })
            .await
            .expect("Failed to create mentorship request")
    }
}
