use mentor_match::config::{EnvConfig, MailConfig, CONFIG};
use mentor_match::db::postgres_service::PostgresService;
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        // Initialize config for tests
        let _ = CONFIG.set(get_test_config());

        let postgres = Postgres::default();
        let container = postgres.start().await.expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container.get_host_port_ipv4(5432).await.expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "test".to_string(), // Not used in tests
        admin_key: "test_admin_key".to_string(),
        mail: MailConfig {
            api_key: "test_resend_key".to_string(),
            // Nothing listens here, so notification sends fail fast and get discarded
            endpoint: "http://127.0.0.1:1/emails".to_string(),
            from: "mentorship@test.example".to_string(),
        },
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use mentor_match::types::user::RUserCreate;

    pub fn sample_user() -> RUserCreate {
        RUserCreate {
            name: "Test Speaker".to_string(),
            email: "speaker@example.com".to_string(),
        }
    }

    pub fn sample_user_with_email(email: &str) -> RUserCreate {
        RUserCreate {
            name: "Test Speaker".to_string(),
            email: email.to_string(),
        }
    }
}
