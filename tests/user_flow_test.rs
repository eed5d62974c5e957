mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, test_data, TestContext};

#[tokio::test]
async fn test_create_user_and_validate_token() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/user/create")
        .insert_header(("Authorization", format!("Bearer {}", client.admin_token())))
        .set_json(test_data::sample_user())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().unwrap().to_string();
    assert!(!token.is_empty());

    let user = ctx.db.get_user_by_email("speaker@example.com").await.unwrap();
    assert_eq!(user.name, "Test Speaker");
    // Only the hash is at rest, never the secret
    assert!(user.token.starts_with("$argon2"));

    let req = test::TestRequest::post()
        .uri("/validate")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_user_requires_admin_key() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_user_id, user_token) = client.create_test_user("Regular Speaker").await;

    let req = test::TestRequest::post()
        .uri("/user/create")
        .insert_header(("Authorization", format!("Bearer {}", user_token)))
        .set_json(test_data::sample_user_with_email("sneaky@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_duplicate_email_conflict() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let payload = test_data::sample_user_with_email("taken@example.com");

    let req = test::TestRequest::post()
        .uri("/user/create")
        .insert_header(("Authorization", format!("Bearer {}", client.admin_token())))
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/user/create")
        .insert_header(("Authorization", format!("Bearer {}", client.admin_token())))
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_regenerate_token_invalidates_old_token() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (user_id, old_token) = client.create_test_user("Rotating Speaker").await;
    let old_hash = ctx.db.get_user_by_id(&user_id).await.unwrap().token;

    let req = test::TestRequest::post()
        .uri("/user/regenerate")
        .insert_header(("Authorization", format!("Bearer {}", old_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let new_hash = ctx.db.get_user_by_id(&user_id).await.unwrap().token;
    assert_ne!(new_hash, old_hash);

    // The rotated-out token no longer authenticates
    let req = test::TestRequest::post()
        .uri("/validate")
        .insert_header(("Authorization", format!("Bearer {}", old_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_validate_rejects_garbage_token() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/validate")
        .insert_header(("Authorization", "Bearer not-even-base64"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_needs_no_auth() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
