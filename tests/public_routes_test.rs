mod common;

use actix_web::{test, web, App};
use serde_json::json;
use serial_test::serial;

use common::TestApp;

#[actix_rt::test]
#[serial]
async fn test_health_check() {
    let app = test::init_service(TestApp::create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

#[actix_rt::test]
#[serial]
async fn test_root_endpoint() {
    let app = test::init_service(
        App::new().route("/", web::get().to(|| async { "TripTactix API is running" })),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = test::read_body(resp).await;
    assert_eq!(body, "TripTactix API is running");
}

#[actix_rt::test]
#[serial]
async fn test_signup_invalid_input() {
    let app = test::init_service(TestApp::create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(&json!({
            "email": "invalid-email",
            "password": common::get_test_password()
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
#[serial]
async fn test_signin_rejects_unknown_credentials() {
    let app = test::init_service(TestApp::create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/signin")
        .set_json(&json!({
            "email": common::get_test_email(),
            "password": "wrong-password"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_rt::test]
#[serial]
async fn test_reviews_listing_is_public() {
    let app = test::init_service(TestApp::create_app()).await;

    let req = test::TestRequest::get().uri("/api/reviews").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body.is_array());
}
