// Contract tests for the /api/customers endpoints.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{test, web, App};
use helpers::{build_services, test_data};
use serde_json::{json, Value};

use creditline::modules::customers::controllers::customer_controller;

macro_rules! spawn_app {
    ($customer_service:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($customer_service.clone()))
                .service(web::scope("/api").configure(customer_controller::configure)),
        )
        .await
    };
}

#[actix_web::test]
async fn test_registering_a_customer_returns_201() {
    let (customer_service, _) = build_services();
    let app = spawn_app!(customer_service);

    let req = test::TestRequest::post()
        .uri("/api/customers")
        .set_json(test_data::register_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["id"].as_i64().is_some());
    assert_eq!(body["firstName"], "Camila");
    assert_eq!(body["lastName"], "Souza");
    assert_eq!(body["cpf"], "322.862.690-33");
    assert_eq!(body["email"], "camila@email.com");
    assert_eq!(body["income"], "1000.0");
    assert_eq!(body["zipCode"], "12345");
    assert_eq!(body["street"], "Rua da Cavalhada");
    // The password never appears in any view
    assert!(body.get("password").is_none());
    assert!(body.get("passwordHash").is_none());
}

#[actix_web::test]
async fn test_registering_a_duplicate_cpf_returns_409() {
    let (customer_service, _) = build_services();
    let app = spawn_app!(customer_service);

    let req = test::TestRequest::post()
        .uri("/api/customers")
        .set_json(test_data::register_payload())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    let req = test::TestRequest::post()
        .uri("/api/customers")
        .set_json(test_data::register_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Conflict! Consult the documentation");
    assert_eq!(body["status"], 409);
    assert_eq!(body["exception"], "DataIntegrityViolation");
    assert!(body["details"]["cause"].is_string());
}

#[actix_web::test]
async fn test_registering_an_invalid_cpf_returns_400() {
    let (customer_service, _) = build_services();
    let app = spawn_app!(customer_service);

    let mut payload = test_data::register_payload();
    payload["cpf"] = json!("123.456.789-00");

    let req = test::TestRequest::post()
        .uri("/api/customers")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Bad Request! Consult the documentation");
    assert_eq!(body["exception"], "BusinessRuleViolation");
}

#[actix_web::test]
async fn test_getting_a_customer_by_id_returns_200() {
    let (customer_service, _) = build_services();
    let app = spawn_app!(customer_service);

    let req = test::TestRequest::post()
        .uri("/api/customers")
        .set_json(test_data::register_payload())
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/api/customers/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], id);
    assert_eq!(body["email"], "camila@email.com");
}

#[actix_web::test]
async fn test_getting_an_unknown_customer_returns_400() {
    let (customer_service, _) = build_services();
    let app = spawn_app!(customer_service);

    let req = test::TestRequest::get()
        .uri("/api/customers/999")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Bad Request! Consult the documentation");
    assert_eq!(body["status"], 400);
    assert_eq!(body["exception"], "BusinessRuleViolation");
    assert_eq!(body["details"]["cause"], "Id 999 not found");
}

#[actix_web::test]
async fn test_updating_a_customer_returns_200() {
    let (customer_service, _) = build_services();
    let app = spawn_app!(customer_service);

    let req = test::TestRequest::post()
        .uri("/api/customers")
        .set_json(test_data::register_payload())
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/customers?customerId={}", id))
        .set_json(json!({
            "firstName": "CamilaUpdated",
            "income": "5000.0"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["firstName"], "CamilaUpdated");
    assert_eq!(body["income"], "5000.0");
    // Untouched fields survive the patch
    assert_eq!(body["lastName"], "Souza");
    assert_eq!(body["street"], "Rua da Cavalhada");
}

#[actix_web::test]
async fn test_deleting_a_customer_returns_204() {
    let (customer_service, _) = build_services();
    let app = spawn_app!(customer_service);

    let req = test::TestRequest::post()
        .uri("/api/customers")
        .set_json(test_data::register_payload())
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/customers/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 204);

    let req = test::TestRequest::get()
        .uri(&format!("/api/customers/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
