mod support;

use actix_web::test;
use fairway::state::app_state::AppState;
use serde_json::{json, Value};
use support::{create_test_app, round_json, valid_scores};

#[actix_web::test]
async fn create_happy_path() {
    let app = create_test_app(AppState::new()).await;

    let input = round_json("emerald links", "tim", &valid_scores());
    let req = test::TestRequest::post()
        .uri("/api/rounds")
        .set_json(&input)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("error").is_none());
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["course"], "emerald links");
    assert_eq!(body["data"]["username"], "tim");
    assert_eq!(body["data"]["scores"], json!(valid_scores()));
}

#[actix_web::test]
async fn list_returns_rounds_in_insertion_order() {
    let app = create_test_app(AppState::new()).await;

    for username in ["alice", "bob"] {
        let req = test::TestRequest::post()
            .uri("/api/rounds")
            .set_json(round_json("emerald links", username, &valid_scores()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 201);
    }

    let req = test::TestRequest::get().uri("/api/rounds").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    let data = body["data"].as_array().expect("data should be an array");
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["username"], "alice");
    assert_eq!(data[1]["username"], "bob");
    assert_eq!(data[0]["scores"].as_array().unwrap().len(), 18);
}

#[actix_web::test]
async fn get_one_happy_path() {
    let app = create_test_app(AppState::new()).await;

    let req = test::TestRequest::post()
        .uri("/api/rounds")
        .set_json(round_json("emerald links", "steve", &valid_scores()))
        .to_request();
    let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/api/rounds/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"], created["data"]);
}

#[actix_web::test]
async fn get_unknown_id_returns_404() {
    let app = create_test_app(AppState::new()).await;

    let req = test::TestRequest::get().uri("/api/rounds/999").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn replace_overwrites_every_field_and_keeps_id() {
    let app = create_test_app(AppState::new()).await;

    let req = test::TestRequest::post()
        .uri("/api/rounds")
        .set_json(round_json("emerald links", "tim", &valid_scores()))
        .to_request();
    let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let replacement = round_json("replaced course", "tim replacement", &[1; 18]);
    let req = test::TestRequest::put()
        .uri(&format!("/api/rounds/{id}"))
        .set_json(&replacement)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    let mut expected = replacement.clone();
    expected["id"] = json!(id);
    assert_eq!(body["data"], expected);

    // No residual fields from the original record.
    let req = test::TestRequest::get()
        .uri(&format!("/api/rounds/{id}"))
        .to_request();
    let fetched: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(fetched["data"], expected);
}

#[actix_web::test]
async fn patch_updates_single_fields() {
    let app = create_test_app(AppState::new()).await;

    let req = test::TestRequest::post()
        .uri("/api/rounds")
        .set_json(round_json("emerald links", "steve", &valid_scores()))
        .to_request();
    let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    // Patch course only; username and scores must survive.
    let req = test::TestRequest::patch()
        .uri(&format!("/api/rounds/{id}"))
        .set_json(json!({ "course": "updated course" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["course"], "updated course");
    assert_eq!(body["data"]["username"], "steve");
    assert_eq!(body["data"]["scores"], json!(valid_scores()));

    // Patch username only.
    let req = test::TestRequest::patch()
        .uri(&format!("/api/rounds/{id}"))
        .set_json(json!({ "username": "updated username" }))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["username"], "updated username");
    assert_eq!(body["data"]["course"], "updated course");

    // Patch scores only.
    let req = test::TestRequest::patch()
        .uri(&format!("/api/rounds/{id}"))
        .set_json(json!({ "scores": vec![1; 18] }))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["scores"], json!(vec![1; 18]));
    assert_eq!(body["data"]["username"], "updated username");
}

#[actix_web::test]
async fn delete_returns_record_then_404s() {
    let app = create_test_app(AppState::new()).await;

    let req = test::TestRequest::post()
        .uri("/api/rounds")
        .set_json(round_json("emerald links", "tim", &valid_scores()))
        .to_request();
    let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/rounds/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"], created["data"]);

    let req = test::TestRequest::get()
        .uri(&format!("/api/rounds/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn delete_unknown_id_returns_404() {
    let app = create_test_app(AppState::new()).await;

    let req = test::TestRequest::delete()
        .uri("/api/rounds/999")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn ids_are_not_reused_after_delete() {
    let app = create_test_app(AppState::new()).await;

    let req = test::TestRequest::post()
        .uri("/api/rounds")
        .set_json(round_json("emerald links", "tim", &valid_scores()))
        .to_request();
    let first: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let first_id = first["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/rounds/{first_id}"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/rounds")
        .set_json(round_json("emerald links", "tim", &valid_scores()))
        .to_request();
    let second: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert!(second["data"]["id"].as_i64().unwrap() > first_id);
}
