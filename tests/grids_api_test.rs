mod common;

use actix_web::test;
use serde_json::{json, Value};

fn save_payload(name: &str, first_title: &str) -> Value {
    let mut manga = vec![Value::Null; 9];
    manga[0] = json!({
        "id": "manga-no-1",
        "title": first_title,
        "image": "https://uploads.example.org/covers/1.jpg"
    });
    json!({ "grid": { "name": name, "manga": manga } })
}

#[actix_web::test]
async fn test_save_grid_without_credential_expect_unauthorized() {
    let (app, _td) = common::initialize_app().await;
    let req = test::TestRequest::post()
        .uri("/api/grids")
        .set_json(save_payload("mine", "One"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let actual = resp.status().as_u16();
    let expected = 401;
    assert_eq!(expected, actual);
}

#[actix_web::test]
async fn test_list_grids_without_credential_expect_unauthorized() {
    let (app, _td) = common::initialize_app().await;
    let req = test::TestRequest::get().uri("/api/grids").to_request();
    let resp = test::call_service(&app, req).await;
    let actual = resp.status().as_u16();
    let expected = 401;
    assert_eq!(expected, actual);
}

#[actix_web::test]
async fn test_save_grid_with_expired_credential_expect_unauthorized() {
    let (app, _td) = common::initialize_app().await;
    let token = common::mint_expired_token("subject-1");
    let req = test::TestRequest::post()
        .uri("/api/grids")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(save_payload("mine", "One"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let actual = resp.status().as_u16();
    let expected = 401;
    assert_eq!(expected, actual);
}

#[actix_web::test]
async fn test_save_grid_with_wrong_audience_credential_expect_unauthorized() {
    let (app, _td) = common::initialize_app().await;
    let token = common::mint_wrong_audience_token("subject-1");
    let req = test::TestRequest::post()
        .uri("/api/grids")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(save_payload("mine", "One"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let actual = resp.status().as_u16();
    let expected = 401;
    assert_eq!(expected, actual);
}

#[actix_web::test]
async fn test_save_grid_with_valid_credential_expect_ok_and_id() {
    let (app, _td) = common::initialize_app().await;
    let token = common::mint_token("subject-1");
    let req = test::TestRequest::post()
        .uri("/api/grids")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(save_payload("mine", "One"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["ok"], json!(true));
    assert!(body["id"].is_i64());
}

#[actix_web::test]
async fn test_save_then_list_expect_own_grids_only() {
    let (app, _td) = common::initialize_app().await;
    let own_token = common::mint_token("subject-owner");
    let other_token = common::mint_token("subject-other");

    let req = test::TestRequest::post()
        .uri("/api/grids")
        .insert_header(("Authorization", format!("Bearer {own_token}")))
        .set_json(save_payload("mine", "One"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::post()
        .uri("/api/grids")
        .insert_header(("Authorization", format!("Bearer {other_token}")))
        .set_json(save_payload("not mine", "Two"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::get()
        .uri("/api/grids")
        .insert_header(("Authorization", format!("Bearer {own_token}")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let grids = body["grids"].as_array().unwrap();
    assert_eq!(grids.len(), 1);
    assert_eq!(grids[0]["name"], json!("mine"));
    assert_eq!(grids[0]["user_id"], json!("subject-owner"));
    assert_eq!(grids[0]["manga"].as_array().unwrap().len(), 9);
    assert_eq!(grids[0]["manga"][0]["title"], json!("One"));
}

#[actix_web::test]
async fn test_list_grids_expect_newest_first() {
    let (app, _td) = common::initialize_app().await;
    let token = common::mint_token("subject-1");

    for name in ["oldest", "middle", "newest"] {
        let req = test::TestRequest::post()
            .uri("/api/grids")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .set_json(save_payload(name, "One"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    let req = test::TestRequest::get()
        .uri("/api/grids")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let actual: Vec<&str> = body["grids"]
        .as_array()
        .unwrap()
        .iter()
        .map(|grid| grid["name"].as_str().unwrap())
        .collect();
    let expected = vec!["newest", "middle", "oldest"];
    assert_eq!(expected, actual);
}

#[actix_web::test]
async fn test_save_grid_with_null_name_expect_ok() {
    let (app, _td) = common::initialize_app().await;
    let token = common::mint_token("subject-1");
    let req = test::TestRequest::post()
        .uri("/api/grids")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({ "grid": { "name": null, "manga": vec![Value::Null; 9] } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::get()
        .uri("/api/grids")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["grids"][0]["name"], Value::Null);
}
