// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP API tests for the workout routes.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn running_payload(distance: f64, duration: f64, cadence: f64) -> Value {
    json!({
        "type": "running",
        "coords": [37.4, -122.1],
        "distance": distance,
        "duration": duration,
        "cadence": cadence,
    })
}

#[tokio::test]
async fn test_create_running_workout() {
    let (app, _state, _dir) = common::create_test_app();

    let response = app
        .oneshot(post_json("/api/workouts", running_payload(5.0, 30.0, 150.0)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["type"], "running");
    assert_eq!(body["pace"], 6.0);
    assert!(body["description"].as_str().unwrap().starts_with("Running on "));
    assert!(!body["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_rejects_negative_distance() {
    let (app, _state, _dir) = common::create_test_app();

    let response = app
        .oneshot(post_json(
            "/api/workouts",
            running_payload(-1.0, 30.0, 150.0),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_create_accepts_negative_elevation_gain() {
    let (app, _state, _dir) = common::create_test_app();

    let response = app
        .oneshot(post_json(
            "/api/workouts",
            json!({
                "type": "cycling",
                "coords": [48.2, 16.4],
                "distance": 5.0,
                "duration": 10.0,
                "elvGain": -5.0,
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["elvGain"], -5.0);
    assert_eq!(body["speed"], 30.0);
}

#[tokio::test]
async fn test_get_unknown_workout_is_404() {
    let (app, _state, _dir) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(&format!("/api/workouts/{}", uuid::Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_workout_is_permissive() {
    let (app, _state, _dir) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(&format!("/api/workouts/{}", uuid::Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_update_recomputes_pace() {
    let (app, _state, _dir) = common::create_test_app();

    let created = app
        .clone()
        .oneshot(post_json("/api/workouts", running_payload(5.0, 30.0, 150.0)))
        .await
        .unwrap();
    let id = body_json(created).await["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(&format!("/api/workouts/{id}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({"distance": 10.0, "duration": 40.0, "cadence": 160.0}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["distance"], 10.0);
    assert_eq!(body["pace"], 4.0);
    assert_eq!(body["cadence"], 160.0);
}

#[tokio::test]
async fn test_update_unknown_workout_is_404() {
    let (app, _state, _dir) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(&format!("/api/workouts/{}", uuid::Uuid::new_v4()))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({"distance": 1.0, "duration": 1.0, "cadence": 1.0}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_click_increments_counter() {
    let (app, _state, _dir) = common::create_test_app();

    let created = app
        .clone()
        .oneshot(post_json("/api/workouts", running_payload(5.0, 30.0, 150.0)))
        .await
        .unwrap();
    let id = body_json(created).await["id"].as_str().unwrap().to_string();

    for expected in 1..=2u32 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(&format!("/api/workouts/{id}/click"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["clicks"], expected);
    }
}

#[tokio::test]
async fn test_list_filters_by_type() {
    let (app, _state, _dir) = common::create_test_app();

    app.clone()
        .oneshot(post_json("/api/workouts", running_payload(5.0, 30.0, 150.0)))
        .await
        .unwrap();
    app.clone()
        .oneshot(post_json(
            "/api/workouts",
            json!({
                "type": "cycling",
                "coords": [48.2, 16.4],
                "distance": 20.0,
                "duration": 60.0,
                "elvGain": 200.0,
            }),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/workouts?type=running")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["workouts"][0]["type"], "running");
}

#[tokio::test]
async fn test_sort_alternates_direction() {
    let (app, _state, _dir) = common::create_test_app();

    for payload in [
        running_payload(5.0, 30.0, 150.0),
        running_payload(10.0, 50.0, 140.0),
        running_payload(7.5, 40.0, 145.0),
    ] {
        app.clone()
            .oneshot(post_json("/api/workouts", payload))
            .await
            .unwrap();
    }

    let first = app
        .clone()
        .oneshot(post_json("/api/workouts/sort", json!({})))
        .await
        .unwrap();
    let body = body_json(first).await;
    assert_eq!(body["direction"], "descending");
    let distances: Vec<f64> = body["workouts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["distance"].as_f64().unwrap())
        .collect();
    assert_eq!(distances, vec![10.0, 7.5, 5.0]);

    let second = app
        .oneshot(post_json("/api/workouts/sort", json!({})))
        .await
        .unwrap();
    let body = body_json(second).await;
    assert_eq!(body["direction"], "ascending");
    let distances: Vec<f64> = body["workouts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["distance"].as_f64().unwrap())
        .collect();
    assert_eq!(distances, vec![5.0, 7.5, 10.0]);
}

#[tokio::test]
async fn test_clear_empties_the_list() {
    let (app, state, _dir) = common::create_test_app();

    app.clone()
        .oneshot(post_json("/api/workouts", running_payload(5.0, 30.0, 150.0)))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/workouts")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert!(state.log.read().await.workouts().is_empty());

    let listed = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/workouts")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(listed).await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_health_check() {
    let (app, _state, _dir) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}
