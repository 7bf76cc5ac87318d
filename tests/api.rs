// tests/api.rs
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use mars_rover::{
    MissionConfig, MissionControl,
    api::{AppState, app},
};
use serde_json::{Value, json};
use tower::ServiceExt;

fn setup() -> Router {
    let config = MissionConfig {
        seed: Some(3),
        ..Default::default()
    };
    app(AppState::new(MissionControl::in_memory(config)))
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

async fn open_map(router: &Router) {
    let (status, _) = post(
        router,
        "/api/mars/configure",
        json!({"width": 100, "height": 100, "obstacleProbability": 0.0}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_check() {
    let router = setup();
    let (status, body) = get(&router, "/api/test").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Rover API is working!"}));
}

#[tokio::test]
async fn test_configure_map() {
    let router = setup();
    let (status, body) = post(
        &router,
        "/api/mars/configure",
        json!({"width": 100, "height": 150, "obstacleProbability": 0.2}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "message": "Map configured successfully",
            "config": {"width": 100, "height": 150, "obstacleProbability": 0.2}
        })
    );
}

#[tokio::test]
async fn test_configure_map_fills_defaults() {
    let router = setup();
    let (status, body) = post(&router, "/api/mars/configure", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["config"],
        json!({"width": 200, "height": 200, "obstacleProbability": 0.1})
    );
}

#[tokio::test]
async fn test_configure_map_with_invalid_obstacle_probability() {
    let router = setup();
    let (status, body) = post(
        &router,
        "/api/mars/configure",
        json!({"width": 100, "height": 150, "obstacleProbability": 2.0}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "success": false,
            "message": "Obstacle probability must be between 0 and 1"
        })
    );
}

#[tokio::test]
async fn test_get_rover_position() {
    let router = setup();
    open_map(&router).await;

    let (status, body) = get(&router, "/api/rover/position").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"position": {"x": 0, "y": 0}, "direction": "N"}));
}

#[tokio::test]
async fn test_position_lazily_initializes() {
    let router = setup();
    let (status, body) = get(&router, "/api/rover/position").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["position"]["x"].is_i64());
    assert!(body["position"]["y"].is_i64());
    assert!(body["direction"].is_string());
}

#[tokio::test]
async fn test_execute_rover_commands() {
    let router = setup();
    open_map(&router).await;

    let (status, body) = post(&router, "/api/rover/command", json!({"commands": "MM"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["finalState"],
        json!({"position": {"x": 0, "y": 2}, "direction": "N"})
    );

    let (_, position) = get(&router, "/api/rover/position").await;
    assert_eq!(position["position"], json!({"x": 0, "y": 2}));
}

#[tokio::test]
async fn test_rover_rotation_commands() {
    let router = setup();
    open_map(&router).await;

    let (status, body) = post(&router, "/api/rover/command", json!({"commands": "LRR"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["finalState"]["direction"], json!("E"));
    assert_eq!(body["result"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_complete_rover_movement_sequence() {
    let router = setup();
    open_map(&router).await;

    let (status, body) =
        post(&router, "/api/rover/command", json!({"commands": "MMRMMRMM"})).await;
    assert_eq!(status, StatusCode::OK);

    let steps = body["result"].as_array().unwrap();
    assert_eq!(steps.len(), 8, "Should have 8 result steps for 8 commands");
    for step in steps {
        assert_eq!(step["success"], json!(true));
        assert!(step["position"]["x"].is_i64());
        assert!(step["direction"].is_string());
    }
    assert_eq!(
        steps[0],
        json!({"success": true, "position": {"x": 0, "y": 1}, "direction": "N"})
    );
}

#[tokio::test]
async fn test_out_of_bounds_step() {
    let router = setup();
    open_map(&router).await;

    // Facing North at the origin; turning left faces West, off the map.
    let (status, body) = post(&router, "/api/rover/command", json!({"commands": "LMM"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["result"],
        json!([
            {"success": true, "position": {"x": 0, "y": 0}, "direction": "W"},
            {"success": false, "error": "Out of bounds"}
        ])
    );
    assert_eq!(
        body["finalState"],
        json!({"position": {"x": 0, "y": 0}, "direction": "W"})
    );
}

#[tokio::test]
async fn test_obstacle_step() {
    let router = setup();
    post(
        &router,
        "/api/mars/configure",
        json!({"width": 2, "height": 2, "obstacleProbability": 1.0}),
    )
    .await;

    // Every cell except the start is an obstacle, so the first move is blocked.
    let (status, body) = post(&router, "/api/rover/command", json!({"commands": "mr"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["result"],
        json!([{"success": false, "error": "Obstacle detected", "position": {"x": 0, "y": 1}}])
    );
    assert_eq!(body["finalState"]["direction"], json!("N"), "R never ran");
}

#[tokio::test]
async fn test_invalid_command_is_rejected() {
    let router = setup();
    open_map(&router).await;

    let (status, body) = post(&router, "/api/rover/command", json!({"commands": "MFM"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"success": false, "message": "Invalid command: F"}));

    let (_, position) = get(&router, "/api/rover/position").await;
    assert_eq!(position["position"], json!({"x": 0, "y": 0}), "nothing ran");
}

#[tokio::test]
async fn test_missing_commands_runs_nothing() {
    let router = setup();
    open_map(&router).await;

    let (status, body) = post(&router, "/api/rover/command", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], json!([]));
    assert_eq!(
        body["finalState"],
        json!({"position": {"x": 0, "y": 0}, "direction": "N"})
    );
}

#[tokio::test]
async fn test_configure_map_too_large() {
    let router = setup();
    open_map(&router).await;

    let (status, body) = post(
        &router,
        "/api/mars/configure",
        json!({"width": 2_000_000_000, "height": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"success": false, "message": "Planet map must not exceed 4000000 cells"})
    );

    // The session keeps serving the previous map.
    let (status, body) = get(&router, "/api/rover/position").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["position"], json!({"x": 0, "y": 0}));
}

#[tokio::test]
async fn test_malformed_bodies_are_bad_requests() {
    let router = setup();
    let cases = [
        ("/api/mars/configure", json!({"obstacleProbability": "x"})),
        ("/api/mars/configure", json!({"width": 1.5})),
        ("/api/rover/command", json!({"commands": 7})),
    ];
    for (uri, payload) in cases {
        let (status, body) = post(&router, uri, payload.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri} {payload}");
        assert_eq!(body["success"], json!(false));
        let message = body["message"].as_str().unwrap();
        assert!(message.starts_with("Invalid request: "), "{message}");
    }

    // Not JSON at all.
    let request = Request::post("/api/rover/command")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{commands"))
        .unwrap();
    let (status, body) = send(&router, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
}
