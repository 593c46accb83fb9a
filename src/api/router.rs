use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::models;
use super::state::AppState;

/// Create the model API router
pub fn create_models_router() -> Router<AppState> {
    Router::new()
        .route("/models", get(models::list_models))
        .route("/models/{model_directory}", get(models::get_model))
        .route(
            "/models/{model_directory}/predictions/{filename}",
            get(models::get_predictions),
        )
}

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .nest("/api", create_models_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::infrastructure::model::{FilesystemModelRepository, PREDICTIONS_DIR};

    fn create_model(root: &Path, model_directory: &str, files: &[(&str, &str)]) {
        let predictions = root.join(model_directory).join(PREDICTIONS_DIR);
        fs::create_dir_all(&predictions).unwrap();

        for (name, content) in files {
            fs::write(predictions.join(name), content).unwrap();
        }
    }

    fn create_app(root: &Path) -> Router {
        let state = AppState::from_repository(FilesystemModelRepository::new(root));
        create_router_with_state(state)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_list_models() {
        let dir = TempDir::new().unwrap();
        create_model(
            dir.path(),
            "modelA-x_5-y_0.01-z_32",
            &[("test_1.json", "{}"), ("validation_1.json", "{}")],
        );
        create_model(dir.path(), "modelB-x_7-y_0.1-z_8", &[("validation_1.json", "{}")]);

        let (status, body) = get(create_app(dir.path()), "/api/models").await;
        let json: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["object"], "list");
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
        assert_eq!(json["data"][0]["model_name"], "modelA");
        assert_eq!(json["data"][0]["predictions"]["test"][0], "test_1.json");
    }

    #[tokio::test]
    async fn test_list_models_missing_root() {
        let dir = TempDir::new().unwrap();

        let (status, body) = get(create_app(&dir.path().join("missing")), "/api/models").await;
        let json: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"]["type"], "server_error");
    }

    #[tokio::test]
    async fn test_get_model() {
        let dir = TempDir::new().unwrap();
        create_model(dir.path(), "modelA-x_5-y_0.01-z_32", &[("test_1.json", "{}")]);

        let app = create_app(dir.path());
        let (status, body) = get(app.clone(), "/api/models/modelA-x_5-y_0.01-z_32").await;
        let json: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["batch_size"], 32);

        let (status, body) = get(app, "/api/models/unknown-x_1-y_1-z_1").await;
        let json: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["type"], "not_found_error");
        assert_eq!(json["error"]["message"], "Model 'unknown-x_1-y_1-z_1' not found");
    }

    #[tokio::test]
    async fn test_get_predictions() {
        let dir = TempDir::new().unwrap();
        let content = "[{\"id\": 1, \"score\": 0.25}]";
        create_model(dir.path(), "modelA-x_5-y_0.01-z_32", &[("test_1.json", content)]);

        let app = create_app(dir.path());
        let (status, body) = get(
            app.clone(),
            "/api/models/modelA-x_5-y_0.01-z_32/predictions/test_1.json",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(String::from_utf8(body).unwrap(), content);

        let (status, body) = get(
            app,
            "/api/models/modelA-x_5-y_0.01-z_32/predictions/test_2.json",
        )
        .await;
        let json: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["type"], "not_found_error");
    }

    #[tokio::test]
    async fn test_get_predictions_rejects_traversal() {
        let dir = TempDir::new().unwrap();
        create_model(dir.path(), "modelA-x_5-y_0.01-z_32", &[("test_1.json", "{}")]);

        let (status, _) = get(
            create_app(dir.path()),
            "/api/models/modelA-x_5-y_0.01-z_32/predictions/..%2F..%2Fsecret",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_ready_reports_unreadable_root() {
        let dir = TempDir::new().unwrap();

        let (status, _) = get(create_app(dir.path()), "/ready").await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = get(create_app(&dir.path().join("missing")), "/ready").await;
        let json: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json["status"], "unhealthy");
    }

    #[tokio::test]
    async fn test_health_and_live() {
        let dir = TempDir::new().unwrap();

        let (status, _) = get(create_app(dir.path()), "/health").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = get(create_app(dir.path()), "/live").await;
        assert_eq!(status, StatusCode::OK);
    }
}
