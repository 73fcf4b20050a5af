use std::net::SocketAddr;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use shared::{
    domain::UserInput,
    error::ApiError,
    protocol::{GenerateRequest, GenerateResponse, GenerateStatus, GENERATE_PATH},
};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod generate;

use config::{load_settings, Settings};
use generate::parse_floorplan_request;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let settings = load_settings();
    let app = build_router(&settings);

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(settings: &Settings) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(GENERATE_PATH, post(http_generate))
        .layer(RequestBodyLimitLayer::new(settings.max_body_bytes))
        .layer(CorsLayer::permissive())
}

async fn healthz() -> &'static str {
    "ok"
}

async fn http_generate(
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<ApiError>)> {
    let user_input: UserInput = req.user_input.validate().map_err(|e| {
        warn!("rejected generate request with empty description");
        (StatusCode::BAD_REQUEST, Json(e))
    })?;

    let spec = parse_floorplan_request(user_input.as_str());
    info!(
        bedrooms = spec.bedrooms,
        washrooms = spec.washrooms,
        language = ?spec.language,
        "accepted floorplan generation request"
    );

    Ok(Json(GenerateResponse {
        status: GenerateStatus::Accepted,
        spec,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request},
    };
    use serde_json::{json, Value};
    use shared::error::ErrorCode;
    use tower::ServiceExt;

    fn test_app() -> Router {
        build_router(&Settings::default())
    }

    fn generate_request(body: &Value) -> Request<Body> {
        Request::post(GENERATE_PATH)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn generate_accepts_description_and_returns_spec() {
        let response = test_app()
            .oneshot(generate_request(&json!({"user_input": "3 bedroom house"})))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let body: GenerateResponse =
            serde_json::from_value(json_body(response).await).expect("generate response");
        assert_eq!(body.status, GenerateStatus::Accepted);
        assert_eq!(body.spec.bedrooms, 3);
        assert!(body.spec.has_garage);
    }

    #[tokio::test]
    async fn generate_rejects_blank_description() {
        let response = test_app()
            .oneshot(generate_request(&json!({"user_input": "  \t"})))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let err: ApiError = serde_json::from_value(json_body(response).await).expect("api error");
        assert_eq!(err.code, ErrorCode::Validation);
    }

    #[tokio::test]
    async fn generate_enforces_body_limit() {
        let settings = Settings {
            max_body_bytes: 32,
            ..Settings::default()
        };
        let long_input = "x".repeat(256);
        let response = build_router(&settings)
            .oneshot(generate_request(&json!({ "user_input": long_input })))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn healthz_responds_ok() {
        let response = test_app()
            .oneshot(Request::get("/healthz").body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
