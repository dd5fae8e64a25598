use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
};
use url::Url;

use crate::{
    config::Config,
    date_key::DateKey,
    error::Error,
    fetch::make_client,
    parse::{self, Readings},
};

#[derive(Debug)]
pub struct AppState {
    client: reqwest::Client,
    base_url: Url,
}

impl AppState {
    pub const fn new(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Parse(parse::Error::InvalidDate(_)) => StatusCode::BAD_REQUEST,
            // the upstream page is missing or no longer has the layout we read
            Self::Request(_) | Self::Parse(parse::Error::HtmlParse(_)) => StatusCode::BAD_GATEWAY,
            Self::Url(_) | Self::Io(_) | Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            log::warn!("Error while loading readings: {self}");
        }
        let body = json!({ "success": false, "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

async fn ping() -> Json<serde_json::Value> {
    Json(json!({ "success": true }))
}

async fn readings_today(State(state): State<Arc<AppState>>) -> crate::Result<Json<Readings>> {
    load(&state, DateKey::today()).await
}

async fn readings_on(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> crate::Result<Json<Readings>> {
    let date: DateKey = date.parse()?;
    load(&state, date).await
}

async fn load(state: &AppState, date: DateKey) -> crate::Result<Json<Readings>> {
    Readings::load(&state.client, &state.base_url, date)
        .await
        .map(Json)
}

pub fn router(state: Arc<AppState>) -> Router {
    let compression_layer: CompressionLayer = CompressionLayer::new()
        .br(true)
        .deflate(true)
        .gzip(true)
        .zstd(true);
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any);

    Router::new()
        .route("/ping", get(ping))
        .route("/readings", get(readings_today))
        .route("/readings/:date", get(readings_on))
        .with_state(state)
        .layer(cors_layer)
        .layer(compression_layer)
}

pub async fn serve(config: Config) -> crate::Result<()> {
    let state = Arc::new(AppState::new(make_client()?, config.base_url));
    let listener = TcpListener::bind(config.addr).await?;
    log::info!("listening on http://{}", config.addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt; // for oneshot

    fn test_app() -> Router {
        // port 9 is discard; nothing should answer there
        let base_url = Url::parse("http://127.0.0.1:9/").unwrap();
        router(Arc::new(AppState::new(make_client().unwrap(), base_url)))
    }

    async fn json_response(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    async fn get_uri(uri: &str) -> Response {
        test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_ping() {
        let response = get_uri("/ping").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_response(response).await, json!({ "success": true }));
    }

    #[tokio::test]
    async fn test_invalid_date() {
        let response = get_uri("/readings/tomorrow").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_response(response).await;
        assert_eq!(body["success"], json!(false));
        assert!(body["error"].as_str().unwrap().contains("tomorrow"));
    }

    #[tokio::test]
    async fn test_upstream_unreachable() {
        let response = get_uri("/readings/20250907").await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(json_response(response).await["success"], json!(false));
    }

    #[test]
    fn test_error_status() {
        let status = |e: Error| e.into_response().status();
        assert_eq!(
            status(parse::Error::invalid_date("x").into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(parse::Error::html_parse_error("gone").into()),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status(Error::config_error("bad")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
