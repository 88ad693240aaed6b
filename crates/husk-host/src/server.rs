use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use husk_core::{FrameOptions, HuskError, Secrets};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

use crate::page;

pub struct HostState {
    pub bundle_dir: PathBuf,
    pub secrets: Secrets,
    pub frame: FrameOptions,
}

impl HostState {
    pub fn new(bundle_dir: PathBuf, secrets: Secrets, frame: FrameOptions) -> Self {
        Self {
            bundle_dir,
            secrets,
            frame,
        }
    }
}

/// Routes: `/` hosts the frame, `/app` serves the injected bundle, and
/// everything else falls through to the bundle directory so hashed JS/CSS
/// assets resolve. `/index.html` is pinned to the injected copy so the raw
/// artifact is never reachable.
pub fn host_router(state: Arc<HostState>) -> Router {
    let assets = ServeDir::new(state.bundle_dir.clone());

    Router::new()
        .route("/", get(front_endpoint))
        .route("/app", get(bundle_endpoint))
        .route("/index.html", get(bundle_endpoint))
        .route("/health", get(health_endpoint))
        .fallback_service(assets)
        .with_state(state)
}

fn front_page(state: &HostState) -> String {
    let index = husk_bundle::index_path(&state.bundle_dir);
    if index.exists() {
        page::host_page(&state.frame)
    } else {
        warn!(path = %index.display(), "build artifact missing, serving remediation page");
        page::missing_bundle_page(&index)
    }
}

async fn front_endpoint(State(state): State<Arc<HostState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        front_page(&state),
    )
}

async fn bundle_endpoint(State(state): State<Arc<HostState>>) -> Response {
    match husk_bundle::prepare(&state.bundle_dir, &state.secrets) {
        Ok(html) => {
            info!(bytes = html.len(), "serving injected bundle");
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                html,
            )
                .into_response()
        }
        Err(HuskError::BundleMissing(path)) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            page::missing_bundle_page(&path),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "failed to load bundle");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

async fn health_endpoint() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "husk"
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn front_page_embeds_frame_when_bundle_present() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<head></head>").unwrap();

        let state = HostState::new(
            dir.path().to_path_buf(),
            Secrets::default(),
            FrameOptions::default(),
        );
        let html = front_page(&state);
        assert!(html.contains(r#"<iframe src="/app""#));
    }

    #[test]
    fn front_page_shows_remediation_when_bundle_missing() {
        let dir = tempdir().unwrap();
        let state = HostState::new(
            dir.path().to_path_buf(),
            Secrets::default(),
            FrameOptions::default(),
        );
        let html = front_page(&state);
        assert!(html.contains("Build folder not found"));
        assert!(!html.contains("<iframe"));
    }
}
