//! # HTTP Surface
//!
//! The axum router tying the prompt matcher, the key registry and the order store together.
//! Handlers never own state: they talk to the actors through the clients in [`AppState`].
//!
//! | Route                         | Auth       |
//! |-------------------------------|------------|
//! | `POST /generate`              | none       |
//! | `GET /specs/:id`              | none       |
//! | `POST /orders`                | access key |
//! | `GET /orders/:id`             | access key |
//! | `GET /_admin/generated-apis`  | admin key (route exists only when configured) |

pub mod auth;
pub mod error;
pub mod handlers;

pub use auth::{AccessGrant, AdminGrant};
pub use error::ApiError;

use crate::clients::{OrderClient, RegistryClient};
use crate::config::Config;
use axum::extract::Request;
use axum::http::{header, HeaderName, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared handler state. Cloned per request; every field is a cheap handle.
#[derive(Clone)]
pub struct AppState {
    pub registry: RegistryClient,
    pub orders: OrderClient,
    pub admin_key: Option<Arc<str>>,
}

impl AppState {
    pub fn new(registry: RegistryClient, orders: OrderClient, admin_key: Option<String>) -> Self {
        Self {
            registry,
            orders,
            admin_key: admin_key.map(Arc::from),
        }
    }
}

/// Builds the complete application: API routes, optional static UI, CORS and request tracing.
pub fn router(state: AppState, config: &Config) -> Router {
    let mut api = Router::new()
        .route("/generate", post(handlers::generate))
        .route("/specs/:id", get(handlers::get_spec))
        .route("/orders", post(handlers::create_order))
        .route("/orders/:id", get(handlers::get_order));

    if state.admin_key.is_some() {
        info!("Admin listing enabled");
        api = api.route("/_admin/generated-apis", get(handlers::list_generated_apis));
    }

    with_static_ui(api, &config.public_dir)
        .layer(cors(config))
        .layer(middleware::from_fn(preflight_no_content))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn with_static_ui(router: Router<AppState>, public_dir: &Path) -> Router<AppState> {
    if !public_dir.is_dir() {
        warn!(
            path = %public_dir.display(),
            "Public directory not found, create ui.html there to serve the UI"
        );
        return router;
    }
    router
        .route_service("/", ServeFile::new(public_dir.join("ui.html")))
        .fallback_service(ServeDir::new(public_dir))
}

fn cors(config: &Config) -> CorsLayer {
    let origin = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        AllowOrigin::exact(config.cors_origin.clone())
    };
    CorsLayer::new()
        .allow_origin(origin)
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-api-key")])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}

/// Preflight answers are `204 No Content`. `CorsLayer` on its own replies `200 OK`.
async fn preflight_no_content(request: Request, next: Next) -> Response {
    let is_options = request.method() == Method::OPTIONS;
    let mut response = next.run(request).await;
    if is_options && response.status() == StatusCode::OK {
        *response.status_mut() = StatusCode::NO_CONTENT;
    }
    response
}
