//! HTTP Request Handlers

use crate::generator::generate_from_prompt;
use crate::http::{AccessGrant, AdminGrant, ApiError, AppState};
use crate::model::{ApiId, GeneratedApi, Order, OrderCreate, OrderId, SpecDocument};
use actor_framework::ActorClient;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub id: ApiId,
    pub api_key: String,
    pub spec: SpecDocument,
    pub endpoints: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecResponse {
    pub id: ApiId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<SpecDocument>,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// `POST /generate`: match the prompt and issue a key for the resulting API.
pub async fn generate(
    State(state): State<AppState>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(request) = body?;
    let prompt = request
        .prompt
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApiError::BadRequest("prompt required".into()))?;

    let generated =
        generate_from_prompt(&prompt).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let spec = generated.spec.clone();
    let endpoints = generated.runtime.endpoints.clone();

    let issued = state.registry.issue(prompt, generated).await?;
    info!(registry_id = %issued.id, "Generated API issued");

    Ok(Json(GenerateResponse {
        id: issued.id,
        api_key: issued.key,
        spec,
        endpoints,
    }))
}

/// `GET /specs/:id`
pub async fn get_spec(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SpecResponse>, ApiError> {
    let api = state.registry.fetch(ApiId(id)).await?;
    Ok(Json(SpecResponse {
        id: api.id,
        spec: api.spec,
        prompt: api.prompt,
        created_at: api.created_at,
    }))
}

/// `POST /orders`
///
/// The body is checked before the key: an invalid payload is a 400 whatever key was sent.
pub async fn create_order(
    State(state): State<AppState>,
    grant: Result<AccessGrant, ApiError>,
    body: Result<Json<OrderCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let Json(params) = body?;
    params.validate()?;
    let AccessGrant(api) = grant?;

    let order = state.orders.create_order(params).await?;
    info!(order_id = %order.id, registry_id = %api.id, "Order created");
    Ok((StatusCode::CREATED, Json(order)))
}

/// `GET /orders/:id`
pub async fn get_order(
    State(state): State<AppState>,
    AccessGrant(api): AccessGrant,
    Path(id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    debug!(order_id = %id, registry_id = %api.id, "Fetching order");
    state
        .orders
        .get(OrderId(id))
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("not found"))
}

/// `GET /_admin/generated-apis`: every issued record, oldest first.
pub async fn list_generated_apis(
    State(state): State<AppState>,
    _admin: AdminGrant,
) -> Result<Json<Vec<GeneratedApi>>, ApiError> {
    let mut apis = state.registry.list().await?;
    apis.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.0.cmp(&b.id.0)));
    Ok(Json(apis))
}
