//! Key checks for protected routes.
//!
//! A key is read from its header first and from a query parameter second. An empty value
//! counts as absent.

use crate::http::{ApiError, AppState};
use crate::model::GeneratedApi;
use async_trait::async_trait;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use std::collections::HashMap;
use tracing::debug;

pub const API_KEY_HEADER: &str = "x-api-key";
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Proof that the request presented an issued access key. Holds the matching record.
pub struct AccessGrant(pub GeneratedApi);

#[async_trait]
impl FromRequestParts<AppState> for AccessGrant {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let key = presented_key(parts, API_KEY_HEADER, "apiKey").ok_or(ApiError::MissingApiKey)?;
        let api = state
            .registry
            .authorize(&key)
            .await?
            .ok_or(ApiError::InvalidApiKey)?;
        debug!(registry_id = %api.id, "Access granted");
        Ok(AccessGrant(api))
    }
}

/// The request presented the configured admin secret.
pub struct AdminGrant;

#[async_trait]
impl FromRequestParts<AppState> for AdminGrant {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let expected = state.admin_key.as_deref().ok_or(ApiError::Forbidden)?;
        match presented_key(parts, ADMIN_KEY_HEADER, "adminKey") {
            Some(key) if key == expected => Ok(AdminGrant),
            _ => Err(ApiError::Forbidden),
        }
    }
}

fn presented_key(parts: &Parts, header: &str, query_param: &str) -> Option<String> {
    let from_header = parts
        .headers
        .get(header)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    from_header.or_else(|| {
        let Query(mut params) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri).ok()?;
        params.remove(query_param).filter(|value| !value.is_empty())
    })
}
