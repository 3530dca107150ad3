//! Product request handlers.
//!
//! Each handler parses its inputs before touching storage, so a bad id or
//! body never reaches the database.

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use crate::http::response::{ApiError, ApiResult, DeleteResult};
use crate::http::server::AppState;
use crate::store::{Product, ProductPayload};

/// Parse the `{id}` path segment.
fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>().map_err(|_| ApiError::InvalidId)
}

/// Parse an extracted `{id}`, treating an undecodable segment as invalid.
fn extract_id(path: Result<Path<String>, PathRejection>) -> ApiResult<i64> {
    match path {
        Ok(Path(raw)) => parse_id(&raw),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected product id segment");
            Err(ApiError::InvalidId)
        }
    }
}

/// Decode a product body regardless of the declared content type.
///
/// A JSON `null` body decodes to the zero-valued payload.
fn parse_payload(body: &[u8]) -> ApiResult<ProductPayload> {
    serde_json::from_slice::<Option<ProductPayload>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| {
            tracing::debug!(error = %e, "Rejected product payload");
            ApiError::InvalidPayload
        })
}

/// Buffer and decode a request body; an unreadable body is an invalid payload.
fn read_payload(body: Result<Bytes, BytesRejection>) -> ApiResult<ProductPayload> {
    match body {
        Ok(bytes) => parse_payload(&bytes),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Failed to read request body");
            Err(ApiError::InvalidPayload)
        }
    }
}

/// `POST /product`
pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let payload = read_payload(body)?;
    let product = state.store.create(payload).await?;
    tracing::info!(id = product.id, name = %product.name, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// `GET /products/`
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    let products = state.store.list().await?;
    Ok(Json(products))
}

/// `GET /product/{id}`
pub async fn get_product(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Product>> {
    let id = extract_id(path)?;
    let product = state.store.get_by_id(id).await?;
    Ok(Json(product))
}

/// `PUT /product/{id}`
pub async fn update_product(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<Product>> {
    let id = extract_id(path)?;
    let payload = read_payload(body)?;
    let product = state.store.update(id, payload).await?;
    tracing::info!(id, "Product updated");
    Ok(Json(product))
}

/// `DELETE /product/{id}`
pub async fn delete_product(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<DeleteResult>> {
    let id = extract_id(path)?;
    state
        .store
        .delete(id)
        .await
        .map_err(|e| ApiError::DeleteFailed(e.to_string()))?;
    tracing::info!(id, "Product deleted");
    Ok(Json(DeleteResult::deleted()))
}

/// Fallback for paths outside the product routes.
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Fallback for a known path used with the wrong method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
