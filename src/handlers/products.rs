use axum::{extract::Path, http::StatusCode, response::Json};

use crate::database::models::product::{Product, ProductInput};
use crate::error::ApiError;
use crate::middleware::{AuthAdmin, JsonBody};
use crate::services::product_service::ProductService;

/// GET /api/products - full catalog, presentation order.
pub async fn list() -> Result<Json<Vec<Product>>, ApiError> {
    let service = ProductService::new().await?;
    Ok(Json(service.list().await?))
}

/// GET /api/products/:slug
pub async fn get_by_slug(Path(slug): Path<String>) -> Result<Json<Product>, ApiError> {
    let service = ProductService::new().await?;
    Ok(Json(service.get_by_slug(&slug).await?))
}

/// POST /api/products - admin only.
pub async fn create(
    _admin: AuthAdmin,
    JsonBody(input): JsonBody<ProductInput>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let service = ProductService::new().await?;
    let product = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/:id - admin only, partial-update semantics.
pub async fn update(
    _admin: AuthAdmin,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<ProductInput>,
) -> Result<Json<Product>, ApiError> {
    let service = ProductService::new().await?;
    Ok(Json(service.update(&id, input).await?))
}

/// DELETE /api/products/:id - admin only, hard delete, empty 204 body.
pub async fn delete(_admin: AuthAdmin, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let service = ProductService::new().await?;
    service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
