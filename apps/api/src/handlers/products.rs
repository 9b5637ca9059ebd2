use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use larder_domain::{ProductDraft, ProductId};
use tracing::info;

use crate::dto::{NameQuery, ProductRequest, ProductResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_products_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ProductResponse>>> {
    let products = state
        .product_service
        .list_products()
        .await?
        .into_iter()
        .map(ProductResponse::from)
        .collect();

    Ok(Json(products))
}

pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ProductResponse>> {
    let product = state.product_service.get_product(ProductId::new(id)).await?;

    Ok(Json(ProductResponse::from(product)))
}

pub async fn search_products_handler(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> ApiResult<Json<Vec<ProductResponse>>> {
    let name = query.name.unwrap_or_default();
    let products = state
        .product_service
        .find_products_by_name(name.as_str())
        .await?
        .into_iter()
        .map(ProductResponse::from)
        .collect();

    Ok(Json(products))
}

pub async fn create_product_handler(
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> ApiResult<(StatusCode, Json<ProductResponse>)> {
    let product = state
        .product_service
        .create_product(ProductDraft::from(payload))
        .await?;

    info!(
        product_id = ?product.id().map(ProductId::as_i64),
        name = product.name(),
        sale_price = %product.sale_price(),
        "product created"
    );
    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductRequest>,
) -> ApiResult<Json<ProductResponse>> {
    let product = state
        .product_service
        .edit_product(ProductId::new(id), ProductDraft::from(payload))
        .await?;

    info!(product_id = id, "product updated");
    Ok(Json(ProductResponse::from(product)))
}

pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state
        .product_service
        .delete_product(ProductId::new(id))
        .await?;

    info!(product_id = id, "product deleted");
    Ok(StatusCode::NO_CONTENT)
}
