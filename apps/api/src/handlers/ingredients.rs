use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use larder_domain::{IngredientDraft, IngredientId};
use tracing::info;

use crate::dto::{IngredientRequest, IngredientResponse, NameQuery};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_ingredients_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<IngredientResponse>>> {
    let ingredients = state
        .ingredient_service
        .list_ingredients()
        .await?
        .into_iter()
        .map(IngredientResponse::from)
        .collect();

    Ok(Json(ingredients))
}

pub async fn get_ingredient_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<IngredientResponse>> {
    let ingredient = state
        .ingredient_service
        .get_ingredient(IngredientId::new(id))
        .await?;

    Ok(Json(IngredientResponse::from(ingredient)))
}

pub async fn search_ingredients_handler(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> ApiResult<Json<Vec<IngredientResponse>>> {
    let name = query.name.unwrap_or_default();
    let ingredients = state
        .ingredient_service
        .find_ingredients_by_name(name.as_str())
        .await?
        .into_iter()
        .map(IngredientResponse::from)
        .collect();

    Ok(Json(ingredients))
}

pub async fn create_ingredient_handler(
    State(state): State<AppState>,
    Json(payload): Json<IngredientRequest>,
) -> ApiResult<(StatusCode, Json<IngredientResponse>)> {
    let ingredient = state
        .ingredient_service
        .create_ingredient(IngredientDraft::from(payload))
        .await?;

    info!(
        ingredient_id = ?ingredient.id().map(IngredientId::as_i64),
        name = ingredient.name(),
        "ingredient created"
    );
    Ok((StatusCode::CREATED, Json(IngredientResponse::from(ingredient))))
}

pub async fn update_ingredient_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<IngredientRequest>,
) -> ApiResult<Json<IngredientResponse>> {
    let ingredient = state
        .ingredient_service
        .edit_ingredient(IngredientId::new(id), IngredientDraft::from(payload))
        .await?;

    info!(ingredient_id = id, "ingredient updated");
    Ok(Json(IngredientResponse::from(ingredient)))
}

pub async fn delete_ingredient_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state
        .ingredient_service
        .delete_ingredient(IngredientId::new(id))
        .await?;

    info!(ingredient_id = id, "ingredient deleted");
    Ok(StatusCode::NO_CONTENT)
}
