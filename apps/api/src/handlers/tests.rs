use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::{Value, json};

use crate::api_services::build_in_memory_app_state;
use crate::dto::{IngredientRequest, NameQuery, ProductRequest};
use crate::error::ApiError;
use crate::state::AppState;

use super::health::health_handler;
use super::ingredients::{
    create_ingredient_handler, delete_ingredient_handler, get_ingredient_handler,
    list_ingredients_handler, search_ingredients_handler, update_ingredient_handler,
};
use super::products::{
    create_product_handler, delete_product_handler, get_product_handler, list_products_handler,
    search_products_handler, update_product_handler,
};

fn ingredient_request(name: &str) -> IngredientRequest {
    serde_json::from_value(json!({
        "active": true,
        "name": name,
        "purchasingCost": 15.5,
        "amount": "10.5",
        "unitOfMeasure": "lb",
        "allergens": ["Nuts", "Gluten"]
    }))
    .unwrap_or_else(|_| unreachable!())
}

fn product_request(name: &str) -> ProductRequest {
    serde_json::from_value(json!({
        "active": true,
        "description": "Sample Description",
        "name": name,
        "vendorId": "5",
        "ingredientsList": ["Ingredient 1", "Ingredient 2"],
        "classification": "Drink",
        "type": "soda",
        "cost": "10.00",
        "markup": "2.00",
        "allergenList": ["Dairy"]
    }))
    .unwrap_or_else(|_| unreachable!())
}

async fn error_body(error: ApiError) -> (StatusCode, Value) {
    let response = error.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap_or_default();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn seeded_state() -> AppState {
    let state = build_in_memory_app_state();
    let created = create_product_handler(State(state.clone()), Json(product_request("Cola"))).await;
    assert!(created.is_ok());
    state
}

#[tokio::test]
async fn health_reports_storage_backend() {
    let Json(health) = health_handler(State(build_in_memory_app_state())).await;
    assert_eq!(health.status, "ok");
    assert_eq!(health.storage, "in-memory");
}

#[tokio::test]
async fn create_ingredient_returns_created_with_formatted_fields() {
    let state = build_in_memory_app_state();

    let (status, Json(created)) =
        create_ingredient_handler(State(state.clone()), Json(ingredient_request("Flour")))
            .await
            .unwrap_or_else(|_| unreachable!());

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created.id, Some(1));
    assert_eq!(created.purchasing_cost, "15.50");
    assert_eq!(created.amount, "10.50");
    assert_eq!(created.unit_of_measure, "LB");

    let Json(listed) = list_ingredients_handler(State(state))
        .await
        .unwrap_or_else(|_| unreachable!());
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn invalid_ingredient_is_bad_request_with_joined_message() {
    let state = build_in_memory_app_state();
    let request: IngredientRequest = serde_json::from_value(json!({
        "name": "",
        "purchasingCost": "cheap",
        "unitOfMeasure": "g"
    }))
    .unwrap_or_else(|_| unreachable!());

    let Err(error) = create_ingredient_handler(State(state), Json(request)).await else {
        unreachable!()
    };
    let (status, body) = error_body(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "message": "Name is empty., Purchasing cost must be a number., Amount is null." })
    );
}

#[tokio::test]
async fn ingredient_lookups_map_missing_and_empty_names() {
    let state = build_in_memory_app_state();

    let Err(missing) = get_ingredient_handler(State(state.clone()), Path(3)).await else {
        unreachable!()
    };
    let (status, body) = error_body(missing).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Ingredient not found." }));

    let Err(empty) =
        search_ingredients_handler(State(state), Query(NameQuery::default())).await
    else {
        unreachable!()
    };
    assert_eq!(empty.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn ingredient_update_and_delete_round() {
    let state = build_in_memory_app_state();
    let created =
        create_ingredient_handler(State(state.clone()), Json(ingredient_request("Sugar"))).await;
    assert!(created.is_ok());

    let mut request = ingredient_request("Brown Sugar");
    request.id = Some(99);
    let Json(updated) = update_ingredient_handler(State(state.clone()), Path(1), Json(request))
        .await
        .unwrap_or_else(|_| unreachable!());
    assert_eq!(updated.id, Some(1));
    assert_eq!(updated.name, "Brown Sugar");

    let Json(found) = search_ingredients_handler(
        State(state.clone()),
        Query(NameQuery {
            name: Some("brown sugar".to_owned()),
        }),
    )
    .await
    .unwrap_or_else(|_| unreachable!());
    assert_eq!(found.len(), 1);

    let deleted = delete_ingredient_handler(State(state.clone()), Path(1)).await;
    assert_eq!(deleted.ok(), Some(StatusCode::NO_CONTENT));

    let Err(gone) = delete_ingredient_handler(State(state), Path(1)).await else {
        unreachable!()
    };
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_product_derives_sale_price() {
    let state = build_in_memory_app_state();

    let (status, Json(created)) =
        create_product_handler(State(state), Json(product_request("Root Beer")))
            .await
            .unwrap_or_else(|_| unreachable!());

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created.product_type, "Soda");
    assert_eq!(created.sale_price, "30.00");
    assert_eq!(created.allergen_list, ["Dairy"]);
}

#[tokio::test]
async fn duplicate_product_name_is_conflict() {
    let state = seeded_state().await;

    let Err(error) = create_product_handler(State(state), Json(product_request("COLA"))).await
    else {
        unreachable!()
    };
    let (status, body) = error_body(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body,
        json!({ "message": "Product with matching name already exists." })
    );
}

#[tokio::test]
async fn all_null_product_reports_every_field() {
    let state = build_in_memory_app_state();

    let Err(error) = create_product_handler(State(state), Json(ProductRequest::default())).await
    else {
        unreachable!()
    };
    let (status, body) = error_body(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "-Description is null.-Name is null.-Classification is null.-Type is null.-Cost is null.-Markup is null.-IngredientsList is null.-AllergenList is null."
    );
}

#[tokio::test]
async fn product_update_forces_path_id_and_reports_missing_rows() {
    let state = seeded_state().await;

    let mut request = product_request("Diet Cola");
    request.id = Some(42);
    let Json(updated) = update_product_handler(State(state.clone()), Path(1), Json(request))
        .await
        .unwrap_or_else(|_| unreachable!());
    assert_eq!(updated.id, Some(1));

    let Err(missing) =
        update_product_handler(State(state), Path(5), Json(product_request("Ginger Ale"))).await
    else {
        unreachable!()
    };
    let (status, body) = error_body(missing).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "The Product was not found" }));
}

#[tokio::test]
async fn product_reads_and_delete() {
    let state = seeded_state().await;

    let Json(listed) = list_products_handler(State(state.clone()))
        .await
        .unwrap_or_else(|_| unreachable!());
    assert_eq!(listed.len(), 1);

    let Json(found) = get_product_handler(State(state.clone()), Path(1))
        .await
        .unwrap_or_else(|_| unreachable!());
    assert_eq!(found.name, "Cola");

    let Err(unknown_name) = search_products_handler(
        State(state.clone()),
        Query(NameQuery {
            name: Some("Water".to_owned()),
        }),
    )
    .await
    else {
        unreachable!()
    };
    let (status, body) = error_body(unknown_name).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Product not found" }));

    let deleted = delete_product_handler(State(state.clone()), Path(1)).await;
    assert_eq!(deleted.ok(), Some(StatusCode::NO_CONTENT));

    let Err(gone) = delete_product_handler(State(state), Path(1)).await else {
        unreachable!()
    };
    let (status, body) = error_body(gone).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "message": "A product with this ID was not found and could not be deleted." })
    );
}

#[tokio::test]
async fn product_numbers_are_accepted_for_cost_and_markup() {
    let state = build_in_memory_app_state();
    let request: ProductRequest = serde_json::from_value(json!({
        "description": "Brown sugar oat latte",
        "name": "Oat Latte",
        "ingredientsList": ["Espresso", "Oat Milk"],
        "classification": "Drink",
        "type": "coffee",
        "cost": 10,
        "markup": 0.125,
        "allergenList": []
    }))
    .unwrap_or_else(|_| unreachable!());

    let (status, Json(created)) = create_product_handler(State(state), Json(request))
        .await
        .unwrap_or_else(|_| unreachable!());

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created.cost, "10.00");
    assert_eq!(created.markup, "0.13");
    assert_eq!(created.sale_price, "11.25");
}
