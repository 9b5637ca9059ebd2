use axum::Router;
use axum::routing::get;
use larder_core::AppError;
use tower_http::trace::TraceLayer;

use crate::handlers::{health, ingredients, products};
use crate::state::AppState;

mod cors;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let ingredient_routes = Router::new()
        .route(
            "/api/ingredients",
            get(ingredients::list_ingredients_handler)
                .post(ingredients::create_ingredient_handler),
        )
        .route(
            "/api/ingredients/search",
            get(ingredients::search_ingredients_handler),
        )
        .route(
            "/api/ingredients/{id}",
            get(ingredients::get_ingredient_handler)
                .put(ingredients::update_ingredient_handler)
                .delete(ingredients::delete_ingredient_handler),
        );

    let product_routes = Router::new()
        .route(
            "/api/products",
            get(products::list_products_handler).post(products::create_product_handler),
        )
        .route(
            "/api/products/search",
            get(products::search_products_handler),
        )
        .route(
            "/api/products/{id}",
            get(products::get_product_handler)
                .put(products::update_product_handler)
                .delete(products::delete_product_handler),
        );

    Ok(Router::new()
        .route("/health", get(health::health_handler))
        .merge(ingredient_routes)
        .merge(product_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors::build_cors_layer(frontend_url)?)
        .with_state(app_state))
}
