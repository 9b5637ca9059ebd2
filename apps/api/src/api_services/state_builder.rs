use std::sync::Arc;

use larder_application::{
    IngredientRepository, IngredientService, ProductRepository, ProductService,
};
use larder_infrastructure::{
    InMemoryIngredientRepository, InMemoryProductRepository, PostgresIngredientRepository,
    PostgresProductRepository,
};
use sqlx::PgPool;

use crate::state::{AppState, StorageBackend};

/// Wires services to PostgreSQL when a pool is available, to memory otherwise.
pub fn build_app_state(pool: Option<PgPool>) -> AppState {
    let Some(pool) = pool else {
        return build_in_memory_app_state();
    };

    let ingredient_repository: Arc<dyn IngredientRepository> =
        Arc::new(PostgresIngredientRepository::new(pool.clone()));
    let product_repository: Arc<dyn ProductRepository> =
        Arc::new(PostgresProductRepository::new(pool));

    AppState {
        ingredient_service: IngredientService::new(ingredient_repository),
        product_service: ProductService::new(product_repository),
        storage: StorageBackend::Postgres,
    }
}

pub fn build_in_memory_app_state() -> AppState {
    let ingredient_repository: Arc<dyn IngredientRepository> =
        Arc::new(InMemoryIngredientRepository::new());
    let product_repository: Arc<dyn ProductRepository> =
        Arc::new(InMemoryProductRepository::new());

    AppState {
        ingredient_service: IngredientService::new(ingredient_repository),
        product_service: ProductService::new(product_repository),
        storage: StorageBackend::InMemory,
    }
}
