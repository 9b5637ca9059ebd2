//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_ingredient_repository;
mod in_memory_product_repository;
mod postgres_ingredient_repository;
mod postgres_product_repository;
mod postgres_write_error;

pub use in_memory_ingredient_repository::InMemoryIngredientRepository;
pub use in_memory_product_repository::InMemoryProductRepository;
pub use postgres_ingredient_repository::PostgresIngredientRepository;
pub use postgres_product_repository::PostgresProductRepository;
