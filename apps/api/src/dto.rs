mod common;
mod ingredients;
mod products;

pub use common::{HealthResponse, NameQuery};
pub use ingredients::{IngredientRequest, IngredientResponse};
pub use products::{ProductRequest, ProductResponse};
