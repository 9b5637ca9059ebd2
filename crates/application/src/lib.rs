//! Application services and repository ports.

#![forbid(unsafe_code)]

mod ingredient_ports;
mod ingredient_service;
mod product_ports;
mod product_service;

pub use ingredient_ports::IngredientRepository;
pub use ingredient_service::IngredientService;
pub use product_ports::ProductRepository;
pub use product_service::ProductService;
