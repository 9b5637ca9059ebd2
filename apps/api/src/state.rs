use larder_application::{IngredientService, ProductService};

/// Where catalog records are kept for this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    InMemory,
}

impl StorageBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::InMemory => "in-memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub ingredient_service: IngredientService,
    pub product_service: ProductService,
    pub storage: StorageBackend,
}
