use std::collections::BTreeMap;

use async_trait::async_trait;
use larder_application::ProductRepository;
use larder_core::{AppError, AppResult};
use larder_domain::{DUPLICATE_PRODUCT_NAME, Product, ProductId, unique_name_conflict};
use tokio::sync::RwLock;

/// In-memory product repository used for local runs and tests.
///
/// Mirrors the database's case-insensitive unique name index.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    state: RwLock<ProductTable>,
}

#[derive(Debug, Default)]
struct ProductTable {
    rows: BTreeMap<ProductId, Product>,
    last_id: i64,
}

impl InMemoryProductRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> AppResult<Vec<Product>> {
        Ok(self.state.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ProductId) -> AppResult<Option<Product>> {
        Ok(self.state.read().await.rows.get(&id).cloned())
    }

    async fn find_by_name_ignore_case(&self, name: &str) -> AppResult<Vec<Product>> {
        let wanted = name.to_lowercase();
        let state = self.state.read().await;

        Ok(state
            .rows
            .values()
            .filter(|product| product.name().to_lowercase() == wanted)
            .cloned()
            .collect())
    }

    async fn save(&self, product: Product) -> AppResult<Product> {
        let mut state = self.state.write().await;

        let id = match product.id() {
            Some(id) => id,
            None => ProductId::new(state.last_id + 1),
        };

        let others = state.rows.values().filter(|stored| stored.id() != Some(id));
        if unique_name_conflict(product.name(), others).is_some() {
            return Err(AppError::Conflict(DUPLICATE_PRODUCT_NAME.to_owned()));
        }

        state.last_id = state.last_id.max(id.as_i64());
        let stored = product.with_id(id);
        state.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: ProductId) -> AppResult<()> {
        self.state.write().await.rows.remove(&id);
        Ok(())
    }
}
