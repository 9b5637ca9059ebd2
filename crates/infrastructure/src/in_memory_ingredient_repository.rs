use std::collections::BTreeMap;

use async_trait::async_trait;
use larder_application::IngredientRepository;
use larder_core::AppResult;
use larder_domain::{Ingredient, IngredientId};
use tokio::sync::RwLock;

/// In-memory ingredient repository used for local runs and tests.
#[derive(Debug, Default)]
pub struct InMemoryIngredientRepository {
    state: RwLock<IngredientTable>,
}

#[derive(Debug, Default)]
struct IngredientTable {
    rows: BTreeMap<IngredientId, Ingredient>,
    last_id: i64,
}

impl InMemoryIngredientRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IngredientRepository for InMemoryIngredientRepository {
    async fn find_all(&self) -> AppResult<Vec<Ingredient>> {
        Ok(self.state.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: IngredientId) -> AppResult<Option<Ingredient>> {
        Ok(self.state.read().await.rows.get(&id).cloned())
    }

    async fn find_by_name_ignore_case(&self, name: &str) -> AppResult<Vec<Ingredient>> {
        let wanted = name.to_lowercase();
        let state = self.state.read().await;

        Ok(state
            .rows
            .values()
            .filter(|ingredient| ingredient.name().to_lowercase() == wanted)
            .cloned()
            .collect())
    }

    async fn save(&self, ingredient: Ingredient) -> AppResult<Ingredient> {
        let mut state = self.state.write().await;

        let id = match ingredient.id() {
            Some(id) => id,
            None => IngredientId::new(state.last_id + 1),
        };
        state.last_id = state.last_id.max(id.as_i64());

        let stored = ingredient.with_id(id);
        state.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: IngredientId) -> AppResult<()> {
        self.state.write().await.rows.remove(&id);
        Ok(())
    }
}
