use async_trait::async_trait;

use larder_core::AppResult;
use larder_domain::{Ingredient, IngredientId};

/// Repository port for ingredient persistence.
#[async_trait]
pub trait IngredientRepository: Send + Sync {
    /// Lists every ingredient ordered by identifier.
    async fn find_all(&self) -> AppResult<Vec<Ingredient>>;

    /// Returns one ingredient by identifier.
    async fn find_by_id(&self, id: IngredientId) -> AppResult<Option<Ingredient>>;

    /// Lists ingredients whose name equals `name`, ignoring case.
    async fn find_by_name_ignore_case(&self, name: &str) -> AppResult<Vec<Ingredient>>;

    /// Inserts the ingredient when it has no identifier, replaces it otherwise.
    ///
    /// Returns the stored ingredient with its identifier assigned.
    async fn save(&self, ingredient: Ingredient) -> AppResult<Ingredient>;

    /// Removes one ingredient by identifier.
    async fn delete_by_id(&self, id: IngredientId) -> AppResult<()>;
}
