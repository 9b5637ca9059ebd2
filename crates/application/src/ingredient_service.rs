use std::sync::Arc;

use larder_core::{AppError, AppResult};
use larder_domain::{Ingredient, IngredientDraft, IngredientId, format_ingredient};

use crate::ingredient_ports::IngredientRepository;

const INGREDIENT_NOT_FOUND: &str = "Ingredient not found.";
const EDITED_INGREDIENT_NOT_FOUND: &str = "Ingredient was not found.";
const EMPTY_NAME_QUERY: &str = "Name value is empty";

/// Application service for ingredient catalog operations.
#[derive(Clone)]
pub struct IngredientService {
    repository: Arc<dyn IngredientRepository>,
}

impl IngredientService {
    /// Creates a new ingredient service.
    #[must_use]
    pub fn new(repository: Arc<dyn IngredientRepository>) -> Self {
        Self { repository }
    }

    /// Lists all ingredients.
    pub async fn list_ingredients(&self) -> AppResult<Vec<Ingredient>> {
        self.repository.find_all().await
    }

    /// Returns one ingredient by identifier.
    pub async fn get_ingredient(&self, id: IngredientId) -> AppResult<Ingredient> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(INGREDIENT_NOT_FOUND.to_owned()))
    }

    /// Returns every ingredient named `name`, ignoring case.
    pub async fn find_ingredients_by_name(&self, name: &str) -> AppResult<Vec<Ingredient>> {
        if name.trim().is_empty() {
            return Err(AppError::Validation(EMPTY_NAME_QUERY.to_owned()));
        }

        let ingredients = self.repository.find_by_name_ignore_case(name).await?;
        if ingredients.is_empty() {
            return Err(AppError::NotFound(INGREDIENT_NOT_FOUND.to_owned()));
        }

        Ok(ingredients)
    }

    /// Formats, validates and stores a new ingredient.
    ///
    /// Any identifier in the draft is discarded; storage assigns one.
    pub async fn create_ingredient(&self, draft: IngredientDraft) -> AppResult<Ingredient> {
        let ingredient = Ingredient::try_from(format_ingredient(IngredientDraft {
            id: None,
            ..draft
        }))?;

        self.repository.save(ingredient).await
    }

    /// Replaces an existing ingredient, keeping the identifier from the path.
    pub async fn edit_ingredient(
        &self,
        id: IngredientId,
        draft: IngredientDraft,
    ) -> AppResult<Ingredient> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(EDITED_INGREDIENT_NOT_FOUND.to_owned()));
        }

        let ingredient = Ingredient::try_from(format_ingredient(draft))?.with_id(id);
        self.repository.save(ingredient).await
    }

    /// Deletes an existing ingredient.
    pub async fn delete_ingredient(&self, id: IngredientId) -> AppResult<()> {
        self.get_ingredient(id).await?;
        self.repository.delete_by_id(id).await
    }
}
