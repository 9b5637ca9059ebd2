use async_trait::async_trait;
use larder_application::IngredientRepository;
use larder_core::{AppError, AppResult};
use larder_domain::{Ingredient, IngredientDraft, IngredientId};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use tracing::debug;

use crate::postgres_write_error::map_write_error;

/// PostgreSQL-backed ingredient repository.
#[derive(Clone)]
pub struct PostgresIngredientRepository {
    pool: PgPool,
}

impl PostgresIngredientRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct IngredientRow {
    id: i64,
    active: bool,
    name: String,
    purchasing_cost: Decimal,
    amount: Decimal,
    unit_of_measure: String,
    allergens: Vec<String>,
}

impl IngredientRow {
    fn into_ingredient(self) -> AppResult<Ingredient> {
        let id = self.id;
        Ingredient::try_from(IngredientDraft {
            id: Some(IngredientId::new(id)),
            active: self.active,
            name: Some(self.name),
            purchasing_cost: Some(self.purchasing_cost.to_string()),
            amount: Some(self.amount.to_string()),
            unit_of_measure: Some(self.unit_of_measure),
            allergens: self.allergens,
        })
        .map_err(|error| {
            AppError::Internal(format!(
                "stored ingredient '{id}' failed validation: {}",
                error.message()
            ))
        })
    }
}

fn into_ingredients(rows: Vec<IngredientRow>) -> AppResult<Vec<Ingredient>> {
    rows.into_iter().map(IngredientRow::into_ingredient).collect()
}

#[async_trait]
impl IngredientRepository for PostgresIngredientRepository {
    async fn find_all(&self) -> AppResult<Vec<Ingredient>> {
        let rows = sqlx::query_as::<_, IngredientRow>(
            r#"
            SELECT id, active, name, purchasing_cost, amount, unit_of_measure, allergens
            FROM ingredients
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list ingredients: {error}")))?;

        into_ingredients(rows)
    }

    async fn find_by_id(&self, id: IngredientId) -> AppResult<Option<Ingredient>> {
        let row = sqlx::query_as::<_, IngredientRow>(
            r#"
            SELECT id, active, name, purchasing_cost, amount, unit_of_measure, allergens
            FROM ingredients
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to find ingredient '{id}': {error}"))
        })?;

        row.map(IngredientRow::into_ingredient).transpose()
    }

    async fn find_by_name_ignore_case(&self, name: &str) -> AppResult<Vec<Ingredient>> {
        let rows = sqlx::query_as::<_, IngredientRow>(
            r#"
            SELECT id, active, name, purchasing_cost, amount, unit_of_measure, allergens
            FROM ingredients
            WHERE lower(name) = lower($1)
            ORDER BY id
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to find ingredients named '{name}': {error}"
            ))
        })?;

        into_ingredients(rows)
    }

    async fn save(&self, ingredient: Ingredient) -> AppResult<Ingredient> {
        let row = match ingredient.id() {
            None => sqlx::query_as::<_, IngredientRow>(
                r#"
                INSERT INTO ingredients
                    (active, name, purchasing_cost, amount, unit_of_measure, allergens)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id, active, name, purchasing_cost, amount, unit_of_measure, allergens
                "#,
            )
            .bind(ingredient.active())
            .bind(ingredient.name())
            .bind(ingredient.purchasing_cost())
            .bind(ingredient.amount())
            .bind(ingredient.unit_of_measure())
            .bind(ingredient.allergens())
            .fetch_one(&self.pool)
            .await
            .map_err(|error| {
                map_write_error(
                    error,
                    format!("failed to insert ingredient '{}'", ingredient.name()),
                    None,
                )
            })?,
            Some(id) => sqlx::query_as::<_, IngredientRow>(
                r#"
                UPDATE ingredients
                SET active = $2,
                    name = $3,
                    purchasing_cost = $4,
                    amount = $5,
                    unit_of_measure = $6,
                    allergens = $7
                WHERE id = $1
                RETURNING id, active, name, purchasing_cost, amount, unit_of_measure, allergens
                "#,
            )
            .bind(id.as_i64())
            .bind(ingredient.active())
            .bind(ingredient.name())
            .bind(ingredient.purchasing_cost())
            .bind(ingredient.amount())
            .bind(ingredient.unit_of_measure())
            .bind(ingredient.allergens())
            .fetch_optional(&self.pool)
            .await
            .map_err(|error| {
                map_write_error(error, format!("failed to update ingredient '{id}'"), None)
            })?
            .ok_or_else(|| AppError::NotFound(format!("ingredient '{id}' does not exist")))?,
        };

        debug!(ingredient_id = row.id, "ingredient row saved");
        row.into_ingredient()
    }

    async fn delete_by_id(&self, id: IngredientId) -> AppResult<()> {
        sqlx::query("DELETE FROM ingredients WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|error| {
                AppError::Internal(format!("failed to delete ingredient '{id}': {error}"))
            })?;

        Ok(())
    }
}
