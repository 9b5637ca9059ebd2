use async_trait::async_trait;
use larder_application::ProductRepository;
use larder_core::{AppError, AppResult};
use larder_domain::{DUPLICATE_PRODUCT_NAME, Product, ProductDraft, ProductId};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use tracing::debug;

use crate::postgres_write_error::map_write_error;

/// PostgreSQL-backed product repository.
///
/// The sale price is stored alongside cost and markup and read back as stored.
#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    active: bool,
    description: String,
    name: String,
    vendor_id: Option<String>,
    ingredients_list: Vec<String>,
    classification: String,
    product_type: String,
    cost: Decimal,
    markup: Decimal,
    sale_price: Decimal,
    allergen_list: Vec<String>,
}

impl ProductRow {
    fn into_product(self) -> AppResult<Product> {
        let id = self.id;
        let sale_price = self.sale_price;
        Product::try_from(ProductDraft {
            id: Some(ProductId::new(id)),
            active: self.active,
            description: Some(self.description),
            name: Some(self.name),
            vendor_id: self.vendor_id,
            ingredients_list: Some(self.ingredients_list),
            classification: Some(self.classification),
            product_type: Some(self.product_type),
            cost: Some(self.cost.to_string()),
            markup: Some(self.markup.to_string()),
            allergen_list: Some(self.allergen_list),
        })
        .map(|product| product.with_sale_price(sale_price))
        .map_err(|error| {
            AppError::Internal(format!(
                "stored product '{id}' failed validation: {}",
                error.message()
            ))
        })
    }
}

fn into_products(rows: Vec<ProductRow>) -> AppResult<Vec<Product>> {
    rows.into_iter().map(ProductRow::into_product).collect()
}

fn allergen_labels(product: &Product) -> Vec<String> {
    product
        .allergen_list()
        .iter()
        .map(|allergen| allergen.as_str().to_owned())
        .collect()
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_all(&self) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, active, description, name, vendor_id, ingredients_list,
                   classification, product_type, cost, markup, sale_price, allergen_list
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list products: {error}")))?;

        into_products(rows)
    }

    async fn find_by_id(&self, id: ProductId) -> AppResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, active, description, name, vendor_id, ingredients_list,
                   classification, product_type, cost, markup, sale_price, allergen_list
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find product '{id}': {error}")))?;

        row.map(ProductRow::into_product).transpose()
    }

    async fn find_by_name_ignore_case(&self, name: &str) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, active, description, name, vendor_id, ingredients_list,
                   classification, product_type, cost, markup, sale_price, allergen_list
            FROM products
            WHERE lower(name) = lower($1)
            ORDER BY id
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to find products named '{name}': {error}"))
        })?;

        into_products(rows)
    }

    async fn save(&self, product: Product) -> AppResult<Product> {
        let allergens = allergen_labels(&product);

        let row = match product.id() {
            None => sqlx::query_as::<_, ProductRow>(
                r#"
                INSERT INTO products (
                    active, description, name, vendor_id, ingredients_list,
                    classification, product_type, cost, markup, sale_price, allergen_list
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                RETURNING id, active, description, name, vendor_id, ingredients_list,
                          classification, product_type, cost, markup, sale_price, allergen_list
                "#,
            )
            .bind(product.active())
            .bind(product.description())
            .bind(product.name())
            .bind(product.vendor_id())
            .bind(product.ingredients_list())
            .bind(product.classification().as_str())
            .bind(product.product_type().as_str())
            .bind(product.cost())
            .bind(product.markup())
            .bind(product.sale_price())
            .bind(allergens.as_slice())
            .fetch_one(&self.pool)
            .await
            .map_err(|error| {
                map_write_error(
                    error,
                    format!("failed to insert product '{}'", product.name()),
                    Some(DUPLICATE_PRODUCT_NAME),
                )
            })?,
            Some(id) => sqlx::query_as::<_, ProductRow>(
                r#"
                UPDATE products
                SET active = $2,
                    description = $3,
                    name = $4,
                    vendor_id = $5,
                    ingredients_list = $6,
                    classification = $7,
                    product_type = $8,
                    cost = $9,
                    markup = $10,
                    sale_price = $11,
                    allergen_list = $12
                WHERE id = $1
                RETURNING id, active, description, name, vendor_id, ingredients_list,
                          classification, product_type, cost, markup, sale_price, allergen_list
                "#,
            )
            .bind(id.as_i64())
            .bind(product.active())
            .bind(product.description())
            .bind(product.name())
            .bind(product.vendor_id())
            .bind(product.ingredients_list())
            .bind(product.classification().as_str())
            .bind(product.product_type().as_str())
            .bind(product.cost())
            .bind(product.markup())
            .bind(product.sale_price())
            .bind(allergens.as_slice())
            .fetch_optional(&self.pool)
            .await
            .map_err(|error| {
                map_write_error(
                    error,
                    format!("failed to update product '{id}'"),
                    Some(DUPLICATE_PRODUCT_NAME),
                )
            })?
            .ok_or_else(|| AppError::NotFound(format!("product '{id}' does not exist")))?,
        };

        debug!(product_id = row.id, "product row saved");
        row.into_product()
    }

    async fn delete_by_id(&self, id: ProductId) -> AppResult<()> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|error| {
                AppError::Internal(format!("failed to delete product '{id}': {error}"))
            })?;

        Ok(())
    }
}
