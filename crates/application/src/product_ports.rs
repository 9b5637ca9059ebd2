use async_trait::async_trait;

use larder_core::AppResult;
use larder_domain::{Product, ProductId};

/// Repository port for product persistence.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Lists every product ordered by identifier.
    async fn find_all(&self) -> AppResult<Vec<Product>>;

    /// Returns one product by identifier.
    async fn find_by_id(&self, id: ProductId) -> AppResult<Option<Product>>;

    /// Lists products whose name equals `name`, ignoring case.
    async fn find_by_name_ignore_case(&self, name: &str) -> AppResult<Vec<Product>>;

    /// Inserts the product when it has no identifier, replaces it otherwise.
    ///
    /// Returns the stored product with its identifier assigned.
    async fn save(&self, product: Product) -> AppResult<Product>;

    /// Removes one product by identifier.
    async fn delete_by_id(&self, id: ProductId) -> AppResult<()>;
}
