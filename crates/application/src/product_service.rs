use std::sync::Arc;

use larder_core::{AppError, AppResult};
use larder_domain::{Product, ProductDraft, ProductId, unique_name_conflict};

use crate::product_ports::ProductRepository;

mod read;
mod write;

const PRODUCT_NOT_FOUND: &str = "Product not found.";
const PRODUCT_NAME_NOT_FOUND: &str = "Product not found";
const EDITED_PRODUCT_NOT_FOUND: &str = "The Product was not found";
const DELETED_PRODUCT_NOT_FOUND: &str =
    "A product with this ID was not found and could not be deleted.";
const EMPTY_NAME_QUERY: &str = "Name value is empty";

/// Application service for product catalog operations.
///
/// Writes validate the draft, then enforce case-insensitive name uniqueness
/// across stored products before anything is persisted.
#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    /// Creates a new product service.
    #[must_use]
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    async fn ensure_unique_name(&self, name: &str, exclude: Option<ProductId>) -> AppResult<()> {
        let existing = self.repository.find_all().await?;
        let others = existing
            .iter()
            .filter(|product| exclude.is_none() || product.id() != exclude);

        match unique_name_conflict(name, others) {
            Some(message) => Err(AppError::Conflict(message.to_owned())),
            None => Ok(()),
        }
    }
}
