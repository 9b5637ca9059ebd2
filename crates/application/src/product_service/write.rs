use super::*;

impl ProductService {
    /// Validates, prices and stores a new product.
    ///
    /// Any identifier in the draft is discarded; storage assigns one.
    pub async fn create_product(&self, draft: ProductDraft) -> AppResult<Product> {
        let product = Product::try_from(ProductDraft { id: None, ..draft })?;
        self.ensure_unique_name(product.name(), None).await?;

        self.repository.save(product).await
    }

    /// Replaces an existing product, keeping the identifier from the path.
    pub async fn edit_product(&self, id: ProductId, draft: ProductDraft) -> AppResult<Product> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(EDITED_PRODUCT_NOT_FOUND.to_owned()));
        }

        let product = Product::try_from(draft)?.with_id(id);
        self.ensure_unique_name(product.name(), Some(id)).await?;

        self.repository.save(product).await
    }

    /// Deletes an existing product.
    pub async fn delete_product(&self, id: ProductId) -> AppResult<()> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(DELETED_PRODUCT_NOT_FOUND.to_owned()));
        }

        self.repository.delete_by_id(id).await
    }
}
