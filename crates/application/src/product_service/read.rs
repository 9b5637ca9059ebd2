use super::*;

impl ProductService {
    /// Lists all products.
    pub async fn list_products(&self) -> AppResult<Vec<Product>> {
        self.repository.find_all().await
    }

    /// Returns one product by identifier.
    pub async fn get_product(&self, id: ProductId) -> AppResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(PRODUCT_NOT_FOUND.to_owned()))
    }

    /// Returns every product named `name`, ignoring case.
    pub async fn find_products_by_name(&self, name: &str) -> AppResult<Vec<Product>> {
        if name.trim().is_empty() {
            return Err(AppError::Validation(EMPTY_NAME_QUERY.to_owned()));
        }

        let products = self.repository.find_by_name_ignore_case(name).await?;
        if products.is_empty() {
            return Err(AppError::NotFound(PRODUCT_NAME_NOT_FOUND.to_owned()));
        }

        Ok(products)
    }
}
