use std::sync::Arc;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

/// Ids arrive off the wire as `i64`; the products table keys on `i32`.
/// An integer outside that range cannot identify a row, so it reads as
/// not-found without touching the store.
fn narrow_id(id: i64) -> ProductResult<i32> {
    i32::try_from(id).map_err(|_| ProductError::NotFound(id))
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all products
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Get a product by ID
    pub async fn get_product(&self, id: i64) -> ProductResult<Product> {
        self.repository
            .get_by_id(narrow_id(id)?)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a new product; availability defaults to true
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        self.repository.create(input).await
    }

    /// Replace every mutable field of an existing product
    pub async fn update_product(&self, id: i64, input: UpdateProduct) -> ProductResult<Product> {
        self.repository
            .update(narrow_id(id)?, input)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Flip the availability flag of an existing product
    pub async fn toggle_availability(&self, id: i64) -> ProductResult<Product> {
        let key = narrow_id(id)?;
        let product = self.get_product(id).await?;

        self.repository
            .set_availability(key, !product.availability)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Delete a product
    pub async fn delete_product(&self, id: i64) -> ProductResult<()> {
        let deleted = self.repository.delete(narrow_id(id)?).await?;

        if !deleted {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }
}
