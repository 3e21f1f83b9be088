use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List all products
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Create a new product; the store assigns the id
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Replace every mutable field of an existing product.
    /// Returns `None` when the id has no matching row.
    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Set the availability flag of an existing product.
    /// Returns `None` when the id has no matching row.
    async fn set_availability(&self, id: i32, availability: bool)
        -> ProductResult<Option<Product>>;

    /// Delete a product by ID, returning whether a row was removed
    async fn delete(&self, id: i32) -> ProductResult<bool>;
}

#[derive(Debug, Default)]
struct InMemoryState {
    products: HashMap<i32, Product>,
    next_id: i32,
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    state: Arc<RwLock<InMemoryState>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let state = self.state.read().await;

        let mut products: Vec<Product> = state.products.values().cloned().collect();
        products.sort_by_key(|p| p.id);

        Ok(products)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let state = self.state.read().await;
        Ok(state.products.get(&id).cloned())
    }

    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut state = self.state.write().await;

        state.next_id += 1;
        let product = Product {
            id: state.next_id,
            name: input.name,
            price: input.price,
            availability: true,
        };
        state.products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let mut state = self.state.write().await;

        let Some(product) = state.products.get_mut(&id) else {
            return Ok(None);
        };

        product.name = input.name;
        product.price = input.price;
        product.availability = input.availability;

        tracing::info!(product_id = id, "Updated product");
        Ok(Some(product.clone()))
    }

    async fn set_availability(
        &self,
        id: i32,
        availability: bool,
    ) -> ProductResult<Option<Product>> {
        let mut state = self.state.write().await;

        let Some(product) = state.products.get_mut(&id) else {
            return Ok(None);
        };

        product.availability = availability;

        tracing::info!(product_id = id, availability, "Set product availability");
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut state = self.state.write().await;

        if state.products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, price: f64) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_product() {
        let repo = InMemoryProductRepository::new();

        let product = repo.create(input("Mouse - Testing", 50.0)).await.unwrap();
        assert_eq!(product.name, "Mouse - Testing");
        assert!(product.availability);

        let fetched = repo.get_by_id(product.id).await.unwrap();
        assert_eq!(fetched, Some(product));
    }

    #[tokio::test]
    async fn test_ids_are_sequential_and_list_is_ordered() {
        let repo = InMemoryProductRepository::new();

        let first = repo.create(input("Keyboard", 30.0)).await.unwrap();
        let second = repo.create(input("Monitor", 200.0)).await.unwrap();
        assert!(second.id > first.id);

        let products = repo.list().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, first.id);
        assert_eq!(products[1].id, second.id);
    }

    #[tokio::test]
    async fn test_update_missing_product_returns_none() {
        let repo = InMemoryProductRepository::new();

        let result = repo
            .update(
                2000,
                UpdateProduct {
                    name: "Mouse".to_string(),
                    price: 10.0,
                    availability: false,
                },
            )
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let repo = InMemoryProductRepository::new();

        let product = repo.create(input("Mouse", 10.0)).await.unwrap();
        assert!(repo.delete(product.id).await.unwrap());
        assert!(!repo.delete(product.id).await.unwrap());
        assert_eq!(repo.get_by_id(product.id).await.unwrap(), None);
    }
}
