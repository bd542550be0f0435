//! In-memory product storage.
//!
//! This module provides:
//! - The `ProductStore` that owns every product record
//! - A shared handle type injected into handlers as router state

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::models::product::Product;

/// Shared handle to the product store.
///
/// Instead of writing `Arc<ProductStore>` everywhere, we can use `SharedStore`.
pub type SharedStore = Arc<ProductStore>;

/// Ordered collection of products, guarded by a single lock.
///
/// Insertion order is preserved: new products are appended and removal
/// shifts the remaining records without reordering them. The collection is
/// only reachable through [`ProductStore::lock`], so every operation in
/// `services::product_service` runs as one critical section.
#[derive(Debug, Default)]
pub struct ProductStore {
    products: Mutex<Vec<Product>>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire exclusive access to the collection.
    ///
    /// Callers must not await anything else while holding the guard.
    pub(crate) async fn lock(&self) -> MutexGuard<'_, Vec<Product>> {
        self.products.lock().await
    }

    /// Number of stored products across all merchants.
    pub async fn len(&self) -> usize {
        self.products.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Create an empty store ready to be shared with the router.
pub fn create_store() -> SharedStore {
    Arc::new(ProductStore::new())
}
