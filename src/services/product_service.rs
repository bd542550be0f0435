//! Product service - Core logic for merchant-scoped product management.
//!
//! This service handles:
//! - Merchant isolation for listings
//! - Existence and ownership checks for id lookups
//! - Partial updates and order-preserving removal
//!
//! # Atomicity Guarantees
//!
//! Each function takes the store lock once and holds it for the whole
//! scan-and-mutate step, so concurrent requests never observe a half-applied
//! change.

use crate::{
    error::AppError,
    models::product::{NewProduct, Product, ProductPatch},
    store::ProductStore,
};

/// Position of the product with `id`, provided `merchant_id` owns it.
///
/// Existence is checked before ownership: an unknown id is always
/// `ProductNotFound`, a known id with the wrong merchant is `Unauthorized`.
fn locate_owned(products: &[Product], id: &str, merchant_id: &str) -> Result<usize, AppError> {
    let index = products
        .iter()
        .position(|p| p.id == id)
        .ok_or(AppError::ProductNotFound)?;

    if !products[index].is_owned_by(merchant_id) {
        return Err(AppError::Unauthorized);
    }

    Ok(index)
}

/// List every product owned by `merchant_id`, in insertion order.
///
/// # Errors
///
/// - `MissingMerchantId`: `merchant_id` is empty
/// - `NoProductsForMerchant`: the merchant owns nothing
pub async fn list_products(store: &ProductStore, merchant_id: &str) -> Result<Vec<Product>, AppError> {
    if merchant_id.is_empty() {
        return Err(AppError::MissingMerchantId);
    }

    let products = store.lock().await;
    let owned: Vec<Product> = products
        .iter()
        .filter(|p| p.is_owned_by(merchant_id))
        .cloned()
        .collect();

    if owned.is_empty() {
        return Err(AppError::NoProductsForMerchant);
    }

    Ok(owned)
}

/// Append a new product owned by `merchant_id`.
///
/// The id, owner and creation time are assigned here; the caller only
/// supplies name, description and price.
///
/// # Errors
///
/// - `MissingMerchantId`: `merchant_id` is empty
pub async fn create_product(
    store: &ProductStore,
    merchant_id: &str,
    fields: NewProduct,
) -> Result<Product, AppError> {
    if merchant_id.is_empty() {
        return Err(AppError::MissingMerchantId);
    }

    let product = Product::new(merchant_id, fields);

    store.lock().await.push(product.clone());

    tracing::info!(product_id = %product.id, merchant_id, "product created");

    Ok(product)
}

/// Fetch a single product.
///
/// # Errors
///
/// - `ProductNotFound`: no product has this id
/// - `Unauthorized`: the product belongs to another merchant
pub async fn get_product(store: &ProductStore, id: &str, merchant_id: &str) -> Result<Product, AppError> {
    let products = store.lock().await;
    let index = locate_owned(&products, id, merchant_id)?;

    Ok(products[index].clone())
}

/// Merge `patch` into the product and return the stored result.
///
/// # Errors
///
/// - `ProductNotFound`: no product has this id
/// - `Unauthorized`: the product belongs to another merchant
pub async fn update_product(
    store: &ProductStore,
    id: &str,
    merchant_id: &str,
    patch: ProductPatch,
) -> Result<Product, AppError> {
    let mut products = store.lock().await;
    let index = locate_owned(&products, id, merchant_id)?;

    let product = &mut products[index];
    product.apply(patch);

    tracing::info!(product_id = %id, merchant_id, "product updated");

    Ok(product.clone())
}

/// Remove the product, keeping the remaining products in order.
///
/// # Errors
///
/// - `ProductNotFound`: no product has this id
/// - `Unauthorized`: the product belongs to another merchant
pub async fn delete_product(store: &ProductStore, id: &str, merchant_id: &str) -> Result<(), AppError> {
    let mut products = store.lock().await;
    let index = locate_owned(&products, id, merchant_id)?;

    products.remove(index);

    tracing::info!(product_id = %id, merchant_id, "product deleted");

    Ok(())
}
