//! Product HTTP handlers.
//!
//! This module implements the product API endpoints:
//! - GET /products - List products for the calling merchant
//! - POST /products - Create a product
//! - GET /products/{id} - Get a product by ID
//! - PATCH /products/{id} - Partially update a product
//! - DELETE /products/{id} - Delete a product
//!
//! The calling merchant comes from the `merchantId` query parameter, which
//! the merchant middleware turns into a `MerchantContext` extension.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::AppError,
    extract::AppJson,
    middleware::merchant::MerchantContext,
    models::product::{MessageResponse, NewProduct, Product, ProductPatch},
    services::product_service,
    store::SharedStore,
};

/// List all products owned by the calling merchant.
///
/// # Endpoint
///
/// `GET /products?merchantId=silas`
///
/// # Response
///
/// - **Success (200 OK)**: Array of products in creation order
/// - **Error (400)**: `merchantId` missing
/// - **Error (404)**: Merchant owns no products
pub async fn list_products(
    State(store): State<SharedStore>,
    Extension(merchant): Extension<MerchantContext>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = product_service::list_products(&store, &merchant.merchant_id).await?;

    Ok(Json(products))
}

/// Create a new product for the calling merchant.
///
/// # Endpoint
///
/// `POST /products?merchantId=silas`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Test Product",
///   "description": "This is a test",
///   "price": 100
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: The created product, including its generated
///   `id`, `merchantId` and `createdAt`
/// - **Error (400)**: Body is not valid product JSON (checked first), or
///   `merchantId` missing
pub async fn create_product(
    State(store): State<SharedStore>,
    Extension(merchant): Extension<MerchantContext>,
    AppJson(fields): AppJson<NewProduct>,
) -> Result<impl IntoResponse, AppError> {
    let product = product_service::create_product(&store, &merchant.merchant_id, fields).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a single product by ID.
///
/// # Endpoint
///
/// `GET /products/{id}?merchantId=silas`
///
/// # Response
///
/// - **Success (200 OK)**: The product
/// - **Error (401)**: Product exists but belongs to another merchant
/// - **Error (404)**: No product with this ID
pub async fn get_product(
    State(store): State<SharedStore>,
    Extension(merchant): Extension<MerchantContext>,
    Path(product_id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let product = product_service::get_product(&store, &product_id, &merchant.merchant_id).await?;

    Ok(Json(product))
}

/// Partially update a product.
///
/// # Endpoint
///
/// `PATCH /products/{id}?merchantId=silas`
///
/// # Request Body
///
/// ```json
/// { "price": 150 }
/// ```
///
/// Omitted fields, empty strings and a zero price keep the stored value.
///
/// # Response
///
/// - **Success (200 OK)**: The product after the merge
/// - **Error (400)**: Body is not valid product JSON (checked first)
/// - **Error (401)**: Product exists but belongs to another merchant
/// - **Error (404)**: No product with this ID
pub async fn update_product(
    State(store): State<SharedStore>,
    Extension(merchant): Extension<MerchantContext>,
    Path(product_id): Path<String>,
    AppJson(patch): AppJson<ProductPatch>,
) -> Result<Json<Product>, AppError> {
    let product =
        product_service::update_product(&store, &product_id, &merchant.merchant_id, patch).await?;

    Ok(Json(product))
}

/// Delete a product.
///
/// # Endpoint
///
/// `DELETE /products/{id}?merchantId=silas`
///
/// # Response
///
/// - **Success (200 OK)**: `{"message": "Product deleted"}`
/// - **Error (401)**: Product exists but belongs to another merchant
/// - **Error (404)**: No product with this ID
pub async fn delete_product(
    State(store): State<SharedStore>,
    Extension(merchant): Extension<MerchantContext>,
    Path(product_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    product_service::delete_product(&store, &product_id, &merchant.merchant_id).await?;

    Ok(Json(MessageResponse::new("Product deleted")))
}
