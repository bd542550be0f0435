//! Product data models and API request/response types.
//!
//! This module defines:
//! - `Product`: The stored entity, also returned to clients as-is
//! - `NewProduct`: Request body for creating products
//! - `ProductPatch`: Request body for partial updates
//! - `MessageResponse`: Plain confirmation body

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A product owned by a single merchant.
///
/// # Ownership
///
/// `merchant_id` is copied from the creating request and never changes.
/// Every lookup compares it against the caller's `merchantId` before
/// returning or mutating the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4 text), assigned at creation
    pub id: String,

    /// Human-readable label
    pub name: String,

    /// Free text description
    pub description: String,

    /// Unit price
    pub price: f64,

    /// Identifier of the merchant that owns this product
    pub merchant_id: String,

    /// Timestamp when the product was created
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Build a new product for `merchant_id` with a fresh id and timestamp.
    ///
    /// Identity fields are never taken from the request body.
    pub fn new(merchant_id: &str, fields: NewProduct) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: fields.name,
            description: fields.description,
            price: fields.price,
            merchant_id: merchant_id.to_string(),
            created_at: Utc::now(),
        }
    }

    /// Whether `merchant_id` owns this product.
    pub fn is_owned_by(&self, merchant_id: &str) -> bool {
        self.merchant_id == merchant_id
    }

    /// Merge a partial update into this product.
    ///
    /// Omitted fields, empty strings and a zero price all leave the stored
    /// value unchanged. `id`, `merchant_id` and `created_at` are untouched.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name.filter(|n| !n.is_empty()) {
            self.name = name;
        }
        if let Some(description) = patch.description.filter(|d| !d.is_empty()) {
            self.description = description;
        }
        if let Some(price) = patch.price.filter(|p| *p != 0.0) {
            self.price = price;
        }
    }
}

/// Request body for creating a new product.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Test Product",
///   "description": "This is a test",
///   "price": 100
/// }
/// ```
///
/// # Validation
///
/// Only type checking: every field is optional and defaults to its zero
/// value, but `"price": "100"` is rejected. Unknown fields such as `id`
/// or `merchantId` are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Request body for `PATCH /products/{id}`.
///
/// # JSON Example
///
/// ```json
/// { "price": 150 }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct ProductPatch {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub price: Option<f64>,
}

/// Response body carrying a single confirmation message.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
