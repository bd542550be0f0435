//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and a fixed
/// human-readable message. The `Display` text of a variant is exactly the
/// message sent to the client.
///
/// # Error Categories
///
/// - **Request Errors**: missing merchant identity, undecodable body or query
/// - **Ownership Errors**: product belongs to another merchant
/// - **Resource Errors**: requested products do not exist
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The `merchantId` query parameter is absent or empty.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Merchant ID is required")]
    MissingMerchantId,

    /// Request body (or query string) could not be decoded.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String holds the decoder's reason; it is logged, never returned.
    #[error("Bad request")]
    MalformedBody(String),

    /// The product exists but is owned by a different merchant.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Unauthorized")]
    Unauthorized,

    /// No product has the requested id.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Product not found")]
    ProductNotFound,

    /// The merchant has no products at all.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("No products found for this merchant")]
    NoProductsForMerchant,
}

impl AppError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingMerchantId | AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::ProductNotFound | AppError::NoProductsForMerchant => StatusCode::NOT_FOUND,
        }
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// { "message": "Product not found" }
/// ```
///
/// # Status Code Mapping
///
/// - `MissingMerchantId` → 400 Bad Request
/// - `MalformedBody` → 400 Bad Request
/// - `Unauthorized` → 401 Unauthorized
/// - `ProductNotFound` → 404 Not Found
/// - `NoProductsForMerchant` → 404 Not Found
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::MalformedBody(reason) => {
                tracing::debug!(%reason, "rejected malformed request");
            }
            AppError::Unauthorized => {
                tracing::warn!("merchant does not own requested product");
            }
            other => tracing::debug!(error = %other, "request failed"),
        }

        let body = Json(json!({ "message": self.to_string() }));

        (status, body).into_response()
    }
}
