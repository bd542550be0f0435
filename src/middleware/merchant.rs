//! Merchant identity middleware.
//!
//! This middleware runs in front of every product route to:
//! 1. Decode the `merchantId` query parameter
//! 2. Inject a `MerchantContext` into the request
//! 3. Reject requests whose query string cannot be decoded (HTTP 400)
//!
//! Identity is a plain string comparison; no credential is verified.

use axum::{
    extract::{Query, Request},
    middleware::Next,
    response::Response,
};
use serde::Deserialize;

use crate::error::AppError;

/// Query parameters shared by all product routes.
#[derive(Debug, Deserialize)]
pub struct MerchantQuery {
    #[serde(rename = "merchantId")]
    pub merchant_id: Option<String>,
}

/// Merchant identity attached to product requests.
///
/// Route handlers extract this with `Extension<MerchantContext>`.
/// An absent parameter is carried as the empty string, which never
/// matches a stored owner.
#[derive(Debug, Clone, Default)]
pub struct MerchantContext {
    pub merchant_id: String,
}

/// Merchant context middleware function.
///
/// # Flow
///
/// 1. Parse the request URI query into `MerchantQuery`
/// 2. Insert `MerchantContext` into request extensions
/// 3. Call the next handler
///
/// Whether the id is mandatory is decided per operation by the product
/// service, so a missing parameter is not rejected here.
///
/// # Returns
///
/// - `Ok(Response)` from the next handler
/// - `Err(AppError::MalformedBody)` if the query string cannot be decoded
///   (for example a repeated `merchantId`)
pub async fn merchant_context(mut request: Request, next: Next) -> Result<Response, AppError> {
    let Query(query) = Query::<MerchantQuery>::try_from_uri(request.uri())
        .map_err(|rejection| AppError::MalformedBody(rejection.body_text()))?;

    let context = MerchantContext {
        merchant_id: query.merchant_id.unwrap_or_default(),
    };

    request.extensions_mut().insert(context);

    Ok(next.run(request).await)
}
