//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, merchant context)
//! 2. Delegates to the product service
//! 3. Returns HTTP response (JSON, status code)

/// Health check endpoint
pub mod health;
/// Product management endpoints
pub mod products;
