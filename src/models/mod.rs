//! Data models for the product resource.
//!
//! This module contains the stored entity and the request/response bodies
//! exchanged over HTTP.

/// Product entity and request bodies
pub mod product;
