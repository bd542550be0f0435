//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They own the ownership rules and the locking discipline of the store.

pub mod product_service;
