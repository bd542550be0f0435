//! HTTP middleware components.
//!
//! Middleware are functions that run before route handlers.
//! They can:
//! - Attach request context (the calling merchant)
//! - Short-circuit requests (reject undecodable query strings)

/// Merchant identity middleware
pub mod merchant;
