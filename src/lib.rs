//! Merchant Product Service
//!
//! An in-memory REST API for managing products scoped by merchant. Every
//! product belongs to the merchant that created it, identified by the
//! `merchantId` query parameter.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: In-memory ordered collection behind a single lock
//! - **Ownership**: plain `merchantId` equality
//! - **Format**: JSON requests/responses

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod services;
pub mod store;
