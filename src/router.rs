//! Shared application router builder.
//!
//! Provides [`build_app_router`] so both the binary (`main.rs`) and the
//! integration tests use the exact same routes and middleware stack.

use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    middleware as axum_middleware,
    routing::get,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{config::Config, handlers, middleware, store::SharedStore};

/// Build the full application [`Router`].
///
/// - `/products` routes, behind the merchant context middleware
/// - `/health` (public)
/// - `/api/docs` static documentation from `config.docs_dir`
pub fn build_app_router(store: SharedStore, config: &Config) -> Router {
    let product_routes = Router::new()
        .route(
            "/products",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )
        .route(
            "/products/{id}",
            get(handlers::products::get_product)
                .patch(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        )
        // Attach the calling merchant to every product request
        .route_layer(axum_middleware::from_fn(
            middleware::merchant::merchant_context,
        ));

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(product_routes)
        .nest_service("/api/docs", ServeDir::new(&config.docs_dir))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(config))
        // Share the product store with all handlers via State extraction
        .with_state(store)
}

/// Build the CORS layer.
///
/// With no configured origins any origin is allowed. Configured origins that
/// fail to parse as header values are skipped with a warning.
pub fn build_cors_layer(config: &Config) -> CorsLayer {
    let origin = if config.cors_origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!(origin = %o, error = %e, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::HEAD,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
}
