//! Application router assembly.

use crate::catalog::ProductController;
use crate::di::Container;
use crate::error::Result;
use crate::interceptor;
use axum::{
    Router,
    http::{Method, header},
    middleware,
};
use tower_http::cors::{Any, CorsLayer};

/// Cross-origin policy: any origin may issue read-only requests.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE])
}

/// Build the HTTP router from a fully registered container.
///
/// Controllers are resolved once here; handlers never touch the container.
pub fn build_router(container: &Container) -> Result<Router> {
    let product_controller = container.resolve::<ProductController>()?;

    let router = Router::new()
        .nest(
            ProductController::base_path(),
            ProductController::router(product_controller),
        )
        .layer(middleware::from_fn(interceptor::logging))
        .layer(cors_layer());

    Ok(router)
}
