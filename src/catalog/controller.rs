use super::model::{Product, ProductFilter, SearchParams};
use super::service::ProductService;
use crate::di::{Container, Injectable};
use crate::error::Result;
use crate::pipe::Pipe;
use crate::pipe::builtins::{ParseIdPipe, RequiredTextPipe};
use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    routing::get,
};
use std::sync::Arc;

/// HTTP surface of the product catalog.
///
/// Every handler binds its parameters, forwards them unchanged to the
/// [`ProductService`] and returns the result as JSON with status 200.
/// Binding failures are answered 400 before the service is called; service
/// errors propagate to the global exception filter.
pub struct ProductController {
    service: Arc<dyn ProductService>,
}

impl Injectable for ProductController {
    fn inject(container: &Container) -> Result<Self> {
        Ok(Self {
            service: container.resolve_trait::<dyn ProductService>()?,
        })
    }
}

impl ProductController {
    pub fn new(service: Arc<dyn ProductService>) -> Self {
        Self { service }
    }

    pub fn base_path() -> &'static str {
        "/api/products"
    }

    /// Route table, relative to [`ProductController::base_path`].
    ///
    /// Static segments (`/featured`, `/search`, `/filter`) take precedence
    /// over the `/{id}` capture.
    pub fn router<S>(controller: Arc<Self>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        Router::new()
            .route("/", get(Self::list_all))
            .route("/featured", get(Self::list_featured))
            .route("/search", get(Self::search))
            .route("/filter", get(Self::list_filtered))
            .route("/category/{category}", get(Self::list_by_category))
            .route("/{id}", get(Self::get_by_id))
            .with_state(controller)
    }

    async fn list_all(State(controller): State<Arc<Self>>) -> Result<Json<Vec<Product>>> {
        let products = controller.service.list_all().await?;
        tracing::debug!(count = products.len(), "listed products");
        Ok(Json(products))
    }

    async fn list_featured(State(controller): State<Arc<Self>>) -> Result<Json<Vec<Product>>> {
        let products = controller.service.list_featured().await?;
        tracing::debug!(count = products.len(), "listed featured products");
        Ok(Json(products))
    }

    async fn get_by_id(
        State(controller): State<Arc<Self>>,
        raw_id: std::result::Result<Path<String>, PathRejection>,
    ) -> Result<Json<Product>> {
        let Path(raw_id) = raw_id?;
        let id = ParseIdPipe.transform(raw_id).await?;
        let product = controller.service.get_by_id(id).await?;
        tracing::debug!(%id, "fetched product");
        Ok(Json(product))
    }

    async fn list_by_category(
        State(controller): State<Arc<Self>>,
        category: std::result::Result<Path<String>, PathRejection>,
    ) -> Result<Json<Vec<Product>>> {
        let Path(category) = category?;
        let products = controller.service.list_by_category(&category).await?;
        tracing::debug!(%category, count = products.len(), "listed products by category");
        Ok(Json(products))
    }

    async fn search(
        State(controller): State<Arc<Self>>,
        params: std::result::Result<Query<SearchParams>, QueryRejection>,
    ) -> Result<Json<Vec<Product>>> {
        let Query(params) = params?;
        let query = RequiredTextPipe::new("q").transform(params.q).await?;
        let products = controller.service.search(&query).await?;
        tracing::debug!(%query, count = products.len(), "searched products");
        Ok(Json(products))
    }

    async fn list_filtered(
        State(controller): State<Arc<Self>>,
        filter: std::result::Result<Query<ProductFilter>, QueryRejection>,
    ) -> Result<Json<Vec<Product>>> {
        let Query(filter) = filter?;
        let products = controller.service.list_filtered(&filter).await?;
        tracing::debug!(?filter, count = products.len(), "listed filtered products");
        Ok(Json(products))
    }
}
