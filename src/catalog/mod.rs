//! Product catalog: read-only query endpoints and the collaborators behind them.

pub mod controller;
pub mod model;
pub mod repository;
pub mod service;

pub use controller::ProductController;
pub use model::{Product, ProductFilter, ProductId, SearchParams};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::{CatalogProductService, ProductService};

use crate::di::{Container, Injectable};
use crate::error::Result;
use crate::module::Module;
use std::sync::Arc;

/// Catalog module
///
/// Binds the repository and service traits, then builds the service and the
/// controller in dependency order. A [`ProductRepository`] implementation
/// (by default [`InMemoryProductRepository`]) must already be registered.
pub struct CatalogModule;

impl Module for CatalogModule {
    fn register(container: &mut Container) -> Result<()> {
        // 1. Trait bindings
        container.register_trait::<dyn ProductRepository, InMemoryProductRepository, _>(|r| {
            r as Arc<dyn ProductRepository>
        });
        container.register_trait::<dyn ProductService, CatalogProductService, _>(|s| {
            s as Arc<dyn ProductService>
        });

        // 2. Providers
        let service = CatalogProductService::inject(container)?;
        container.register(service);

        // 3. Controllers
        let controller = ProductController::inject(container)?;
        container.register(controller);

        Ok(())
    }
}
