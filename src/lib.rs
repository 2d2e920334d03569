//! # shopinow
//!
//! Read-only product catalog API served over HTTP.
//!
//! The HTTP layer ([`catalog::ProductController`]) binds request parameters
//! and delegates every query to an injected [`catalog::ProductService`].
//! Collaborators are wired through a small dependency-injection
//! [`Container`]; errors are translated to HTTP responses by the global
//! [`exception::http::HttpExceptionFilter`].
//!
//! ## Routes
//!
//! | Method | Path | Parameters |
//! |---|---|---|
//! | GET | `/api/products` | |
//! | GET | `/api/products/featured` | |
//! | GET | `/api/products/{id}` | `id`: integer |
//! | GET | `/api/products/category/{category}` | `category` |
//! | GET | `/api/products/search` | `q` (required) |
//! | GET | `/api/products/filter` | `category`, `minPrice`, `maxPrice`, `minRating` (all optional) |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shopinow::prelude::*;
//! use shopinow::catalog::{CatalogModule, InMemoryProductRepository};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let repository = InMemoryProductRepository::from_json_file("data/products.json")?;
//!
//!     let mut container = ContainerBuilder::new().register(repository).build();
//!     CatalogModule::register(&mut container)?;
//!
//!     let router = shopinow::app::build_router(&container)?;
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//!     axum::serve(listener, router).await?;
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod catalog;
pub mod config;
pub mod di;
pub mod error;
pub mod exception;
pub mod interceptor;
pub mod lifecycle;
pub mod module;
pub mod pipe;

// Re-export core types
pub use di::{Container, ContainerBuilder, Injectable};
pub use error::{CatalogError, Result};
pub use module::Module;

pub use async_trait::async_trait;
pub use axum;

/// Prelude module for convenient imports
///
/// ```
/// use shopinow::prelude::*;
/// ```
pub mod prelude {
    pub use crate::catalog::{Product, ProductFilter, ProductId, ProductService};
    pub use crate::di::{Container, ContainerBuilder, Injectable};
    pub use crate::error::{CatalogError, Result};
    pub use crate::exception::ExceptionFilter;
    pub use crate::module::Module;
    pub use crate::pipe::{Pipe, PipeError, PipeResult};
    pub use async_trait::async_trait;
    pub use std::sync::Arc;
}
