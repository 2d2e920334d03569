use crate::di::Container;
use crate::error::Result;

/// Trait for types that can be built from the DI container
///
/// Every dependency is resolved up front, so a constructed value never
/// performs a container lookup while serving requests.
///
/// # Example
/// ```
/// use shopinow::{Container, Injectable, Result};
/// use std::sync::Arc;
///
/// pub trait PriceFeed: Send + Sync {}
///
/// pub struct Storefront {
///     feed: Arc<dyn PriceFeed>,
/// }
///
/// impl Injectable for Storefront {
///     fn inject(container: &Container) -> Result<Self> {
///         Ok(Self {
///             feed: container.resolve_trait::<dyn PriceFeed>()?,
///         })
///     }
/// }
/// ```
pub trait Injectable: Sized + Send + Sync + 'static {
    /// Create an instance by resolving dependencies from the container
    ///
    /// # Errors
    /// Returns an error if any required dependency is not registered.
    fn inject(container: &Container) -> Result<Self>;
}
