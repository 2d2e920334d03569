use crate::di::Container;
use std::sync::Arc;

/// Builder for constructing a dependency injection container
///
/// Infrastructure with no DI dependencies of its own (stores, clients) is
/// registered here before modules resolve their providers.
///
/// # Example
/// ```
/// use shopinow::ContainerBuilder;
/// use shopinow::catalog::{InMemoryProductRepository, ProductRepository};
/// use std::sync::Arc;
///
/// let container = ContainerBuilder::new()
///     .register(InMemoryProductRepository::default())
///     .bind::<dyn ProductRepository, InMemoryProductRepository, _>(|r| r as Arc<dyn ProductRepository>)
///     .build();
/// assert!(container.contains::<dyn ProductRepository>());
/// ```
pub struct ContainerBuilder {
    container: Container,
}

impl ContainerBuilder {
    /// Create a new container builder
    pub fn new() -> Self {
        Self {
            container: Container::new(),
        }
    }

    /// Register a service instance
    pub fn register<T: 'static + Send + Sync>(mut self, instance: T) -> Self {
        self.container.register(instance);
        self
    }

    /// Bind a trait to a concrete implementation
    ///
    /// This enables resolving `Arc<dyn Trait>` to the registered implementation.
    /// The implementation may be registered before or after the binding.
    pub fn bind<Trait, Impl, F>(mut self, caster: F) -> Self
    where
        Trait: ?Sized + 'static + Send + Sync,
        Impl: 'static + Send + Sync,
        F: Fn(Arc<Impl>) -> Arc<Trait> + 'static + Send + Sync,
    {
        self.container.register_trait::<Trait, Impl, F>(caster);
        self
    }

    /// Build the container
    pub fn build(self) -> Container {
        self.container
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
