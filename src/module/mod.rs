use crate::di::Container;
use crate::error::Result;

/// Trait for application modules
///
/// A module binds its trait implementations, then constructs its providers
/// and controllers in dependency order and registers them in the container.
///
/// # Example
/// ```
/// use shopinow::{Container, Module, Result};
///
/// pub struct HealthModule;
///
/// impl Module for HealthModule {
///     fn register(_container: &mut Container) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// let mut container = Container::new();
/// HealthModule::register(&mut container).unwrap();
/// ```
pub trait Module {
    /// Register all providers and controllers in this module
    fn register(container: &mut Container) -> Result<()>;

    /// Create a new container and register this module
    fn create_container() -> Result<Container> {
        let mut container = Container::new();
        Self::register(&mut container)?;
        Ok(container)
    }
}
