use crate::error::{CatalogError, Result};
use dashmap::DashMap;
use std::any::{Any, TypeId, type_name};
use std::sync::Arc;

/// Casts a type-erased implementation into a type-erased `Arc<dyn Trait>`.
/// Returns `None` when the instance is not the bound implementation type.
type CasterFn =
    Arc<dyn Fn(Arc<dyn Any + Send + Sync>) -> Option<Arc<dyn Any + Send + Sync>> + Send + Sync>;

/// Thread-safe dependency injection container.
///
/// Instances are stored behind `Arc` and handed out as shared references,
/// so resolved services must be safe for concurrent use.
pub struct Container {
    services: DashMap<TypeId, ServiceEntry>,
    trait_mappings: DashMap<TypeId, TypeId>,
    casters: DashMap<TypeId, CasterFn>,
}

impl Clone for Container {
    fn clone(&self) -> Self {
        Self {
            services: self.services.clone(),
            trait_mappings: self.trait_mappings.clone(),
            casters: self.casters.clone(),
        }
    }
}

#[derive(Clone)]
struct ServiceEntry {
    instance: Arc<dyn Any + Send + Sync>,
}

impl Container {
    pub fn new() -> Self {
        Self {
            services: DashMap::new(),
            trait_mappings: DashMap::new(),
            casters: DashMap::new(),
        }
    }

    pub fn register<T: 'static + Send + Sync>(&mut self, instance: T) -> &mut Self {
        tracing::debug!(service = type_name::<T>(), "registering provider");
        let entry = ServiceEntry {
            instance: Arc::new(instance),
        };
        self.services.insert(TypeId::of::<T>(), entry);
        self
    }

    pub fn register_trait<Trait, Impl, F>(&mut self, caster_fn: F) -> &mut Self
    where
        Trait: ?Sized + 'static + Send + Sync,
        Impl: 'static + Send + Sync,
        F: Fn(Arc<Impl>) -> Arc<Trait> + 'static + Send + Sync,
    {
        tracing::debug!(
            binding = type_name::<Trait>(),
            implementation = type_name::<Impl>(),
            "binding trait"
        );
        let trait_id = TypeId::of::<Trait>();
        self.trait_mappings.insert(trait_id, TypeId::of::<Impl>());

        let caster: CasterFn = Arc::new(move |instance: Arc<dyn Any + Send + Sync>| {
            let concrete = instance.downcast::<Impl>().ok()?;
            let trait_obj: Arc<Trait> = caster_fn(concrete);
            // Sized wrapper so the trait object can travel through `dyn Any`.
            Some(Arc::new(trait_obj) as Arc<dyn Any + Send + Sync>)
        });
        self.casters.insert(trait_id, caster);
        self
    }

    pub fn resolve<T: 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let entry = self
            .services
            .get(&TypeId::of::<T>())
            .ok_or_else(|| CatalogError::DependencyNotFound {
                type_name: type_name::<T>().to_string(),
            })?;
        entry
            .instance
            .clone()
            .downcast::<T>()
            .map_err(|_| CatalogError::DowncastFailed {
                type_name: type_name::<T>().to_string(),
            })
    }

    pub fn resolve_trait<T: ?Sized + 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let requested = TypeId::of::<T>();

        let caster = self.casters.get(&requested).ok_or_else(|| {
            CatalogError::DependencyNotFound {
                type_name: type_name::<T>().to_string(),
            }
        })?;

        let impl_id = self.trait_mappings.get(&requested).ok_or_else(|| {
            CatalogError::DependencyNotFound {
                type_name: format!(
                    "No implementation mapping found for trait '{}'",
                    type_name::<T>()
                ),
            }
        })?;

        let entry = self
            .services
            .get(impl_id.value())
            .ok_or_else(|| CatalogError::DependencyNotFound {
                type_name: format!(
                    "Implementation for trait '{}' not registered",
                    type_name::<T>()
                ),
            })?;

        let downcast_failed = || CatalogError::DowncastFailed {
            type_name: type_name::<T>().to_string(),
        };

        let wrapper = (caster.value())(entry.instance.clone())
            .ok_or_else(downcast_failed)?
            .downcast::<Arc<T>>()
            .map_err(|_| downcast_failed())?;
        Ok(wrapper.as_ref().clone())
    }

    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        let type_id = TypeId::of::<T>();
        self.services.contains_key(&type_id) || self.trait_mappings.contains_key(&type_id)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}
