use crate::Entity;

use std::any::TypeId;
use std::sync::Arc;
use tablemap_core::{DescriptorCache, MappingDescriptor, Resolver, Result};

/// Resolves and caches mappings for [`Entity`] types.
///
/// A single `Mappings` is meant to be shared by every component that reads
/// or writes rows, so that both agree on the same descriptor. Entries are
/// keyed by the Rust type, so same-named types never share one.
#[derive(Debug, Default)]
pub struct Mappings {
    cache: DescriptorCache<TypeId>,
}

impl Mappings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolver(resolver: Resolver) -> Self {
        Self {
            cache: DescriptorCache::with_resolver(resolver),
        }
    }

    /// Returns the mapping for `E`, resolving it on first use.
    pub fn descriptor<E: Entity>(&self) -> Result<Arc<MappingDescriptor>> {
        self.cache.get_or_resolve(&TypeId::of::<E>(), E::describe)
    }

    /// Returns the mapping for `E` as a table row target.
    ///
    /// Fails if the type has no partition key. Such types can still be
    /// resolved with [`Mappings::descriptor`] for use as embedded values.
    pub fn table<E: Entity>(&self) -> Result<Arc<MappingDescriptor>> {
        let descriptor = self.descriptor::<E>()?;
        descriptor.verify_row_target()?;
        Ok(descriptor)
    }

    /// Returns the mapping for `E` if it has been resolved successfully.
    pub fn get<E: Entity>(&self) -> Option<Arc<MappingDescriptor>> {
        self.cache.get(&TypeId::of::<E>())
    }

    /// Forgets the mapping for `E`.
    pub fn invalidate<E: Entity>(&self) -> bool {
        self.cache.invalidate(&TypeId::of::<E>())
    }

    pub fn cache(&self) -> &DescriptorCache<TypeId> {
        &self.cache
    }
}
