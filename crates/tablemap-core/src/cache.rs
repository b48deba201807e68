use crate::{MappingDescriptor, Resolver, Result, TypeDescription};

use log::debug;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

/// A resolved (or failed) mapping, published once.
type Slot = Arc<OnceLock<Result<Arc<MappingDescriptor>>>>;

/// Caches mapping descriptors by record type identity.
///
/// Each type is resolved at most once, even when several threads ask for it
/// at the same time: the first caller resolves while the others wait for
/// the same slot and then share its descriptor. A published entry is never
/// mutated. Failures are cached as well, since resolution is deterministic.
///
/// The key `K` must identify a type uniquely. The default, `String`, is
/// keyed by [`TypeDescription::qualified_name`]; callers that know the Rust
/// type can key by `std::any::TypeId` instead.
pub struct DescriptorCache<K = String> {
    resolver: Resolver,

    /// Slots by type key. The lock is held only to find or create a slot,
    /// never while resolving.
    slots: Mutex<HashMap<K, Slot>>,
}

impl<K> DescriptorCache<K> {
    pub fn new() -> Self {
        Self::with_resolver(Resolver::default())
    }

    pub fn with_resolver(resolver: Resolver) -> Self {
        Self {
            resolver,
            slots: Mutex::new(HashMap::new()),
        }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of types with an entry, resolved or in progress.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<K, Slot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K: Eq + Hash> DescriptorCache<K> {
    /// Returns the descriptor for `description`, resolving it on first use.
    /// The description's qualified name is the cache key.
    pub fn resolve(&self, description: &TypeDescription) -> Result<Arc<MappingDescriptor>>
    where
        K: Borrow<str>,
        str: ToOwned<Owned = K>,
    {
        self.get_or_resolve(&description.qualified_name[..], || description.clone())
    }

    /// Returns the descriptor cached under `key`, calling `describe` to
    /// build the type description only if the type is not resolved yet.
    ///
    /// The description's qualified name is not consulted; `key` alone
    /// decides which entry is used.
    pub fn get_or_resolve<Q>(
        &self,
        key: &Q,
        describe: impl FnOnce() -> TypeDescription,
    ) -> Result<Arc<MappingDescriptor>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        let slot = self.slot(key);

        slot.get_or_init(|| {
            let description = describe();
            debug!("resolving mapping for `{}`", description.qualified_name);
            self.resolver.resolve(&description).map(Arc::new)
        })
        .clone()
    }

    /// Returns the descriptor cached under `key` if it has been resolved
    /// successfully.
    pub fn get<Q>(&self, key: &Q) -> Option<Arc<MappingDescriptor>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slots = self.lock();
        slots.get(key)?.get()?.as_ref().ok().cloned()
    }

    /// Drops the entry for `key` so the next request resolves the type
    /// again. Returns `true` if an entry was present.
    ///
    /// Holders of the previous descriptor keep it; a resolution already in
    /// progress completes into the dropped entry.
    pub fn invalidate<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        let removed = self.lock().remove(key).is_some();

        if removed {
            debug!("invalidated mapping for {key:?}");
        }

        removed
    }

    fn slot<Q>(&self, key: &Q) -> Slot
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        let mut slots = self.lock();

        match slots.get(key) {
            Some(slot) => slot.clone(),
            None => slots.entry(key.to_owned()).or_default().clone(),
        }
    }
}

impl<K> Default for DescriptorCache<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for DescriptorCache<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescriptorCache")
            .field("resolver", &self.resolver)
            .field("len", &self.len())
            .finish()
    }
}
