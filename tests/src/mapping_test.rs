use std::sync::Arc;
use tablemap::{Entity, Error, MappingDescriptor, Mappings, Resolver};

/// Per-test mapping state with a fresh cache.
pub struct MappingTest {
    mappings: Mappings,
}

impl MappingTest {
    pub fn new() -> Self {
        Self::with_resolver(Resolver::default())
    }

    pub fn with_resolver(resolver: Resolver) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        Self {
            mappings: Mappings::with_resolver(resolver),
        }
    }

    pub fn mappings(&self) -> &Mappings {
        &self.mappings
    }

    /// Resolves `E` as a table row target, panicking on failure.
    pub fn table<E: Entity>(&self) -> Arc<MappingDescriptor> {
        match self.mappings.table::<E>() {
            Ok(descriptor) => descriptor,
            Err(err) => panic!("failed to map `{}`: {err}", E::TYPE_KEY),
        }
    }

    /// Resolves `E` as a table row target, panicking if that succeeds.
    pub fn table_err<E: Entity>(&self) -> Error {
        match self.mappings.table::<E>() {
            Ok(descriptor) => panic!("expected `{}` to fail, got {descriptor:#?}", E::TYPE_KEY),
            Err(err) => err,
        }
    }
}

impl Default for MappingTest {
    fn default() -> Self {
        Self::new()
    }
}
