mod cache;
pub use cache::DescriptorCache;

mod error;
pub use error::{ConfigurationRule, Error, StructuralRule};

pub mod schema;
pub use schema::{MappingDescriptor, Resolver, TypeDescription};

/// A Result type alias that uses tablemap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Resolves the mapping for `description` using the default resolver
/// configuration.
///
/// This is uncached; use a [`DescriptorCache`] to share descriptors between
/// the read and write paths.
pub fn resolve(description: &TypeDescription) -> Result<MappingDescriptor> {
    Resolver::default().resolve(description)
}
