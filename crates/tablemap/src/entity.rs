use tablemap_core::TypeDescription;

/// A record type that can be mapped to a table.
///
/// Usually implemented with `#[derive(Entity)]`, which describes every
/// named field as a property with a `get_`/`set_` accessor pair.
pub trait Entity: 'static {
    /// Qualified name of the type, reported in descriptors and errors and
    /// used as the name of the type when nested in another entity. Not
    /// guaranteed to be unique; caches key entities by `TypeId`.
    const TYPE_KEY: &'static str;

    /// Describes the type's shape and mapping markers.
    fn describe() -> TypeDescription;
}
