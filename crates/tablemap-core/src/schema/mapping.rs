mod descriptor;
pub use descriptor::MappingDescriptor;

mod property;
pub use property::ResolvedProperty;
pub(crate) use descriptor::DescriptorParts;
