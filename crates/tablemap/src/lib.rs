mod entity;
pub use entity::Entity;

mod mappings;
pub use mappings::Mappings;

mod primitive;
pub use primitive::Primitive;

pub use tablemap_core::{
    resolve,
    schema::{
        self, Builder, ConverterRef, MappingDescriptor, NameConverter, NamingConvention,
        ResolvedProperty, Resolver, Role, TypeDescription, ValueType, Warning,
    },
    ConfigurationRule, DescriptorCache, Error, Result, StructuralRule,
};

pub use tablemap_macros::Entity;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Entity, Primitive};
    pub use tablemap_core::schema::{
        Constructor, ConverterRef, Field, Marker, Method, NamingConvention, TypeDescription,
        ValueType,
    };
}
