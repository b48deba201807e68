mod builder;
pub use builder::{Builder, Resolver};

mod classify;
pub use classify::Role;

mod desc;
pub use desc::{Constructor, Field, Method, TypeDescription};

mod extract;
pub use extract::PropertyCandidate;

mod keys;

pub mod mapping;
pub use mapping::{MappingDescriptor, ResolvedProperty};

mod marker;
pub use marker::{Marker, MarkerKind, TypeMarkers};

mod name;
pub use name::Name;

mod naming;
pub use naming::{ConverterRef, NameConverter, NamingConvention};
pub(crate) use naming::NamingStrategy;

mod ty;
pub use ty::ValueType;

mod verify;

mod warning;
pub use warning::Warning;
