use super::classify::classify;
use super::extract::Extract;
use super::keys;
use super::mapping::DescriptorParts;
use super::verify::Verify;
use super::{
    Marker, MappingDescriptor, NamingConvention, NamingStrategy, ResolvedProperty,
    TypeDescription,
};
use crate::Result;

use log::{debug, warn};

/// Configures a [`Resolver`].
#[derive(Debug, Clone)]
pub struct Builder {
    /// Convention applied when a type declares no naming source of its own
    default_convention: NamingConvention,

    /// Reject markers repeated on a field and its accessor instead of warning
    strict_markers: bool,
}

/// Resolves record type descriptions into [`MappingDescriptor`]s.
///
/// The resolver holds only configuration: resolving the same description
/// twice always yields equal descriptors.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    default_convention: NamingConvention,
    strict_markers: bool,
}

/// Tracks state while resolving a single type
struct Resolve<'a> {
    resolver: &'a Resolver,
    description: &'a TypeDescription,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            default_convention: NamingConvention::default(),
            strict_markers: false,
        }
    }

    pub fn default_convention(&mut self, convention: NamingConvention) -> &mut Self {
        self.default_convention = convention;
        self
    }

    pub fn strict_markers(&mut self, strict: bool) -> &mut Self {
        self.strict_markers = strict;
        self
    }

    pub fn build(&self) -> Resolver {
        Resolver {
            default_convention: self.default_convention,
            strict_markers: self.strict_markers,
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Resolves the mapping for `description`.
    ///
    /// Any error aborts resolution of the whole type; no partial descriptor
    /// is ever returned.
    pub fn resolve(&self, description: &TypeDescription) -> Result<MappingDescriptor> {
        Resolve {
            resolver: self,
            description,
        }
        .resolve()
    }

    pub fn default_convention(&self) -> NamingConvention {
        self.default_convention
    }

    pub fn is_strict(&self) -> bool {
        self.strict_markers
    }
}

impl Resolve<'_> {
    fn resolve(&self) -> Result<MappingDescriptor> {
        let description = self.description;
        let type_key = &description.qualified_name[..];

        let mut extract = Extract::new(description, self.resolver.strict_markers);
        let candidates = extract.candidates()?;

        let naming = NamingStrategy::new(description, self.resolver.default_convention)?;

        let mut properties = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            let role = classify(type_key, &description.markers, &candidate)?;

            let schema_name = if role.is_excluded() {
                None
            } else {
                let explicit = candidate.markers.iter().find_map(|marker| match marker {
                    Marker::Name(name) => Some(&name[..]),
                    _ => None,
                });

                Some(naming.property_name(&candidate.name, explicit)?)
            };

            properties.push(ResolvedProperty {
                property_name: candidate.name,
                schema_name,
                role,
                ty: candidate.ty,
            });
        }

        let schema_name = naming.type_name(&description.name)?;
        let keys = keys::order(type_key, &properties)?;

        Verify::new(type_key, &properties).verify()?;

        for warning in &extract.warnings {
            warn!("`{type_key}`: {warning}");
        }

        let descriptor = MappingDescriptor::new(DescriptorParts {
            type_key: type_key.to_string(),
            type_name: description.name.clone(),
            schema_name,
            properties,
            partition_key: keys.partition,
            clustering_key: keys.clustering,
            warnings: extract.warnings,
        });

        debug!(
            "resolved `{type_key}` to table `{}` ({} properties, {} partition key, {} clustering key)",
            descriptor.schema_name(),
            descriptor.properties().len(),
            descriptor.partition_key_columns().len(),
            descriptor.clustering_key_columns().len(),
        );

        Ok(descriptor)
    }
}
