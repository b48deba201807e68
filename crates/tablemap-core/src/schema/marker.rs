use super::{ConverterRef, NamingConvention};
use std::fmt;

/// A declarative mapping tag attached to a field or accessor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Marker {
    /// The property is not mapped to a column
    Excluded,

    /// The column value is computed by the database from this expression
    Computed(String),

    /// Partition-key column at the given position
    PartitionKey(i32),

    /// Clustering-key column at the given position
    ClusteringKey(i32),

    /// Explicit column name
    Name(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Excluded,
    Computed,
    PartitionKey,
    ClusteringKey,
    Name,
}

/// Markers attached to the record type itself.
#[derive(Debug, Clone, Default)]
pub struct TypeMarkers {
    /// Explicit table name
    pub name: Option<String>,

    /// Built-in naming convention for the type and its properties
    pub naming: Option<NamingConvention>,

    /// Custom converter for property names
    pub converter: Option<ConverterRef>,

    /// Names of properties that are never mapped
    pub excluded: Vec<String>,
}

impl Marker {
    pub fn computed(expression: impl Into<String>) -> Self {
        Self::Computed(expression.into())
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub fn kind(&self) -> MarkerKind {
        match self {
            Self::Excluded => MarkerKind::Excluded,
            Self::Computed(_) => MarkerKind::Computed,
            Self::PartitionKey(_) => MarkerKind::PartitionKey,
            Self::ClusteringKey(_) => MarkerKind::ClusteringKey,
            Self::Name(_) => MarkerKind::Name,
        }
    }
}

impl MarkerKind {
    /// Returns `true` for markers that decide a property's role. At most one
    /// of these may be attached to a property.
    pub fn is_role(self) -> bool {
        !matches!(self, Self::Name)
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Excluded => "excluded",
            Self::Computed => "computed",
            Self::PartitionKey => "partition-key",
            Self::ClusteringKey => "clustering-key",
            Self::Name => "name",
        })
    }
}

impl TypeMarkers {
    pub fn is_excluded(&self, property: &str) -> bool {
        self.excluded.iter().any(|name| name == property)
    }
}
