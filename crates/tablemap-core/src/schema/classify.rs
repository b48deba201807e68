use super::{Marker, MarkerKind, PropertyCandidate, TypeMarkers};
use crate::{Error, Result, StructuralRule};

/// The single role a property plays in the table mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// Regular column
    Stored,

    /// Partition-key column at the declared position
    PartitionKey(i32),

    /// Clustering-key column at the declared position
    ClusteringKey(i32),

    /// Column computed by the database from the expression. Never written.
    Computed(String),

    /// Not mapped
    Excluded,
}

impl Role {
    pub fn is_stored(&self) -> bool {
        matches!(self, Self::Stored)
    }

    pub fn is_partition_key(&self) -> bool {
        matches!(self, Self::PartitionKey(_))
    }

    pub fn is_clustering_key(&self) -> bool {
        matches!(self, Self::ClusteringKey(_))
    }

    pub fn is_key(&self) -> bool {
        self.is_partition_key() || self.is_clustering_key()
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }

    pub fn is_excluded(&self) -> bool {
        matches!(self, Self::Excluded)
    }

    /// Returns `true` if the property's column may appear in write statements.
    pub fn is_writable(&self) -> bool {
        self.is_stored() || self.is_key()
    }

    /// The computed expression, for computed properties.
    pub fn expression(&self) -> Option<&str> {
        match self {
            Self::Computed(expression) => Some(expression),
            _ => None,
        }
    }
}

/// Assigns the role of `candidate`.
///
/// Exclusion is checked first, then computed, partition-key and
/// clustering-key markers. A property without any of these is stored.
pub(crate) fn classify(
    type_name: &str,
    markers: &TypeMarkers,
    candidate: &PropertyCandidate,
) -> Result<Role> {
    let mut role_markers = candidate.markers.iter().filter(|m| m.kind().is_role());

    let role_marker = role_markers.next();

    if let Some(other) = role_markers.next() {
        let kinds: Vec<_> = candidate
            .markers
            .iter()
            .map(Marker::kind)
            .filter(|kind| kind.is_role())
            .map(|kind| kind.to_string())
            .collect();

        debug_assert!(role_marker.is_some_and(|first| first.kind() != other.kind()));

        return Err(Error::structural(
            StructuralRule::ConflictingMarkers,
            type_name,
            Some(&candidate.name),
            format!("conflicting role markers: {}", kinds.join(", ")),
        ));
    }

    if candidate.transient
        || markers.is_excluded(&candidate.name)
        || role_marker.is_some_and(|marker| marker.kind() == MarkerKind::Excluded)
    {
        return Ok(Role::Excluded);
    }

    Ok(match role_marker {
        Some(Marker::Computed(expression)) => {
            if expression.trim().is_empty() {
                return Err(Error::structural(
                    StructuralRule::EmptyExpression,
                    type_name,
                    Some(&candidate.name),
                    "computed marker has an empty expression",
                ));
            }

            Role::Computed(expression.clone())
        }
        Some(Marker::PartitionKey(position)) => Role::PartitionKey(*position),
        Some(Marker::ClusteringKey(position)) => Role::ClusteringKey(*position),
        Some(Marker::Excluded | Marker::Name(_)) | None => Role::Stored,
    })
}
