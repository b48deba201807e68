use super::{ResolvedProperty, Role};
use crate::{Error, Result, StructuralRule};

use std::collections::BTreeMap;

/// Indices of key properties, ordered by declared position.
#[derive(Debug, Default)]
pub(crate) struct KeyColumns {
    pub(crate) partition: Vec<usize>,
    pub(crate) clustering: Vec<usize>,
}

/// Orders partition-key and clustering-key properties by ascending position.
///
/// Positions need not be contiguous or start at zero, but must be unique
/// within their key category.
pub(crate) fn order(type_name: &str, properties: &[ResolvedProperty]) -> Result<KeyColumns> {
    let mut partition = BTreeMap::new();
    let mut clustering = BTreeMap::new();

    for (index, property) in properties.iter().enumerate() {
        let (keys, position, category) = match property.role {
            Role::PartitionKey(position) => (&mut partition, position, "partition"),
            Role::ClusteringKey(position) => (&mut clustering, position, "clustering"),
            _ => continue,
        };

        if let Some(previous) = keys.insert(position, index) {
            return Err(Error::structural(
                StructuralRule::DuplicateKeyPosition,
                type_name,
                Some(&property.property_name),
                format!(
                    "{category} key position {position} is already used by `{}`",
                    properties[previous].property_name
                ),
            ));
        }
    }

    Ok(KeyColumns {
        partition: partition.into_values().collect(),
        clustering: clustering.into_values().collect(),
    })
}
