use crate::schema::{ResolvedProperty, Role, Warning};
use crate::{Error, Result, StructuralRule};

use indexmap::IndexMap;

/// The resolved, immutable mapping between one record type and its table.
///
/// Descriptors are built by [`Resolver::resolve`](crate::Resolver::resolve)
/// and shared read-only by statement builders and row decoders. Every
/// retained property appears in exactly one of the partition-key,
/// clustering-key, stored or computed column sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingDescriptor {
    /// Identity of the record type, as given by its description
    type_key: String,

    /// Declared type name
    type_name: String,

    /// Table name
    schema_name: String,

    /// Every property found on the type, excluded ones included, in
    /// declaration order
    properties: Vec<ResolvedProperty>,

    /// Partition-key properties, by ascending position
    partition_key: Vec<usize>,

    /// Clustering-key properties, by ascending position
    clustering_key: Vec<usize>,

    /// Stored (non-key, non-computed) properties by column name
    stored: IndexMap<String, usize>,

    /// Computed properties by column name
    computed: IndexMap<String, usize>,

    /// Every retained property by column name
    columns: IndexMap<String, usize>,

    /// Every property by declared name
    by_property: IndexMap<String, usize>,

    /// Non-fatal findings from resolution
    warnings: Vec<Warning>,
}

/// Parts of a descriptor computed by the resolver.
pub(crate) struct DescriptorParts {
    pub(crate) type_key: String,
    pub(crate) type_name: String,
    pub(crate) schema_name: String,
    pub(crate) properties: Vec<ResolvedProperty>,
    pub(crate) partition_key: Vec<usize>,
    pub(crate) clustering_key: Vec<usize>,
    pub(crate) warnings: Vec<Warning>,
}

impl MappingDescriptor {
    /// Assembles a descriptor. Column names must already be verified unique.
    pub(crate) fn new(parts: DescriptorParts) -> Self {
        let mut stored = IndexMap::new();
        let mut computed = IndexMap::new();
        let mut columns = IndexMap::new();
        let mut by_property = IndexMap::new();

        for (index, property) in parts.properties.iter().enumerate() {
            by_property.insert(property.property_name.clone(), index);

            let Some(column) = &property.schema_name else {
                continue;
            };

            columns.insert(column.clone(), index);

            match property.role {
                Role::Stored => {
                    stored.insert(column.clone(), index);
                }
                Role::Computed(_) => {
                    computed.insert(column.clone(), index);
                }
                Role::PartitionKey(_) | Role::ClusteringKey(_) | Role::Excluded => {}
            }
        }

        let descriptor = Self {
            type_key: parts.type_key,
            type_name: parts.type_name,
            schema_name: parts.schema_name,
            properties: parts.properties,
            partition_key: parts.partition_key,
            clustering_key: parts.clustering_key,
            stored,
            computed,
            columns,
            by_property,
            warnings: parts.warnings,
        };

        debug_assert!(descriptor.column_sets_partition_retained());
        descriptor
    }

    /// Identity of the record type this descriptor maps.
    pub fn type_key(&self) -> &str {
        &self.type_key
    }

    /// Declared name of the record type.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Table name.
    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    /// Every property, excluded ones included, in declaration order.
    pub fn properties(&self) -> &[ResolvedProperty] {
        &self.properties
    }

    pub fn property_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.properties.iter().map(|property| &property.property_name[..])
    }

    pub fn property(&self, property_name: &str) -> Option<&ResolvedProperty> {
        self.by_property
            .get(property_name)
            .map(|index| &self.properties[*index])
    }

    /// Partition-key column names, by ascending declared position.
    pub fn partition_key_columns(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.partition_key.iter().map(|index| self.column_at(*index))
    }

    /// Clustering-key column names, by ascending declared position.
    pub fn clustering_key_columns(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.clustering_key.iter().map(|index| self.column_at(*index))
    }

    pub fn partition_key_properties(
        &self,
    ) -> impl ExactSizeIterator<Item = &ResolvedProperty> + '_ {
        self.partition_key.iter().map(|index| &self.properties[*index])
    }

    pub fn clustering_key_properties(
        &self,
    ) -> impl ExactSizeIterator<Item = &ResolvedProperty> + '_ {
        self.clustering_key.iter().map(|index| &self.properties[*index])
    }

    /// Stored (non-key, non-computed) columns, by column name.
    pub fn stored_columns(&self) -> impl ExactSizeIterator<Item = (&str, &ResolvedProperty)> + '_ {
        self.stored
            .iter()
            .map(|(column, index)| (&column[..], &self.properties[*index]))
    }

    /// Computed columns and their expressions, by column name. Used to build
    /// select clauses.
    pub fn computed_columns(&self) -> impl ExactSizeIterator<Item = (&str, &str)> + '_ {
        self.computed.iter().map(|(column, index)| {
            let expression = self.properties[*index].role.expression().unwrap_or_default();
            (&column[..], expression)
        })
    }

    /// Looks up the property stored in `column`. Used to decode rows.
    pub fn property_for_column(&self, column: &str) -> Option<&ResolvedProperty> {
        self.columns.get(column).map(|index| &self.properties[*index])
    }

    /// Looks up the column of `property_name`. Returns `None` for excluded
    /// and unknown properties.
    pub fn column_for_property(&self, property_name: &str) -> Option<&str> {
        self.property(property_name)?.schema_name()
    }

    /// Columns a write statement may target: partition keys, then clustering
    /// keys, then stored columns. Computed columns are never included.
    pub fn write_columns(&self) -> impl Iterator<Item = &ResolvedProperty> + '_ {
        self.partition_key_properties()
            .chain(self.clustering_key_properties())
            .chain(self.stored.values().map(|index| &self.properties[*index]))
    }

    /// Returns `true` if `property_name` maps to a column that may be written.
    pub fn is_writable(&self, property_name: &str) -> bool {
        self.property(property_name)
            .is_some_and(|property| property.role.is_writable())
    }

    /// Non-fatal findings reported while resolving this descriptor.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Checks that the type can be used as a table row, which requires at
    /// least one partition-key column. Types used only as embedded values
    /// need not pass this check.
    pub fn verify_row_target(&self) -> Result<()> {
        if self.partition_key.is_empty() {
            return Err(Error::structural(
                StructuralRule::MissingPartitionKey,
                &self.type_key,
                None,
                "a table row type needs at least one partition-key property",
            ));
        }

        Ok(())
    }

    fn column_at(&self, index: usize) -> &str {
        self.properties[index].schema_name().unwrap_or_default()
    }

    fn column_sets_partition_retained(&self) -> bool {
        let retained = self
            .properties
            .iter()
            .filter(|property| !property.role.is_excluded() && !property.role.is_computed())
            .count();

        let keyed = self.partition_key.len() + self.clustering_key.len();

        retained == keyed + self.stored.len()
            && self.columns.len() == retained + self.computed.len()
    }
}
