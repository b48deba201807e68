use super::ResolvedProperty;
use crate::{ConfigurationRule, Error, Result};

use std::collections::HashMap;

pub(super) struct Verify<'a> {
    type_name: &'a str,
    properties: &'a [ResolvedProperty],
}

impl<'a> Verify<'a> {
    pub(super) fn new(type_name: &'a str, properties: &'a [ResolvedProperty]) -> Self {
        Self {
            type_name,
            properties,
        }
    }

    pub(super) fn verify(&self) -> Result<()> {
        debug_assert!(self.verify_excluded_are_unnamed());

        self.verify_column_names_are_unique()
    }

    fn verify_excluded_are_unnamed(&self) -> bool {
        self.properties
            .iter()
            .all(|property| property.role.is_excluded() == property.schema_name.is_none())
    }

    fn verify_column_names_are_unique(&self) -> Result<()> {
        let mut columns = HashMap::new();

        for property in self.properties {
            let Some(column) = property.schema_name() else {
                continue;
            };

            if let Some(previous) = columns.insert(column, property.property_name()) {
                return Err(Error::configuration(
                    ConfigurationRule::NameCollision,
                    self.type_name,
                    Some(property.property_name()),
                    format!(
                        "properties `{previous}` and `{}` both resolve to column `{column}`",
                        property.property_name()
                    ),
                ));
            }
        }

        Ok(())
    }
}
