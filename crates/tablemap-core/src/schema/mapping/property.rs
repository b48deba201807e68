use crate::schema::{Role, ValueType};

/// A property after role and name resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedProperty {
    /// Property name as declared on the record type
    pub property_name: String,

    /// Column name. `None` for excluded properties, which are not named.
    pub schema_name: Option<String>,

    pub role: Role,

    pub ty: ValueType,
}

impl ResolvedProperty {
    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    pub fn schema_name(&self) -> Option<&str> {
        self.schema_name.as_deref()
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn ty(&self) -> &ValueType {
        &self.ty
    }
}
