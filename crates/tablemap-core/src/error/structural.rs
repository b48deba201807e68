use super::Error;

/// The shape rule a type description violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum StructuralRule {
    /// The type has no zero-argument constructor visible to the mapper.
    MissingConstructor,

    /// A marked reader has no writer taking the same value type.
    MissingWriter,

    /// A marked field is not exposed by any reader and writer pair.
    MissingAccessor,

    /// Two accessors (or fields) at the same declaration level derive the
    /// same property.
    AmbiguousAccessor,

    /// A property carries more than one of the excluded, computed,
    /// partition-key and clustering-key markers.
    ConflictingMarkers,

    /// The same marker appears twice on a single element, or on both the
    /// field and the accessor while strict marker checking is enabled.
    DuplicateMarker,

    /// A computed marker was declared without an expression.
    EmptyExpression,

    /// Two properties share a position within the same key category.
    DuplicateKeyPosition,

    /// A table-row target has no partition-key column.
    MissingPartitionKey,
}

/// Error when a type description violates a shape rule.
///
/// These are always fatal for the type being resolved.
#[derive(Debug)]
pub(super) struct StructuralError {
    pub(super) rule: StructuralRule,
    pub(super) type_name: Box<str>,
    pub(super) property: Option<Box<str>>,
    message: Box<str>,
}

impl std::error::Error for StructuralError {}

impl core::fmt::Display for StructuralError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid record type `{}`: ", self.type_name)?;

        if let Some(property) = &self.property {
            write!(f, "property `{property}`: ")?;
        }

        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates a structural error for `type_name`, optionally scoped to one
    /// property.
    pub fn structural(
        rule: StructuralRule,
        type_name: impl Into<String>,
        property: Option<&str>,
        message: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::Structural(StructuralError {
            rule,
            type_name: type_name.into().into(),
            property: property.map(Into::into),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a structural error.
    pub fn is_structural(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Structural(_))
    }

    /// Returns the violated shape rule if this is a structural error.
    pub fn structural_rule(&self) -> Option<StructuralRule> {
        match self.kind() {
            super::ErrorKind::Structural(err) => Some(err.rule),
            _ => None,
        }
    }
}
