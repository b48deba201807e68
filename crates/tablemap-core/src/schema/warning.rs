use super::MarkerKind;
use std::fmt;

/// A non-fatal finding reported alongside a resolved descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Warning {
    /// The same marker is declared on both the field and the accessor; the
    /// accessor's marker was used.
    DuplicateMarker { property: String, marker: MarkerKind },

    /// A marker was declared on a writer method, where markers are not read.
    IgnoredWriterMarker {
        property: String,
        method: String,
        marker: MarkerKind,
    },
}

impl Warning {
    pub fn property(&self) -> &str {
        match self {
            Self::DuplicateMarker { property, .. } => property,
            Self::IgnoredWriterMarker { property, .. } => property,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateMarker { property, marker } => write!(
                f,
                "property `{property}` declares the {marker} marker on both its field and its accessor; the accessor's marker is used"
            ),
            Self::IgnoredWriterMarker {
                property,
                method,
                marker,
            } => write!(
                f,
                "property `{property}`: {marker} marker on writer `{method}` is ignored"
            ),
        }
    }
}
