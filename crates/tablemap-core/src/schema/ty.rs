use std::fmt;

/// Semantic type of a property value.
///
/// Reader and writer accessors are paired only when their value types are
/// equal, so nested types compare structurally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueType {
    Bool,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Text,
    Uuid,
    Blob,
    Timestamp,
    List(Box<ValueType>),
    Set(Box<ValueType>),
    Map(Box<ValueType>, Box<ValueType>),

    /// A value that may be absent
    Optional(Box<ValueType>),

    /// A user-defined value type, identified by name
    Custom(String),
}

impl ValueType {
    pub fn list(item: ValueType) -> Self {
        Self::List(Box::new(item))
    }

    pub fn set(item: ValueType) -> Self {
        Self::Set(Box::new(item))
    }

    pub fn map(key: ValueType, value: ValueType) -> Self {
        Self::Map(Box::new(key), Box::new(value))
    }

    pub fn optional(inner: ValueType) -> Self {
        Self::Optional(Box::new(inner))
    }

    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }

    /// True for the boolean type, which also admits `is`-prefixed readers.
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("boolean"),
            Self::I8 => f.write_str("tinyint"),
            Self::I16 => f.write_str("smallint"),
            Self::I32 => f.write_str("int"),
            Self::I64 => f.write_str("bigint"),
            Self::F32 => f.write_str("float"),
            Self::F64 => f.write_str("double"),
            Self::Text => f.write_str("text"),
            Self::Uuid => f.write_str("uuid"),
            Self::Blob => f.write_str("blob"),
            Self::Timestamp => f.write_str("timestamp"),
            Self::List(item) => write!(f, "list<{item}>"),
            Self::Set(item) => write!(f, "set<{item}>"),
            Self::Map(key, value) => write!(f, "map<{key}, {value}>"),
            Self::Optional(inner) => write!(f, "{inner}?"),
            Self::Custom(name) => f.write_str(name),
        }
    }
}
