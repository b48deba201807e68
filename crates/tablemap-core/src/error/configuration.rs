use super::Error;

/// The override that could not be honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConfigurationRule {
    /// A custom name converter was declared but cannot be instantiated.
    ConverterUnavailable,

    /// Two retained properties resolve to the same column name.
    NameCollision,

    /// An explicit override or a converter produced an empty name.
    EmptyName,
}

/// Error when a declared override cannot be honored.
#[derive(Debug)]
pub(super) struct ConfigurationError {
    pub(super) rule: ConfigurationRule,
    pub(super) type_name: Box<str>,
    pub(super) property: Option<Box<str>>,
    message: Box<str>,
}

impl std::error::Error for ConfigurationError {}

impl core::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot map record type `{}`: ", self.type_name)?;

        if let Some(property) = &self.property {
            write!(f, "property `{property}`: ")?;
        }

        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates a configuration error for `type_name`.
    pub fn configuration(
        rule: ConfigurationRule,
        type_name: impl Into<String>,
        property: Option<&str>,
        message: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::Configuration(ConfigurationError {
            rule,
            type_name: type_name.into().into(),
            property: property.map(Into::into),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Configuration(_))
    }

    /// Returns the override rule if this is a configuration error.
    pub fn configuration_rule(&self) -> Option<ConfigurationRule> {
        match self.kind() {
            super::ErrorKind::Configuration(err) => Some(err.rule),
            _ => None,
        }
    }
}
