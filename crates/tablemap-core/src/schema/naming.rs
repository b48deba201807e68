use super::{Name, TypeDescription};
use crate::{ConfigurationRule, Error, Result};
use std::fmt;

/// Built-in, pure name transformations.
///
/// The default, [`SnakeCaseInsensitive`](Self::SnakeCaseInsensitive), turns
/// `productId` into `product_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NamingConvention {
    /// The declared name, unchanged and case-sensitive
    ExactCase,

    /// The declared name, lower-cased
    CaseInsensitive,

    /// `productId`
    LowerCamelCase,

    /// `ProductId`
    UpperCamelCase,

    /// `product_id`
    #[default]
    SnakeCaseInsensitive,

    /// `PRODUCT_ID`
    UpperSnakeCase,

    /// `productid`
    LowerCase,

    /// `PRODUCTID`
    UpperCase,
}

/// User logic that maps a declared property name to a column name.
///
/// The resolver creates one instance per resolution and calls it only from
/// the resolving thread, so implementations need not be thread-safe.
pub trait NameConverter {
    fn convert(&self, name: &str) -> String;
}

/// Reference to a custom [`NameConverter`] declared on a record type.
#[derive(Clone)]
pub struct ConverterRef {
    name: String,
    constructor: Option<fn() -> Box<dyn NameConverter>>,
}

/// The naming sources that apply to one record type.
///
/// Precedence, highest first: an explicit override on the element, the
/// custom converter (properties only), the type's naming convention, and
/// finally the resolver's default convention.
pub(crate) struct NamingStrategy {
    type_name: String,

    explicit_type_name: Option<String>,

    converter: Option<Box<dyn NameConverter>>,

    convention: Option<NamingConvention>,

    default_convention: NamingConvention,
}

impl NamingConvention {
    pub const ALL: [NamingConvention; 8] = [
        Self::ExactCase,
        Self::CaseInsensitive,
        Self::LowerCamelCase,
        Self::UpperCamelCase,
        Self::SnakeCaseInsensitive,
        Self::UpperSnakeCase,
        Self::LowerCase,
        Self::UpperCase,
    ];

    pub fn apply(self, declared: &str) -> String {
        match self {
            Self::ExactCase => declared.to_string(),
            Self::CaseInsensitive => declared.to_lowercase(),
            Self::LowerCamelCase => Name::new(declared).camel_case(),
            Self::UpperCamelCase => Name::new(declared).upper_camel_case(),
            Self::SnakeCaseInsensitive => Name::new(declared).snake_case(),
            Self::UpperSnakeCase => Name::new(declared).upper_snake_case(),
            Self::LowerCase => Name::new(declared).lower_case(),
            Self::UpperCase => Name::new(declared).upper_case(),
        }
    }
}

impl ConverterRef {
    /// References a converter type constructed through [`Default`].
    pub fn of<C>() -> Self
    where
        C: NameConverter + Default + 'static,
    {
        Self {
            name: std::any::type_name::<C>().to_string(),
            constructor: Some(construct::<C>),
        }
    }

    /// References a converter that has no accessible zero-argument
    /// constructor. Resolving a type that declares it always fails.
    pub fn unavailable(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constructor: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_instantiable(&self) -> bool {
        self.constructor.is_some()
    }

    fn instantiate(&self) -> Option<Box<dyn NameConverter>> {
        self.constructor.map(|constructor| constructor())
    }
}

fn construct<C>() -> Box<dyn NameConverter>
where
    C: NameConverter + Default + 'static,
{
    Box::new(C::default())
}

impl fmt::Debug for ConverterRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterRef")
            .field("name", &self.name)
            .field("instantiable", &self.is_instantiable())
            .finish()
    }
}

impl NamingStrategy {
    /// Collects the naming sources declared on `description`, instantiating
    /// its custom converter if one is declared.
    pub(crate) fn new(
        description: &TypeDescription,
        default_convention: NamingConvention,
    ) -> Result<Self> {
        let markers = &description.markers;

        let converter = match &markers.converter {
            Some(converter) => Some(converter.instantiate().ok_or_else(|| {
                Error::configuration(
                    ConfigurationRule::ConverterUnavailable,
                    &description.qualified_name,
                    None,
                    format!(
                        "custom converter `{}` has no accessible zero-argument constructor",
                        converter.name()
                    ),
                )
            })?),
            None => None,
        };

        Ok(Self {
            type_name: description.qualified_name.clone(),
            explicit_type_name: markers.name.clone(),
            converter,
            convention: markers.naming,
            default_convention,
        })
    }

    /// Resolves the table name for the type declared as `declared`.
    pub(crate) fn type_name(&self, declared: &str) -> Result<String> {
        let name = match &self.explicit_type_name {
            Some(explicit) => explicit.clone(),
            None => self.convention().apply(declared),
        };

        self.non_empty(name, None, "table name")
    }

    /// Resolves the column name for the property declared as `declared`.
    pub(crate) fn property_name(&self, declared: &str, explicit: Option<&str>) -> Result<String> {
        let name = if let Some(explicit) = explicit {
            explicit.to_string()
        } else if let Some(converter) = &self.converter {
            // Converters are arbitrary user logic; never cache their output.
            converter.convert(declared)
        } else {
            self.convention().apply(declared)
        };

        self.non_empty(name, Some(declared), "column name")
    }

    fn convention(&self) -> NamingConvention {
        self.convention.unwrap_or(self.default_convention)
    }

    fn non_empty(&self, name: String, property: Option<&str>, what: &str) -> Result<String> {
        if name.is_empty() {
            return Err(Error::configuration(
                ConfigurationRule::EmptyName,
                &self.type_name,
                property,
                format!("resolved {what} is empty"),
            ));
        }

        Ok(name)
    }
}

impl fmt::Debug for NamingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamingStrategy")
            .field("explicit_type_name", &self.explicit_type_name)
            .field("converter", &self.converter.is_some())
            .field("convention", &self.convention())
            .finish()
    }
}
