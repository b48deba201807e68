use super::{ConverterRef, Marker, NamingConvention, TypeMarkers, ValueType};

/// Structural description of a record type.
///
/// This is the only input the resolver reads. It is produced either by the
/// `Entity` derive or by hand, so the resolver never introspects types
/// itself.
#[derive(Debug, Clone)]
pub struct TypeDescription {
    /// Identifies the record type process-wide. Used as the cache key.
    pub qualified_name: String,

    /// Declared name of the type, input to table name resolution
    pub name: String,

    /// Visibility of the zero-argument constructor
    pub constructor: Constructor,

    /// Declared methods, in declaration order
    pub methods: Vec<Method>,

    /// Declared fields, in declaration order
    pub fields: Vec<Field>,

    /// Type-level markers
    pub markers: TypeMarkers,
}

/// Visibility of a type's zero-argument constructor, as seen by the mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constructor {
    Public,

    /// Visible within the declaring module only
    Module,

    Private,

    /// The type declares no zero-argument constructor
    Missing,
}

/// A method declared on the type or one of its supertypes.
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub name: String,

    /// Parameter types, not counting the receiver
    pub params: Vec<ValueType>,

    /// Return type, `None` for methods returning nothing
    pub returns: Option<ValueType>,

    /// Declaration level: 0 for the type itself, `n` for its n-th supertype
    pub depth: usize,

    pub markers: Vec<Marker>,
}

/// A field declared on the type or one of its supertypes.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,

    pub ty: ValueType,

    /// Declaration level: 0 for the type itself, `n` for its n-th supertype
    pub depth: usize,

    /// True if the field carries the non-persistent storage qualifier
    pub transient: bool,

    pub markers: Vec<Marker>,
}

impl Constructor {
    pub fn is_accessible(self) -> bool {
        matches!(self, Self::Public | Self::Module)
    }
}

impl TypeDescription {
    /// Creates an empty description for a type with a public zero-argument
    /// constructor.
    pub fn new(qualified_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            name: name.into(),
            constructor: Constructor::Public,
            methods: vec![],
            fields: vec![],
            markers: TypeMarkers::default(),
        }
    }

    pub fn constructor(mut self, constructor: Constructor) -> Self {
        self.constructor = constructor;
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Declares a `getX` / `setX` accessor pair for `property`.
    pub fn property(self, property: &str, ty: ValueType) -> Self {
        self.marked_property(property, ty, [])
    }

    /// Declares a `getX` / `setX` accessor pair with markers on the reader.
    pub fn marked_property(
        self,
        property: &str,
        ty: ValueType,
        markers: impl IntoIterator<Item = Marker>,
    ) -> Self {
        let suffix = capitalize(property);
        let mut reader = Method::reader(format!("get{suffix}"), ty.clone());
        reader.markers.extend(markers);

        self.method(reader)
            .method(Method::writer(format!("set{suffix}"), ty))
    }

    pub fn markers(mut self, markers: TypeMarkers) -> Self {
        self.markers = markers;
        self
    }

    /// Overrides the table name.
    pub fn table_name(mut self, name: impl Into<String>) -> Self {
        self.markers.name = Some(name.into());
        self
    }

    pub fn naming(mut self, convention: NamingConvention) -> Self {
        self.markers.naming = Some(convention);
        self
    }

    pub fn converter(mut self, converter: ConverterRef) -> Self {
        self.markers.converter = Some(converter);
        self
    }

    /// Adds `property` to the type-level excluded-names list.
    pub fn exclude(mut self, property: impl Into<String>) -> Self {
        self.markers.excluded.push(property.into());
        self
    }
}

impl Method {
    /// A zero-argument method returning `ty`.
    pub fn reader(name: impl Into<String>, ty: ValueType) -> Self {
        Self {
            name: name.into(),
            params: vec![],
            returns: Some(ty),
            depth: 0,
            markers: vec![],
        }
    }

    /// A single-argument method taking `ty`.
    pub fn writer(name: impl Into<String>, ty: ValueType) -> Self {
        Self {
            name: name.into(),
            params: vec![ty],
            returns: None,
            depth: 0,
            markers: vec![],
        }
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn declared_at(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }
}

impl Field {
    pub fn new(name: impl Into<String>, ty: ValueType) -> Self {
        Self {
            name: name.into(),
            ty,
            depth: 0,
            transient: false,
            markers: vec![],
        }
    }

    pub fn transient(mut self) -> Self {
        self.transient = true;
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn declared_at(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }
}

fn capitalize(src: &str) -> String {
    let mut chars = src.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
