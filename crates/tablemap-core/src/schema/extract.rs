use super::{Field, Marker, Method, TypeDescription, ValueType, Warning};
use crate::{Error, Result, StructuralRule};

use indexmap::IndexMap;
use log::debug;

/// One readable and writable property found on a record type.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyCandidate {
    /// Property name derived from the reader
    pub name: String,

    /// Value type shared by the reader and the writer
    pub ty: ValueType,

    /// True if a field with the property's name and type is declared
    pub has_backing_field: bool,

    /// True if the backing field carries the non-persistent qualifier
    pub transient: bool,

    /// Field and accessor markers, merged with the accessor's taking
    /// precedence
    pub markers: Vec<Marker>,
}

/// Accessor naming: `getProductId` and `get_product_id` read the properties
/// `productId` and `product_id` and pair with `setProductId` and
/// `set_product_id`.
struct AccessorName {
    property: String,
    suffix: String,
}

pub(crate) struct Extract<'a> {
    description: &'a TypeDescription,

    /// Fail instead of warning when field and accessor repeat a marker
    strict_markers: bool,

    pub(crate) warnings: Vec<Warning>,
}

impl<'a> Extract<'a> {
    pub(crate) fn new(description: &'a TypeDescription, strict_markers: bool) -> Self {
        Self {
            description,
            strict_markers,
            warnings: vec![],
        }
    }

    pub(crate) fn candidates(&mut self) -> Result<Vec<PropertyCandidate>> {
        let description = self.description;

        if !description.constructor.is_accessible() {
            return Err(self.error(
                StructuralRule::MissingConstructor,
                None,
                format!(
                    "no accessible zero-argument constructor (found {:?})",
                    description.constructor
                ),
            ));
        }

        // Group readers by the property they derive, in declaration order.
        let mut readers: IndexMap<String, Vec<(&Method, AccessorName)>> = IndexMap::new();

        for method in &description.methods {
            let Some(ty) = &method.returns else { continue };

            if !method.params.is_empty() {
                continue;
            }

            if let Some(name) = reader_name(&method.name, ty) {
                readers
                    .entry(name.property.clone())
                    .or_default()
                    .push((method, name));
            }
        }

        let mut candidates = vec![];

        for (property, declared) in &readers {
            let (reader, name) = self.most_specific(property, declared, |(method, _)| {
                method.depth
            })?;

            let Some(ty) = &reader.returns else { continue };
            let field = self.backing_field(property, ty)?;

            let Some(writer) = self.writer(property, name, ty)? else {
                let marked = !reader.markers.is_empty()
                    || field.is_some_and(|field| !field.markers.is_empty());

                if marked {
                    return Err(self.error(
                        StructuralRule::MissingWriter,
                        Some(property),
                        format!(
                            "marked reader `{}` has no writer `set{}` taking {ty}",
                            reader.name, name.suffix
                        ),
                    ));
                }

                debug!(
                    "`{}`: reader `{}` has no matching writer; not a property",
                    description.qualified_name, reader.name
                );
                continue;
            };

            for marker in &writer.markers {
                self.warnings.push(Warning::IgnoredWriterMarker {
                    property: property.clone(),
                    method: writer.name.clone(),
                    marker: marker.kind(),
                });
            }

            let field_markers = field.map(|field| &field.markers[..]).unwrap_or(&[]);
            let markers = self.merge_markers(property, field_markers, &reader.markers)?;

            candidates.push(PropertyCandidate {
                name: property.clone(),
                ty: ty.clone(),
                has_backing_field: field.is_some(),
                transient: field.is_some_and(|field| field.transient),
                markers,
            });
        }

        self.check_marked_fields(&candidates)?;

        Ok(candidates)
    }

    /// Markers on a field only take effect through the property that field
    /// backs. A marked field that backs no property is an error.
    fn check_marked_fields(&self, candidates: &[PropertyCandidate]) -> Result<()> {
        let fields = &self.description.fields;

        for field in fields {
            if field.markers.is_empty() || field.transient {
                continue;
            }

            let shadowed = fields
                .iter()
                .any(|other| other.name == field.name && other.depth < field.depth);

            if shadowed {
                continue;
            }

            let backed = candidates
                .iter()
                .any(|candidate| candidate.name == field.name && candidate.ty == field.ty);

            if !backed {
                return Err(self.error(
                    StructuralRule::MissingAccessor,
                    Some(&field.name),
                    format!(
                        "marked field of type {} has no reader and writer pair of that type",
                        field.ty
                    ),
                ));
            }
        }

        Ok(())
    }

    /// Finds the writer for `property` whose single parameter matches the
    /// reader's type. The writer's own return type is ignored.
    fn writer(
        &self,
        property: &str,
        name: &AccessorName,
        ty: &ValueType,
    ) -> Result<Option<&'a Method>> {
        let writer_name = format!("set{}", name.suffix);

        let declared: Vec<_> = self
            .description
            .methods
            .iter()
            .filter(|method| {
                method.name == writer_name && method.params.len() == 1 && method.params[0] == *ty
            })
            .collect();

        if declared.is_empty() {
            return Ok(None);
        }

        self.most_specific(property, &declared, |method| method.depth)
            .map(|method| Some(*method))
    }

    /// Finds the field with the property's exact name and type, if any.
    fn backing_field(&self, property: &str, ty: &ValueType) -> Result<Option<&'a Field>> {
        let declared: Vec<_> = self
            .description
            .fields
            .iter()
            .filter(|field| field.name == property && field.ty == *ty)
            .collect();

        if declared.is_empty() {
            return Ok(None);
        }

        self.most_specific(property, &declared, |field| field.depth)
            .map(|field| Some(*field))
    }

    /// Picks the declaration closest to the type itself. Two declarations at
    /// that level are ambiguous.
    fn most_specific<'b, T>(
        &self,
        property: &str,
        declared: &'b [T],
        depth: impl Fn(&T) -> usize,
    ) -> Result<&'b T> {
        let mut best: Option<&T> = None;
        let mut ambiguous = false;

        for decl in declared {
            match best {
                Some(current) if depth(decl) > depth(current) => {}
                Some(current) if depth(decl) == depth(current) => ambiguous = true,
                _ => {
                    best = Some(decl);
                    ambiguous = false;
                }
            }
        }

        let Some(best) = best else {
            crate::bail!("no declarations of `{property}` to choose from");
        };

        if ambiguous {
            return Err(self.error(
                StructuralRule::AmbiguousAccessor,
                Some(property),
                format!("declared more than once at declaration level {}", depth(best)),
            ));
        }

        Ok(best)
    }

    /// Merges field and accessor markers. For each marker kind, the
    /// accessor's marker wins and the duplicate is reported.
    fn merge_markers(
        &mut self,
        property: &str,
        field: &[Marker],
        accessor: &[Marker],
    ) -> Result<Vec<Marker>> {
        self.check_unique_kinds(property, field, "field")?;
        self.check_unique_kinds(property, accessor, "accessor")?;

        let mut merged = accessor.to_vec();

        for marker in field {
            let kind = marker.kind();

            if !accessor.iter().any(|other| other.kind() == kind) {
                merged.push(marker.clone());
                continue;
            }

            if self.strict_markers {
                return Err(self.error(
                    StructuralRule::DuplicateMarker,
                    Some(property),
                    format!("the {kind} marker is declared on both the field and the accessor"),
                ));
            }

            self.warnings.push(Warning::DuplicateMarker {
                property: property.to_string(),
                marker: kind,
            });
        }

        Ok(merged)
    }

    fn check_unique_kinds(&self, property: &str, markers: &[Marker], element: &str) -> Result<()> {
        for (i, marker) in markers.iter().enumerate() {
            if markers[..i].iter().any(|other| other.kind() == marker.kind()) {
                return Err(self.error(
                    StructuralRule::DuplicateMarker,
                    Some(property),
                    format!("the {} marker is declared twice on the {element}", marker.kind()),
                ));
            }
        }

        Ok(())
    }

    fn error(&self, rule: StructuralRule, property: Option<&str>, message: String) -> Error {
        Error::structural(rule, &self.description.qualified_name, property, message)
    }
}

/// Derives the property read by `method`, if it follows the reader naming
/// convention. `is` prefixes are only recognized for boolean readers.
fn reader_name(method: &str, ty: &ValueType) -> Option<AccessorName> {
    let suffix = method
        .strip_prefix("get")
        .or_else(|| method.strip_prefix("is").filter(|_| ty.is_bool()))?;

    let property = if let Some(snake) = suffix.strip_prefix('_') {
        snake.to_string()
    } else if suffix.starts_with(char::is_uppercase) {
        decapitalize(suffix)
    } else {
        return None;
    };

    if property.is_empty() {
        return None;
    }

    Some(AccessorName {
        property,
        suffix: suffix.to_string(),
    })
}

/// Lower-cases the first character, leaving acronyms such as `URL` intact.
fn decapitalize(src: &str) -> String {
    let mut chars = src.chars();

    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) if first.is_uppercase() && second.is_uppercase() => {
            src.to_string()
        }
        (Some(first), _) => first.to_lowercase().chain(src.chars().skip(1)).collect(),
        (None, _) => String::new(),
    }
}
