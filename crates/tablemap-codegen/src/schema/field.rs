use super::ErrorSet;

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Property name, with any raw identifier prefix removed
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Mapping role, when one is declared
    pub(crate) role: Option<Role>,

    /// Explicit column name: `#[column("name")]`
    pub(crate) column: Option<syn::LitStr>,

    /// True if the field is annotated with `#[transient]`
    pub(crate) transient: bool,
}

#[derive(Debug)]
pub(crate) enum Role {
    PartitionKey(i32),
    ClusteringKey(i32),
    Computed(syn::LitStr),
    Exclude,
}

impl Role {
    fn attr_name(&self) -> &'static str {
        match self {
            Self::PartitionKey(_) => "partition_key",
            Self::ClusteringKey(_) => "clustering_key",
            Self::Computed(_) => "computed",
            Self::Exclude => "exclude",
        }
    }
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "entity fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut role: Option<Role> = None;
        let mut column = None;
        let mut transient = false;

        for attr in &field.attrs {
            let parsed = if attr.path().is_ident("partition_key") {
                Some(position(attr).map(Role::PartitionKey))
            } else if attr.path().is_ident("clustering_key") {
                Some(position(attr).map(Role::ClusteringKey))
            } else if attr.path().is_ident("computed") {
                Some(expression(attr).map(Role::Computed))
            } else if attr.path().is_ident("exclude") {
                Some(flag(attr).map(|_| Role::Exclude))
            } else {
                None
            };

            if let Some(parsed) = parsed {
                let Some(parsed) = errs.take(parsed) else {
                    continue;
                };

                match &role {
                    Some(existing) if existing.attr_name() == parsed.attr_name() => {
                        errs.push(syn::Error::new_spanned(
                            attr,
                            format!("duplicate #[{}] attribute", parsed.attr_name()),
                        ));
                    }
                    Some(existing) => {
                        errs.push(syn::Error::new_spanned(
                            attr,
                            format!(
                                "field has more than one role attribute: #[{}] and #[{}]",
                                existing.attr_name(),
                                parsed.attr_name()
                            ),
                        ));
                    }
                    None => role = Some(parsed),
                }
            } else if attr.path().is_ident("column") {
                if column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    column = errs.take(column_name(attr));
                }
            } else if attr.path().is_ident("transient") {
                if transient {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[transient] attribute",
                    ));
                } else if errs.take(flag(attr)).is_some() {
                    transient = true;
                }
            }
        }

        errs.finish()?;

        Ok(Self {
            name: ident.unraw().to_string(),
            ty: field.ty.clone(),
            role,
            column,
            transient,
        })
    }

    /// Name of the generated reader accessor.
    pub(crate) fn reader_name(&self) -> String {
        format!("get_{}", self.name)
    }

    /// Name of the generated writer accessor.
    pub(crate) fn writer_name(&self) -> String {
        format!("set_{}", self.name)
    }
}

/// `#[partition_key]` or `#[partition_key(1)]`; the position defaults to 0.
fn position(attr: &syn::Attribute) -> syn::Result<i32> {
    match &attr.meta {
        syn::Meta::Path(_) => Ok(0),
        syn::Meta::List(_) => attr.parse_args::<syn::LitInt>()?.base10_parse(),
        syn::Meta::NameValue(_) => Err(syn::Error::new_spanned(
            attr,
            "expected a key position, e.g. `(0)`",
        )),
    }
}

fn expression(attr: &syn::Attribute) -> syn::Result<syn::LitStr> {
    let lit: syn::LitStr = attr.parse_args()?;

    if lit.value().trim().is_empty() {
        return Err(syn::Error::new_spanned(
            lit,
            "computed expression must not be empty",
        ));
    }

    Ok(lit)
}

fn column_name(attr: &syn::Attribute) -> syn::Result<syn::LitStr> {
    let lit: syn::LitStr = attr.parse_args()?;

    if lit.value().is_empty() {
        return Err(syn::Error::new_spanned(lit, "column name must not be empty"));
    }

    Ok(lit)
}

fn flag(attr: &syn::Attribute) -> syn::Result<()> {
    attr.meta.require_path_only()?;
    Ok(())
}
