use super::ErrorSet;

use syn::punctuated::Punctuated;

/// Naming conventions accepted by `#[naming(..)]`.
const CONVENTIONS: &[&str] = &[
    "ExactCase",
    "CaseInsensitive",
    "SnakeCaseInsensitive",
    "UpperSnakeCase",
    "LowerCamelCase",
    "UpperCamelCase",
    "LowerCase",
    "UpperCase",
];

#[derive(Debug, Default)]
pub(crate) struct EntityAttr {
    /// Explicit table name: `#[table = "name"]`
    pub(crate) table: Option<syn::LitStr>,

    /// Naming convention applied to the type and its properties
    pub(crate) naming: Option<syn::Ident>,

    /// Converter type used to derive property column names
    pub(crate) converter: Option<syn::Path>,

    /// Property names excluded from the mapping
    pub(crate) exclude: Vec<syn::LitStr>,
}

impl EntityAttr {
    pub(super) fn from_ast(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut errs = ErrorSet::new();
        let mut result = Self::default();

        for attr in attrs {
            if attr.path().is_ident("table") {
                if result.table.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[table] attribute"));
                } else {
                    result.table = errs.take(parse_table(attr));
                }
            } else if attr.path().is_ident("naming") {
                if result.naming.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[naming] attribute"));
                } else {
                    result.naming = errs.take(parse_naming(attr));
                }
            } else if attr.path().is_ident("converter") {
                if result.converter.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[converter] attribute",
                    ));
                } else {
                    result.converter = errs.take(attr.parse_args());
                }
            } else if attr.path().is_ident("exclude") {
                let names = attr.parse_args_with(
                    Punctuated::<syn::LitStr, syn::Token![,]>::parse_terminated,
                );

                if let Some(names) = errs.take(names) {
                    result.exclude.extend(names);
                }
            }
        }

        errs.finish()?;
        Ok(result)
    }
}

fn parse_table(attr: &syn::Attribute) -> syn::Result<syn::LitStr> {
    let syn::Meta::NameValue(meta) = &attr.meta else {
        return Err(syn::Error::new_spanned(
            attr,
            "expected `table = \"table_name\"`",
        ));
    };

    match &meta.value {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Str(lit),
            ..
        }) => Ok(lit.clone()),
        _ => Err(syn::Error::new_spanned(
            attr,
            "expected `table = \"table_name\"`",
        )),
    }
}

fn parse_naming(attr: &syn::Attribute) -> syn::Result<syn::Ident> {
    let ident: syn::Ident = attr.parse_args()?;

    if !CONVENTIONS.iter().any(|convention| ident == convention) {
        return Err(syn::Error::new_spanned(
            &ident,
            format!(
                "unknown naming convention `{ident}`; expected one of {}",
                CONVENTIONS.join(", ")
            ),
        ));
    }

    Ok(ident)
}
