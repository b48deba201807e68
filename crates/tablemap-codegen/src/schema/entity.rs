use super::{EntityAttr, ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Entity {
    /// Entity attributes
    pub(crate) attr: EntityAttr,

    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Entity fields
    pub(crate) fields: Vec<Field>,
}

impl Entity {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "entity types cannot be generic",
            ));
        }

        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "entity types must have named fields",
            ));
        };

        let mut errs = ErrorSet::new();
        let attr = errs.take(EntityAttr::from_ast(&ast.attrs));

        let fields: Vec<_> = node
            .named
            .iter()
            .filter_map(|field| errs.take(Field::from_ast(field)))
            .collect();

        errs.finish()?;

        Ok(Self {
            attr: attr.unwrap_or_default(),
            ident: ast.ident.clone(),
            fields,
        })
    }
}
