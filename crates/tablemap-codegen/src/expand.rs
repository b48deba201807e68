use crate::schema::{Entity, Field, Role};

use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;

struct Expand<'a> {
    /// The entity being expanded
    entity: &'a Entity,

    /// Path prefix for tablemap types
    tablemap: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let entity_impl = self.expand_entity_impl();
        let primitive_impl = self.expand_primitive_impl();
        let default_check = self.expand_default_check();

        wrap_in_const(quote! {
            #default_check
            #entity_impl
            #primitive_impl
        })
    }

    fn expand_entity_impl(&self) -> TokenStream {
        let tablemap = &self.tablemap;
        let ident = &self.entity.ident;
        let name = ident.to_string();
        let type_markers = self.expand_type_markers();
        let fields = self.entity.fields.iter().map(|field| self.expand_field(field));

        quote! {
            impl #tablemap::Entity for #ident {
                const TYPE_KEY: &'static str = concat!(module_path!(), "::", #name);

                fn describe() -> #tablemap::TypeDescription {
                    #tablemap::TypeDescription::new(
                        <Self as #tablemap::Entity>::TYPE_KEY,
                        #name,
                    )
                    .constructor(#tablemap::Constructor::Public)
                    #type_markers
                    #( #fields )*
                }
            }
        }
    }

    /// Entities can be nested inside other entities as user-defined types.
    fn expand_primitive_impl(&self) -> TokenStream {
        let tablemap = &self.tablemap;
        let ident = &self.entity.ident;

        quote! {
            impl #tablemap::Primitive for #ident {
                fn value_type() -> #tablemap::ValueType {
                    #tablemap::ValueType::custom(<Self as #tablemap::Entity>::TYPE_KEY)
                }
            }
        }
    }

    /// Rows are materialized through `Default`, so require it at compile time.
    fn expand_default_check(&self) -> TokenStream {
        let ident = &self.entity.ident;

        quote_spanned! {ident.span()=>
            fn assert_default<T: ::core::default::Default>() {}
            let _ = assert_default::<#ident>;
        }
    }

    fn expand_type_markers(&self) -> TokenStream {
        let tablemap = &self.tablemap;
        let attr = &self.entity.attr;
        let mut markers = TokenStream::new();

        if let Some(table) = &attr.table {
            markers.extend(quote!(.table_name(#table)));
        }

        if let Some(naming) = &attr.naming {
            markers.extend(quote!(.naming(#tablemap::NamingConvention::#naming)));
        }

        if let Some(converter) = &attr.converter {
            markers.extend(quote!(.converter(#tablemap::ConverterRef::of::<#converter>())));
        }

        for property in &attr.exclude {
            markers.extend(quote!(.exclude(#property)));
        }

        markers
    }

    fn expand_field(&self, field: &Field) -> TokenStream {
        let tablemap = &self.tablemap;
        let name = &field.name;
        let reader = field.reader_name();
        let writer = field.writer_name();
        let ty = &field.ty;

        // Unmapped fields never become columns, so any type is allowed.
        let value_type = if self.is_unmapped(field) {
            quote_spanned! {ty.span()=>
                #tablemap::ValueType::custom(::core::stringify!(#ty))
            }
        } else {
            quote_spanned! {ty.span()=>
                <#ty as #tablemap::Primitive>::value_type()
            }
        };

        let mut markers = TokenStream::new();

        match &field.role {
            Some(Role::PartitionKey(position)) => {
                markers.extend(quote!(.marker(#tablemap::Marker::PartitionKey(#position))));
            }
            Some(Role::ClusteringKey(position)) => {
                markers.extend(quote!(.marker(#tablemap::Marker::ClusteringKey(#position))));
            }
            Some(Role::Computed(expr)) => {
                markers.extend(quote!(.marker(#tablemap::Marker::computed(#expr))));
            }
            Some(Role::Exclude) => {
                markers.extend(quote!(.marker(#tablemap::Marker::Excluded)));
            }
            None => {}
        }

        if let Some(column) = &field.column {
            markers.extend(quote!(.marker(#tablemap::Marker::name(#column))));
        }

        if field.transient {
            markers.extend(quote!(.transient()));
        }

        quote! {
            .field(#tablemap::Field::new(#name, #value_type) #markers)
            .method(#tablemap::Method::reader(#reader, #value_type))
            .method(#tablemap::Method::writer(#writer, #value_type))
        }
    }

    fn is_unmapped(&self, field: &Field) -> bool {
        field.transient
            || matches!(field.role, Some(Role::Exclude))
            || self
                .entity
                .attr
                .exclude
                .iter()
                .any(|property| property.value() == field.name)
    }
}

pub(super) fn entity(entity: &Entity) -> TokenStream {
    Expand {
        entity,
        tablemap: quote!(_tablemap::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use tablemap as _tablemap;
            #code
        };
    }
}
