extern crate proc_macro;

use proc_macro::TokenStream;

#[proc_macro_derive(
    Entity,
    attributes(
        table,
        naming,
        converter,
        exclude,
        partition_key,
        clustering_key,
        computed,
        column,
        transient
    )
)]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    match tablemap_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
