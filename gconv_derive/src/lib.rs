extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{self, parse_macro_input, DeriveInput};

/// Mark a type as a castable record
///
/// The type must also implement `serde::Deserialize` and `Default`; the
/// generated impl only opts it into `gconv::Cast` through the record
/// fallback.
///
#[proc_macro_derive(Record)]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let what = input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        #[automatically_derived]
        impl #impl_generics ::gconv::Record for #what #ty_generics #where_clause {}
    };

    TokenStream::from(expanded)
}
