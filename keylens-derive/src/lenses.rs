//! Implementation of the `#[derive(Lenses)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Field, Fields, Generics, Ident, Index, Member, parse_macro_input};

/// Main implementation of the Lenses derive macro.
pub fn derive_lenses_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Struct(data_struct) => {
            generate_struct_lenses(&input.ident, &input.generics, &data_struct.fields)
        }
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "Lenses can only be derived for structs, not enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Lenses cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// The member used to access a field, and the name of its lens constructor.
fn field_accessor(position: usize, field: &Field) -> (Member, Ident) {
    field.ident.as_ref().map_or_else(
        || {
            (
                Member::Unnamed(Index::from(position)),
                format_ident!("field_{}_lens", position),
            )
        },
        |name| (Member::Named(name.clone()), format_ident!("{}_lens", name)),
    )
}

/// Generates lens constructors for a struct's fields.
fn generate_struct_lenses(name: &Ident, generics: &Generics, fields: &Fields) -> TokenStream2 {
    if matches!(fields, Fields::Unit) {
        return syn::Error::new_spanned(
            name,
            "Lenses cannot be derived for unit structs (structs with no fields).",
        )
        .to_compile_error();
    }

    let lens_methods = fields.iter().enumerate().map(|(position, field)| {
        let (member, method_name) = field_accessor(position, field);
        let field_type = &field.ty;
        let doc = format!("Returns a lens focusing on the `{}` field.", quote!(#member));

        quote! {
            #[doc = #doc]
            #[inline]
            #[must_use]
            pub fn #method_name() -> impl ::keylens::optics::Lens<Self, #field_type> + Clone {
                ::keylens::optics::FunctionLens::new(
                    |source: &Self| &source.#member,
                    |mut source: Self, value: #field_type| {
                        source.#member = value;
                        source
                    },
                )
            }
        }
    });

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#lens_methods)*
        }
    }
}
