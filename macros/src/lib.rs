//! Provides process macros for `fixstr` library.

#![deny(missing_docs)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote, ToTokens, TokenStreamExt};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Error, Fields, Type};

extern crate proc_macro;

macro_rules! error {
    ($tokens:expr, $msg:expr) => {
        Error::new($tokens.span(), $msg).to_compile_error()
    };
    ($tokens:expr, $fmt:expr, $($args:expr),*) => {
        error!($tokens, format!($fmt, $($args),*))
    };
}

/// Adds an associated constant `<FIELD>_SIZE` holding the size in bytes of each field to a struct
/// with named fields. For fields of an array type, `<FIELD>_DIM` holding the number of elements is
/// added as well. The constants have the same visibility as their fields.
///
/// The generated code refers to `::fixstr`, so use this macro through its re-export.
///
/// # Example
///
/// ```ignore
/// #[derive(MemberSize)]
/// struct Header {
///     magic: u32,
///     name: [u16; 8],
/// }
///
/// // Header::MAGIC_SIZE == 4
/// // Header::NAME_SIZE == 16
/// // Header::NAME_DIM == 8
/// ```
#[proc_macro_derive(MemberSize)]
pub fn member_size(input: TokenStream) -> TokenStream {
    // Collect errors to notify as many as possible at once.
    let mut errors = TokenStream2::new();

    let input = parse_macro_input!(input as DeriveInput);

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Some(&fields.named),
            // Unit structs have no tokens to point at.
            Fields::Unit => {
                errors.append_all(error!(
                    input.ident,
                    "MemberSize requires a struct with named fields"
                ));
                None
            }
            Fields::Unnamed(fields) => {
                errors.append_all(error!(
                    fields,
                    "MemberSize requires a struct with named fields"
                ));
                None
            }
        },
        Data::Enum(data) => {
            errors.append_all(error!(data.enum_token, "MemberSize cannot be derived for enums"));
            None
        }
        Data::Union(data) => {
            errors.append_all(error!(
                data.union_token,
                "MemberSize cannot be derived for unions"
            ));
            None
        }
    };

    let mut consts = TokenStream2::new();
    let mut names: Vec<String> = Vec::new();
    for field in fields.into_iter().flatten() {
        let Some(ident) = &field.ident else {
            continue;
        };
        let field_name = ident.to_string();
        let field_name = field_name.trim_start_matches("r#");
        let name = field_name.to_uppercase();

        // `foo` and `FOO` would generate the same constants.
        if names.contains(&name) {
            errors.append_all(error!(
                ident,
                "field `{}` collides with another field as `{}_SIZE`",
                field_name,
                name
            ));
            continue;
        }

        let vis = &field.vis;
        let ty = &field.ty;
        let size_ident = format_ident!("{}_SIZE", &name, span = ident.span());
        let size_doc = format!("Size of `{}` in bytes.", field_name);
        consts.append_all(quote! {
            #[doc = #size_doc]
            #vis const #size_ident: usize = ::core::mem::size_of::<#ty>();
        });

        if is_array(ty) {
            let dim_ident = format_ident!("{}_DIM", &name, span = ident.span());
            let dim_doc = format!("Number of elements of `{}`.", field_name);
            consts.append_all(quote! {
                #[doc = #dim_doc]
                #vis const #dim_ident: usize = <#ty as ::fixstr::basic::Dim>::DIM;
            });
        }

        names.push(name);
    }

    // Return all errors we can notify.
    if !errors.is_empty() {
        return errors.into_token_stream().into();
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let ret = quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #consts
        }
    };

    ret.into()
}

/// Returns `true` if `ty` is written as an array type, looking through parentheses and invisible
/// groups.
fn is_array(ty: &Type) -> bool {
    match ty {
        Type::Array(_) => true,
        Type::Paren(ty) => is_array(&ty.elem),
        Type::Group(ty) => is_array(&ty.elem),
        _ => false,
    }
}
