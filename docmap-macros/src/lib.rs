//! `#[derive(DocumentType)]`: registers a struct as a mapping target.
//!
//! The derive builds the type's field-descriptor table as a promoted
//! constant (name, declared shape, and a type-checked setter per field)
//! together with a `Default`-based instance factory. That table is the
//! entire contract: the engine never inspects the type at runtime.
//!
//! Requirements on the target type:
//! - a struct with named fields, no generics;
//! - `Default` (the factory builds the zero-initialized starting instance);
//! - every field type registered as a `FieldType` (all derived types are,
//!   recursively).

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

#[proc_macro_derive(DocumentType)]
pub fn derive_document_type(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let name_str = name.to_string();

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "DocumentType cannot be derived for generic types",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "DocumentType requires a struct with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "DocumentType can only be derived for structs",
            ));
        }
    };

    let field_defs = fields.iter().map(|field| {
        let ident = field.ident.as_ref().expect("named field");
        let ty = &field.ty;
        let field_name = ident.to_string();
        quote! {
            ::docmap::FieldDef {
                name: #field_name,
                shape: <#ty as ::docmap::FieldType>::SHAPE,
                assign: |instance, coerced| {
                    let target = instance
                        .downcast_mut::<#name>()
                        .ok_or(::docmap::AbsorbError::InstanceMismatch { expected: #name_str })?;
                    target.#ident = <#ty as ::docmap::FieldType>::absorb(coerced)?;
                    ::core::result::Result::Ok(())
                },
            }
        }
    });

    Ok(quote! {
        #[automatically_derived]
        impl ::docmap::DocumentType for #name {
            const SHAPE: &'static ::docmap::TypeShape =
                &::docmap::TypeShape::Struct(::docmap::StructShape {
                    type_name: #name_str,
                    fields: &[ #( #field_defs ),* ],
                    factory: ::core::option::Option::Some(|| {
                        ::std::boxed::Box::new(<#name as ::core::default::Default>::default())
                    }),
                });
        }

        #[automatically_derived]
        impl ::docmap::FieldType for #name {
            const SHAPE: ::docmap::FieldShape =
                ::docmap::FieldShape::Struct(|| <#name as ::docmap::DocumentType>::SHAPE);

            fn absorb(
                coerced: ::docmap::Coerced,
            ) -> ::core::result::Result<Self, ::docmap::AbsorbError> {
                match coerced {
                    ::docmap::Coerced::Instance(instance) => instance
                        .downcast::<#name>()
                        .map(|boxed| *boxed)
                        .map_err(|_| ::docmap::AbsorbError::InstanceMismatch {
                            expected: #name_str,
                        }),
                    ::docmap::Coerced::Scalar(value) => {
                        ::core::result::Result::Err(::docmap::AbsorbError::Mismatch {
                            expected: "document",
                            got: value.kind(),
                        })
                    }
                    _ => ::core::result::Result::Err(::docmap::AbsorbError::UnexpectedCoercion {
                        expected: #name_str,
                    }),
                }
            }
        }

        #[automatically_derived]
        impl ::docmap::ElementType for #name {
            const SHAPE: ::docmap::ElementShape =
                ::docmap::ElementShape::Struct(|| <#name as ::docmap::DocumentType>::SHAPE);

            fn absorb_element(
                element: ::docmap::CoercedElement,
            ) -> ::core::result::Result<Self, ::docmap::AbsorbError> {
                match element {
                    ::docmap::CoercedElement::Instance(instance) => instance
                        .downcast::<#name>()
                        .map(|boxed| *boxed)
                        .map_err(|_| ::docmap::AbsorbError::InstanceMismatch {
                            expected: #name_str,
                        }),
                    ::docmap::CoercedElement::Scalar(value) => {
                        ::core::result::Result::Err(::docmap::AbsorbError::Mismatch {
                            expected: "document",
                            got: value.kind(),
                        })
                    }
                }
            }
        }
    })
}
