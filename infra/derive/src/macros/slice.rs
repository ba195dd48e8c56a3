use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Fields, ItemStruct};

pub fn expand_slice(input: ItemStruct) -> TokenStream {
    if matches!(input.fields, Fields::Unnamed(_)) {
        return syn::Error::new_spanned(&input, "alm_slice requires named fields or a unit struct")
            .to_compile_error();
    }

    let handle = &input.ident;
    let vis = &input.vis;
    let attrs = &input.attrs;
    let inner = format_ident!("{handle}Inner");

    // Unit structs keep their trailing semicolon, named ones don't take one.
    let body = match &input.fields {
        Fields::Named(fields) => quote! { #fields },
        _ => quote! { ; },
    };

    quote! {
        #(#attrs)*
        #[derive(Debug, Clone)]
        #vis struct #inner #body

        #[derive(Debug, Clone)]
        #vis struct #handle {
            inner: std::sync::Arc<#inner>,
        }

        impl #handle {
            #[must_use]
            pub fn new(inner: #inner) -> Self {
                Self { inner: std::sync::Arc::new(inner) }
            }
        }

        impl std::ops::Deref for #handle {
            type Target = #inner;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        impl ::alm_domain::slice::FeatureSlice for #handle {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }
    }
}
