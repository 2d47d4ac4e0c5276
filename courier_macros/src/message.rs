use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_quote, DeriveInput, GenericParam, LitStr};

pub fn derive_message(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as DeriveInput);
    let name = input.ident.clone();

    let kind_name = match extract_kind_name(&input) {
        Ok(kind_name) => kind_name,
        Err(err) => return TokenStream::from(err.to_compile_error()),
    };

    // Kinds are keyed by TypeId, so every type parameter must be 'static
    for param in input.generics.params.iter_mut() {
        if let GenericParam::Type(type_param) = param {
            type_param.bounds.push(parse_quote!('static));
        }
    }
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics courier::Message for #name #ty_generics #where_clause {
            fn kind_name() -> &'static str {
                #kind_name
            }
        }
    };

    TokenStream::from(expanded)
}

fn extract_kind_name(input: &DeriveInput) -> syn::Result<String> {
    for attr in &input.attrs {
        if !attr.path().is_ident("message") {
            continue;
        }

        let mut name = None;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                name = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unsupported message attribute, expected `name = \"...\"`"))
            }
        })?;

        if let Some(name) = name {
            if name.is_empty() {
                return Err(syn::Error::new_spanned(attr, "message name cannot be empty"));
            }
            return Ok(name);
        }
    }

    // Default: the bare type identifier
    Ok(input.ident.to_string())
}
