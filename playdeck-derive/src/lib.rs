extern crate proc_macro;

use case::CaseExt;
use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote, quote_spanned};
use syn::{
    parse_macro_input, Data, DataStruct, DeriveInput, Fields, FieldsNamed, Ident, Path,
};

const CORE_CRATE_NAME: &str = "playdeck-core";
const CTX_FIELD_NAME: &str = "ctx";

/// Implements `playdeck_core::runtime::Model` for a struct composed of a `ctx`
/// field and any number of models updated with that context.
///
/// The environment is given with `#[model(Env)]`. A `<Name>Field` enum with one
/// variant per struct field is generated alongside the implementation.
#[proc_macro_derive(Model, attributes(model))]
pub fn model_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_model(input) {
        Ok(expanded) => expanded.into(),
        Err(error) => error.to_compile_error().into(),
    }
}

fn expand_model(input: DeriveInput) -> syn::Result<TokenStream2> {
    let core = core_path()?;
    let env = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("model"))
        .ok_or_else(|| {
            syn::Error::new(
                input.ident.span(),
                "#[derive(Model)] requires a #[model(Env)] attribute",
            )
        })?
        .parse_args::<Path>()?;
    let named = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(FieldsNamed { named, .. }),
            ..
        }) => named,
        _ => {
            return Err(syn::Error::new(
                input.ident.span(),
                "#[derive(Model)] is only defined for structs with named fields",
            ))
        }
    };
    let fields = named
        .iter()
        .filter_map(|field| field.ident.to_owned())
        .map(|ident| {
            let variant = Ident::new(&ident.to_string().to_camel(), ident.span());
            (ident, variant)
        })
        .collect::<Vec<_>>();
    let ctx_variant = fields
        .iter()
        .find(|(ident, _)| ident == CTX_FIELD_NAME)
        .map(|(_, variant)| variant.to_owned())
        .ok_or_else(|| {
            syn::Error::new(
                input.ident.span(),
                "#[derive(Model)] requires a field named `ctx`",
            )
        })?;

    let name = &input.ident;
    let vis = &input.vis;
    let field_enum = format_ident!("{}Field", name);
    let variants = fields.iter().map(|(_, variant)| variant);
    let model_updates = fields
        .iter()
        .filter(|(ident, _)| ident != CTX_FIELD_NAME)
        .map(|(ident, variant)| {
            quote_spanned! {ident.span() =>
                (
                    #core::runtime::UpdateWithCtx::<#env>::update(&mut self.#ident, msg, &self.ctx),
                    #field_enum::#variant,
                )
            }
        });
    let field_updates = fields.iter().map(|(ident, variant)| {
        if ident == CTX_FIELD_NAME {
            quote! {
                #field_enum::#variant => #core::runtime::Update::<#env>::update(&mut self.ctx, msg)
            }
        } else {
            quote_spanned! {ident.span() =>
                #field_enum::#variant => #core::runtime::UpdateWithCtx::<#env>::update(&mut self.#ident, msg, &self.ctx)
            }
        }
    });

    Ok(quote! {
        #[derive(Clone, PartialEq, Eq, Debug, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "snake_case")]
        #vis enum #field_enum {
            #(#variants),*
        }

        impl #core::runtime::Model<#env> for #name {
            type Field = #field_enum;

            fn update(
                &mut self,
                msg: &#core::runtime::msg::Msg,
            ) -> (
                ::std::vec::Vec<#core::runtime::Effect>,
                ::std::vec::Vec<Self::Field>,
            ) {
                let updates = ::std::vec![
                    (
                        #core::runtime::Update::<#env>::update(&mut self.ctx, msg),
                        #field_enum::#ctx_variant,
                    ),
                    #(#model_updates),*
                ];
                updates.into_iter().fold(
                    (::std::vec![], ::std::vec![]),
                    |(mut effects, mut fields), (field_effects, field)| {
                        if field_effects.has_changed {
                            fields.push(field);
                        }
                        effects.extend(field_effects);
                        (effects, fields)
                    },
                )
            }

            fn update_field(
                &mut self,
                msg: &#core::runtime::msg::Msg,
                field: &Self::Field,
            ) -> (
                ::std::vec::Vec<#core::runtime::Effect>,
                ::std::vec::Vec<Self::Field>,
            ) {
                let effects = match field {
                    #(#field_updates),*
                };
                let fields = if effects.has_changed {
                    ::std::vec![field.to_owned()]
                } else {
                    ::std::vec![]
                };
                (effects.into_iter().collect(), fields)
            }
        }
    })
}

fn core_path() -> syn::Result<TokenStream2> {
    match crate_name(CORE_CRATE_NAME) {
        Ok(FoundCrate::Itself) => Ok(quote!(crate)),
        Ok(FoundCrate::Name(name)) => {
            let ident = Ident::new(&name, Span::call_site());
            Ok(quote!(::#ident))
        }
        Err(error) => Err(syn::Error::new(Span::call_site(), error.to_string())),
    }
}
