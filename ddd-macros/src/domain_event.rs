use crate::utils::{MacroArgs, apply_derives, ensure_required_fields};
use proc_macro::TokenStream;
use quote::quote;
use std::collections::HashMap;
use syn::spanned::Spanned;
use syn::{Item, LitStr, Type, parse_macro_input};

/// #[domain_event] 宏实现
/// - 支持具名字段结构体，以及具名字段/单元变体的枚举（单元变体会被改写为具名变体）
/// - 确保结构体或每个变体具备字段：`occurred_at: OccurredAt`（缺失时追加到末尾）
/// - 生成 `::ddd_domain::domain_event::DomainEvent` 实现（event_type/occurred_at）
/// - 结构体可用 `#[domain_event(event_type = "...")]` 覆写事件类型（默认结构体名）
/// - 变体可用 `#[event(event_type = "...")]` 覆写事件类型（默认 `Enum.Variant`）
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as MacroArgs);
    let input = parse_macro_input!(item as Item);

    match expand_item(args, input) {
        Ok(ts) => ts.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn occurred_at_ty() -> Type {
    syn::parse_quote! { ::ddd_domain::domain_event::OccurredAt }
}

fn required_derives() -> Vec<syn::Path> {
    vec![
        syn::parse_quote!(Debug),
        syn::parse_quote!(Clone),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
    ]
}

fn expand_item(args: MacroArgs, input: Item) -> syn::Result<proc_macro2::TokenStream> {
    match input {
        Item::Struct(st) => expand_struct(args, st),
        Item::Enum(en) => {
            args.expect_keys(&[])?;
            expand_enum(en)
        }
        other => Err(syn::Error::new(
            other.span(),
            "#[domain_event] can only be used on struct or enum types",
        )),
    }
}

fn expand_struct(args: MacroArgs, mut st: syn::ItemStruct) -> syn::Result<proc_macro2::TokenStream> {
    args.expect_keys(&["event_type"])?;
    let type_lit = args
        .str("event_type")?
        .unwrap_or_else(|| LitStr::new(&st.ident.to_string(), st.ident.span()));

    let st_span = st.span();
    match &mut st.fields {
        syn::Fields::Named(fields_named) => {
            ensure_required_fields(fields_named, &[("occurred_at", &occurred_at_ty())], false);
        }
        _ => {
            return Err(syn::Error::new(
                st_span,
                "#[domain_event] supports only named-field structs, e.g., struct X { a: T }",
            ));
        }
    }
    apply_derives(&mut st.attrs, required_derives());

    let ident = &st.ident;
    let (impl_generics, ty_generics, where_clause) = st.generics.split_for_impl();

    Ok(quote! {
        #st

        impl #impl_generics ::ddd_domain::domain_event::DomainEvent for #ident #ty_generics #where_clause {
            fn event_type(&self) -> &str { #type_lit }
            fn occurred_at(&self) -> ::ddd_domain::domain_event::OccurredAt { self.occurred_at }
        }
    })
}

fn expand_enum(mut en: syn::ItemEnum) -> syn::Result<proc_macro2::TokenStream> {
    apply_derives(&mut en.attrs, required_derives());

    let mut variant_types: HashMap<String, LitStr> = HashMap::new();

    for v in &mut en.variants {
        if matches!(v.fields, syn::Fields::Unit) {
            v.fields = syn::Fields::Named(syn::parse_quote!({}));
        }

        match &mut v.fields {
            syn::Fields::Named(fields_named) => {
                ensure_required_fields(fields_named, &[("occurred_at", &occurred_at_ty())], false);
            }
            _ => {
                return Err(syn::Error::new(
                    v.span(),
                    "#[domain_event] supports only named-field or unit enum variants, e.g., Variant { x: T }",
                ));
            }
        }

        let mut retained_attrs = Vec::new();
        for attr in v.attrs.iter() {
            if attr.path().is_ident("event") {
                let vargs: MacroArgs = attr.parse_args()?;
                vargs.expect_keys(&["event_type"])?;
                if let Some(lit) = vargs.str("event_type")? {
                    if variant_types.insert(v.ident.to_string(), lit).is_some() {
                        return Err(syn::Error::new(
                            attr.span(),
                            "duplicate 'event_type' specified for this variant",
                        ));
                    }
                }
            } else {
                retained_attrs.push(attr.clone());
            }
        }
        v.attrs = retained_attrs;
    }

    let enum_ident = &en.ident;
    let enum_name = enum_ident.to_string();

    let type_match_arms = en.variants.iter().map(|v| {
        let v_ident = &v.ident;
        let lit = variant_types.get(&v_ident.to_string()).cloned().unwrap_or_else(|| {
            LitStr::new(&format!("{}.{}", enum_name, v_ident), v_ident.span())
        });
        quote! { Self::#v_ident { .. } => #lit }
    });

    let occurred_match_arms = en.variants.iter().map(|v| {
        let v_ident = &v.ident;
        quote! { Self::#v_ident { occurred_at, .. } => *occurred_at }
    });

    let (impl_generics, ty_generics, where_clause) = en.generics.split_for_impl();

    Ok(quote! {
        #en

        impl #impl_generics ::ddd_domain::domain_event::DomainEvent for #enum_ident #ty_generics #where_clause {
            fn event_type(&self) -> &str { match self { #( #type_match_arms, )* } }
            fn occurred_at(&self) -> ::ddd_domain::domain_event::OccurredAt {
                match self { #( #occurred_match_arms, )* }
            }
        }
    })
}
