use crate::utils::{MacroArgs, apply_derives, reject_derives};
use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Item, ItemStruct, parse_macro_input};

/// #[value_object] 宏实现
/// - 仅支持结构体（具名或 tuple）
/// - 合并/追加派生：Clone, (Debug 可控), Serialize, Deserialize
/// - 由 `StructuralComparer` 生成 `PartialEq`/`Eq`/`Hash`/`PartialOrd`/`Ord`，
///   因此不允许再手动派生这些 trait
/// - 默认按字段声明顺序生成 `ValueObject::equality_components`，
///   字段可用 `#[component(skip)]` 排除
/// - 参数：`#[value_object(debug = true|false, components = manual)]`；
///   `components = manual` 时由用户自行实现 `ValueObject`
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as MacroArgs);
    let input = parse_macro_input!(item as Item);

    match expand_struct(args, input) {
        Ok(ts) => ts.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

const GENERATED: &[&str] = &["PartialEq", "Eq", "Hash", "PartialOrd", "Ord"];

fn expand_struct(args: MacroArgs, input: Item) -> syn::Result<proc_macro2::TokenStream> {
    args.expect_keys(&["debug", "components"])?;
    let derive_debug = args.bool("debug")?.unwrap_or(true);
    let manual = match args.ident("components")? {
        None => false,
        Some(ident) if ident == "auto" => false,
        Some(ident) if ident == "manual" => true,
        Some(ident) => {
            return Err(syn::Error::new(
                ident.span(),
                "expected `auto` or `manual` for 'components'",
            ));
        }
    };

    let mut st: ItemStruct = match input {
        Item::Struct(s) => s,
        other => {
            return Err(syn::Error::new(
                other.span(),
                "#[value_object] only supports struct",
            ));
        }
    };

    reject_derives(&st.attrs, GENERATED, "value_object")?;

    // 收集参与比较的字段访问表达式，同时剥离 #[component(..)]
    let mut accessors: Vec<proc_macro2::TokenStream> = Vec::new();
    for (idx, field) in st.fields.iter_mut().enumerate() {
        let mut skip = false;
        let mut retained = Vec::new();
        for attr in field.attrs.drain(..) {
            if attr.path().is_ident("component") {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("skip") {
                        skip = true;
                        Ok(())
                    } else {
                        Err(meta.error("unsupported component option; expected `skip`"))
                    }
                })?;
            } else {
                retained.push(attr);
            }
        }
        field.attrs = retained;

        if skip {
            continue;
        }
        match &field.ident {
            Some(name) => accessors.push(quote! { self.#name }),
            None => {
                let index = syn::Index::from(idx);
                accessors.push(quote! { self.#index });
            }
        }
    }

    let mut required: Vec<syn::Path> = vec![
        syn::parse_quote!(Clone),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
    ];
    if derive_debug {
        required.insert(0, syn::parse_quote!(Debug));
    }
    apply_derives(&mut st.attrs, required);

    let ident = &st.ident;
    let (impl_generics, ty_generics, where_clause) = st.generics.split_for_impl();

    let value_object_impl = if manual {
        quote! {}
    } else {
        quote! {
            impl #impl_generics ::ddd_domain::value_object::ValueObject for #ident #ty_generics #where_clause {
                fn equality_components(&self) -> ::std::vec::Vec<::ddd_domain::value_object::Component<'_>> {
                    ::std::vec![
                        #( ::ddd_domain::value_object::ToComponent::to_component(&#accessors), )*
                    ]
                }
            }
        }
    };

    Ok(quote! {
        #st

        #value_object_impl

        impl #impl_generics ::core::cmp::PartialEq for #ident #ty_generics #where_clause {
            fn eq(&self, other: &Self) -> bool {
                ::ddd_domain::value_object::StructuralComparer::shared().equals(self, other)
            }
        }

        impl #impl_generics ::core::cmp::Eq for #ident #ty_generics #where_clause {}

        impl #impl_generics ::core::hash::Hash for #ident #ty_generics #where_clause {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                state.write_u64(::ddd_domain::value_object::StructuralComparer::shared().hash(self));
            }
        }

        impl #impl_generics ::core::cmp::PartialOrd for #ident #ty_generics #where_clause {
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
            }
        }

        impl #impl_generics ::core::cmp::Ord for #ident #ty_generics #where_clause {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                ::ddd_domain::value_object::StructuralComparer::shared().compare(self, other)
            }
        }

        impl #impl_generics ::ddd_domain::value_object::ToComponent for #ident #ty_generics #where_clause {
            fn to_component(&self) -> ::ddd_domain::value_object::Component<'_> {
                ::ddd_domain::value_object::Component::Value(self)
            }
        }
    })
}
