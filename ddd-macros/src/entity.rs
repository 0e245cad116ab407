use crate::utils::{MacroArgs, apply_derives, ensure_required_fields, has_field_named};
use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Item, ItemStruct, Type, parse_macro_input};

/// #[entity] 宏实现
/// - 若缺失则追加字段：`id: IdType`，并置于字段最前
/// - 自动实现 `::ddd_domain::entity::Entity`（new/id）与 `EventSource`
/// - 支持参数：`#[entity(id = IdType, events = EventType, debug = true|false)]`；
///   - `id` 默认 `String`
///   - `events` 指定时追加 `events: EventQueue<EventType>` 字段（不参与序列化），
///     并生成 `pending_events`/`clear_events` 与私有的 `register_event`；
///     未指定时 `EventSource::event_holder` 返回 `None`
///   - `debug` 默认 `true`（派生 Debug）。当为 `false` 时不派生 Debug，便于用户自定义实现。
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as MacroArgs);
    let input = parse_macro_input!(item as Item);

    match expand_struct(args, input) {
        Ok(ts) => ts.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_struct(args: MacroArgs, input: Item) -> syn::Result<proc_macro2::TokenStream> {
    args.expect_keys(&["id", "events", "debug"])?;
    let id_type = args.ty("id")?.unwrap_or_else(|| syn::parse_quote! { String });
    let event_type = args.ty("events")?;
    let derive_debug = args.bool("debug")?.unwrap_or(true);

    let mut st = match input {
        Item::Struct(s) => s,
        other => return Err(syn::Error::new(other.span(), "#[entity] only on struct")),
    };

    // 仅支持具名字段结构体
    let st_span = st.span();
    let fields_named = match &mut st.fields {
        syn::Fields::Named(f) => f,
        _ => {
            return Err(syn::Error::new(
                st_span,
                "only supports named-field struct",
            ));
        }
    };

    // 重新组织字段：确保 id 在最前，并避免重复
    ensure_required_fields(fields_named, &[("id", &id_type)], true);

    if let Some(event_type) = &event_type {
        if has_field_named(fields_named, "events") {
            return Err(syn::Error::new(
                fields_named.span(),
                "field 'events' is reserved for the event queue when `events = ..` is set",
            ));
        }
        let queue_ty: Type =
            syn::parse_quote! { ::ddd_domain::domain_event::EventQueue<#event_type> };
        fields_named.named.push(syn::parse_quote! {
            #[serde(skip)]
            events: #queue_ty
        });
    }

    // 合并/规范 derive：默认添加 Debug（可通过 debug=false 关闭）、Default、Serialize、Deserialize
    let mut required: Vec<syn::Path> = vec![
        syn::parse_quote!(Default),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
    ];
    if derive_debug {
        required.insert(0, syn::parse_quote!(Debug));
    }
    apply_derives(&mut st.attrs, required);

    let out_struct = ItemStruct { ..st };

    let ident = &out_struct.ident;
    let generics = out_struct.generics.clone();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let event_support = match &event_type {
        Some(event_type) => quote! {
            impl #impl_generics ::ddd_domain::domain_event::EventSource for #ident #ty_generics #where_clause {
                fn event_holder(&mut self) -> ::std::option::Option<&mut dyn ::ddd_domain::domain_event::EventHolder> {
                    ::std::option::Option::Some(&mut self.events as &mut dyn ::ddd_domain::domain_event::EventHolder)
                }
            }

            impl #impl_generics #ident #ty_generics #where_clause {
                /// 待分发的领域事件（只读视图）
                pub fn pending_events(&self) -> &[#event_type] {
                    self.events.pending()
                }

                /// 直接清空待分发事件（不发布）
                pub fn clear_events(&mut self) {
                    self.events.clear()
                }

                #[allow(dead_code)]
                fn register_event(&mut self, event: #event_type) {
                    self.events.register(event)
                }
            }
        },
        None => quote! {
            impl #impl_generics ::ddd_domain::domain_event::EventSource for #ident #ty_generics #where_clause {
                fn event_holder(&mut self) -> ::std::option::Option<&mut dyn ::ddd_domain::domain_event::EventHolder> {
                    ::std::option::Option::None
                }
            }
        },
    };

    Ok(quote! {
        #out_struct

        impl #impl_generics ::ddd_domain::entity::Entity for #ident #ty_generics #where_clause {
            type Id = #id_type;

            fn new(id: Self::Id) -> Self {
                Self { id, ..::std::default::Default::default() }
            }

            fn id(&self) -> &Self::Id { &self.id }
        }

        #event_support
    })
}
