use quote::ToTokens;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Attribute, Expr, Field, FieldsNamed, Ident, Result, Token, Type};

// 提取非 derive 属性与已有 derive 列表
pub(crate) fn split_derives(attrs: &[Attribute]) -> (Vec<Attribute>, Vec<syn::Path>) {
    let mut retained = Vec::new();
    let mut existing = Vec::new();
    for attr in attrs.iter() {
        if attr.path().is_ident("derive") {
            if let Ok(list) =
                attr.parse_args_with(Punctuated::<syn::Path, Token![,]>::parse_terminated)
            {
                existing.extend(list);
            }
        } else {
            retained.push(attr.clone());
        }
    }
    (retained, existing)
}

// 合并默认与已有 derive（去重，优先保留 required）
pub(crate) fn merge_derives(existing: Vec<syn::Path>, required: Vec<syn::Path>) -> Attribute {
    let mut seen = std::collections::HashSet::<String>::new();
    let mut final_list: Vec<syn::Path> = Vec::new();
    for p in required.into_iter().chain(existing) {
        if seen.insert(derive_key(&p)) {
            final_list.push(p);
        }
    }
    syn::parse_quote!(#[derive(#(#final_list),*)])
}

// 归一化 derive 的 key，避免 Serialize/serde::Serialize 重复
pub(crate) fn derive_key(p: &syn::Path) -> String {
    if let Some(last) = p.segments.last() {
        let last_ident = last.ident.to_string();
        match last_ident.as_str() {
            "Serialize" | "Deserialize" => format!("serde::{}", last_ident),
            _ => last_ident,
        }
    } else {
        p.to_token_stream().to_string()
    }
}

// 直接在 attrs 上应用默认派生合并
pub(crate) fn apply_derives(attrs: &mut Vec<Attribute>, required: Vec<syn::Path>) {
    let (retained, existing) = split_derives(attrs);
    let merged = merge_derives(existing, required);
    *attrs = std::iter::once(merged).chain(retained).collect();
}

// 若用户已手动派生了宏需要自行实现的 trait，返回对应的错误
pub(crate) fn reject_derives(attrs: &[Attribute], generated: &[&str], macro_name: &str) -> Result<()> {
    let (_, existing) = split_derives(attrs);
    match existing
        .iter()
        .find(|p| generated.contains(&derive_key(p).as_str()))
    {
        Some(p) => Err(syn::Error::new(
            p.span(),
            format!(
                "#[{macro_name}] implements {} itself; remove it from #[derive]",
                derive_key(p)
            ),
        )),
        None => Ok(()),
    }
}

pub(crate) fn has_field_named(fields_named: &FieldsNamed, name: &str) -> bool {
    fields_named
        .named
        .iter()
        .any(|f| f.ident.as_ref().map(|i| i == name).unwrap_or(false))
}

/// 确保具名字段结构体/变体包含所需字段
/// - required: (字段名, 字段类型) 列表，按给定顺序处理
/// - reposition_existing: 若为 true，则即使已存在也会把所需字段移至最前（entity 需要）；
///   若为 false，则仅在缺失时追加到末尾，保留既有顺序（event 需要）。
pub(crate) fn ensure_required_fields(
    fields_named: &mut FieldsNamed,
    required: &[(&str, &Type)],
    reposition_existing: bool,
) {
    let old_named = fields_named.named.clone();
    let mut new_named: Punctuated<Field, Token![,]> = Punctuated::new();

    if reposition_existing {
        for (name, ty) in required.iter() {
            match old_named
                .iter()
                .find(|f| f.ident.as_ref().map(|i| i == *name).unwrap_or(false))
            {
                Some(existing) => new_named.push(existing.clone()),
                None => new_named.push(new_field(name, ty)),
            }
        }

        for f in old_named.into_iter() {
            let is_required = f
                .ident
                .as_ref()
                .map(|i| required.iter().any(|(n, _)| i == n))
                .unwrap_or(false);
            if !is_required {
                new_named.push(f);
            }
        }
    } else {
        for f in old_named.iter() {
            new_named.push(f.clone());
        }
        for (name, ty) in required.iter() {
            if !has_field_named(fields_named, name) {
                new_named.push(new_field(name, ty));
            }
        }
    }

    fields_named.named = new_named;
}

fn new_field(name: &str, ty: &Type) -> Field {
    let ident = Ident::new(name, proc_macro2::Span::call_site());
    syn::parse_quote! { #ident: #ty }
}

/// 宏参数：`key = value, ...`
pub(crate) struct MacroArgs {
    pairs: Vec<(Ident, Expr)>,
}

impl Parse for MacroArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let assigns: Punctuated<syn::ExprAssign, Token![,]> =
            Punctuated::parse_terminated(input)?;

        let mut pairs: Vec<(Ident, Expr)> = Vec::new();
        for assign in assigns {
            let key = match *assign.left {
                Expr::Path(p) if p.path.segments.len() == 1 => p.path.segments[0].ident.clone(),
                other => return Err(syn::Error::new(other.span(), "invalid attribute key")),
            };
            if pairs.iter().any(|(k, _)| *k == key) {
                return Err(syn::Error::new(
                    key.span(),
                    format!("duplicate key '{key}' in attribute"),
                ));
            }
            pairs.push((key, *assign.right));
        }
        Ok(Self { pairs })
    }
}

impl MacroArgs {
    /// 仅允许出现 `allowed` 中的键
    pub(crate) fn expect_keys(&self, allowed: &[&str]) -> Result<()> {
        match self.pairs.iter().find(|(k, _)| !allowed.iter().any(|a| k == a)) {
            Some((k, _)) => Err(syn::Error::new(
                k.span(),
                format!("unknown key '{k}'; expected one of: {}", allowed.join(", ")),
            )),
            None => Ok(()),
        }
    }

    fn get(&self, key: &str) -> Option<&Expr> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub(crate) fn ty(&self, key: &str) -> Result<Option<Type>> {
        self.get(key)
            .map(|expr| syn::parse2::<Type>(expr.to_token_stream()))
            .transpose()
    }

    pub(crate) fn bool(&self, key: &str) -> Result<Option<bool>> {
        match self.get(key) {
            None => Ok(None),
            Some(Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Bool(b),
                ..
            })) => Ok(Some(b.value())),
            Some(other) => Err(syn::Error::new(
                other.span(),
                format!("expected boolean literal for '{key}'"),
            )),
        }
    }

    pub(crate) fn str(&self, key: &str) -> Result<Option<syn::LitStr>> {
        match self.get(key) {
            None => Ok(None),
            Some(Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(s),
                ..
            })) => Ok(Some(s.clone())),
            Some(other) => Err(syn::Error::new(
                other.span(),
                format!("expected string literal for '{key}'"),
            )),
        }
    }

    pub(crate) fn ident(&self, key: &str) -> Result<Option<Ident>> {
        match self.get(key) {
            None => Ok(None),
            Some(Expr::Path(p)) if p.path.segments.len() == 1 => {
                Ok(Some(p.path.segments[0].ident.clone()))
            }
            Some(other) => Err(syn::Error::new(
                other.span(),
                format!("expected identifier for '{key}'"),
            )),
        }
    }
}
