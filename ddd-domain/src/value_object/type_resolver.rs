use bon::Builder;
use std::borrow::Cow;

/// 解析可能被包装的实例的逻辑类型
///
/// 持久化/代理机制可能以包装类型替代原始类型；比较时应使用解析后的逻辑类型，
/// 使包装与未包装的同一领域类型仍然相等。
pub trait TypeResolver: Send + Sync {
    fn resolve<'a>(&self, type_name: &'a str) -> Cow<'a, str>;
}

/// 默认解析：原样返回
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTypeResolver;

impl TypeResolver for IdentityTypeResolver {
    fn resolve<'a>(&self, type_name: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(type_name)
    }
}

/// 按命名约定识别代理类型
///
/// - `prefixes`：路径中的代理标记（如 `proxies::`），只在路径段起始处匹配，首个命中的标记会被移除；
/// - `suffixes`：类型名末段的代理后缀（如 `Proxy`），末段剩余部分非空时移除。
///
/// 泛型实参（`<` 之后的部分）不参与解析，原样保留。
///
/// # 示例
///
/// ```
/// use ddd_domain::value_object::{ProxyNamingConvention, TypeResolver};
///
/// let convention = ProxyNamingConvention::default();
/// assert_eq!(convention.resolve("shop::MoneyProxy"), "shop::Money");
/// assert_eq!(convention.resolve("shop::proxies::Money"), "shop::Money");
/// assert_eq!(convention.resolve("shop::Money"), "shop::Money");
/// ```
#[derive(Builder, Debug, Clone)]
pub struct ProxyNamingConvention {
    #[builder(default)]
    prefixes: Vec<String>,
    #[builder(default)]
    suffixes: Vec<String>,
}

impl Default for ProxyNamingConvention {
    fn default() -> Self {
        Self {
            prefixes: vec!["proxies::".to_string()],
            suffixes: vec!["Proxy".to_string()],
        }
    }
}

impl ProxyNamingConvention {
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}

impl TypeResolver for ProxyNamingConvention {
    fn resolve<'a>(&self, type_name: &'a str) -> Cow<'a, str> {
        // 泛型实参原样保留，只解析外层类型路径
        let (path, args) = type_name.split_at(type_name.find('<').unwrap_or(type_name.len()));
        let mut path = Cow::Borrowed(path);

        let marker = self
            .prefixes
            .iter()
            .filter(|p| !p.is_empty())
            .find_map(|p| segment_match(&path, p).map(|idx| (idx, p.len())));
        if let Some((idx, len)) = marker {
            let unwrapped = format!("{}{}", &path[..idx], &path[idx + len..]);
            path = Cow::Owned(unwrapped);
        }

        let segment_start = path.rfind("::").map_or(0, |idx| idx + 2);
        let keep = self
            .suffixes
            .iter()
            .filter(|s| !s.is_empty())
            .find(|s| {
                let segment = &path[segment_start..];
                segment.len() > s.len() && segment.ends_with(s.as_str())
            })
            .map(|s| path.len() - s.len());
        if let Some(keep) = keep {
            let unwrapped = path[..keep].to_string();
            path = Cow::Owned(unwrapped);
        }

        match path {
            Cow::Borrowed(_) => Cow::Borrowed(type_name),
            Cow::Owned(path) => Cow::Owned(path + args),
        }
    }
}

// 标记只在路径段的起始处匹配（开头或紧跟 `::`）
fn segment_match(path: &str, marker: &str) -> Option<usize> {
    path.match_indices(marker)
        .map(|(idx, _)| idx)
        .find(|&idx| idx == 0 || path[..idx].ends_with("::"))
}
