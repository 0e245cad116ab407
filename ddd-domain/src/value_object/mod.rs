//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的不可变对象。相等、哈希与排序全部由
//! [`ValueObject::equality_components`] 返回的有序分量序列推导，
//! 由 [`StructuralComparer`] 统一实现，具体类型只需给出分量。
//!
//! `#[value_object]` 宏会在此基础上为具体类型生成 `PartialEq`/`Eq`/`Hash`/`Ord`。
//!
//! # 示例
//!
//! ```
//! use ddd_domain::value_object::{Component, StructuralComparer, ToComponent, ValueObject};
//!
//! #[derive(Debug)]
//! struct Money {
//!     amount: i64,
//!     currency: String,
//! }
//!
//! impl ValueObject for Money {
//!     fn equality_components(&self) -> Vec<Component<'_>> {
//!         vec![self.amount.to_component(), self.currency.to_component()]
//!     }
//! }
//!
//! let cmp = StructuralComparer::default();
//! let a = Money { amount: 5, currency: "EUR".into() };
//! let b = Money { amount: 5, currency: "EUR".into() };
//! assert!(cmp.equals(&a, &b));
//! assert_eq!(cmp.hash(&a), cmp.hash(&b));
//! ```
//!
mod comparer;
mod component;
mod type_resolver;

use std::fmt;

pub use comparer::{AsValueObject, StructuralComparer, install_type_resolver};
pub use component::{Component, ToComponent};
pub use type_resolver::{IdentityTypeResolver, ProxyNamingConvention, TypeResolver};

/// 值对象抽象
///
/// 分量序列在一次比较过程中必须稳定且保持顺序，
/// 不允许有隐藏的可变状态影响返回结果，否则相等与哈希的约定失效。
pub trait ValueObject: fmt::Debug + Send + Sync {
    /// 参与相等、哈希与排序的有序分量
    fn equality_components(&self) -> Vec<Component<'_>>;

    /// 运行时类型名；经 `TypeResolver` 解析后作为逻辑类型参与比较
    fn value_type(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
