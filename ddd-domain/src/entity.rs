//! 实体（Entity）基础抽象
//!
//! 为实体与聚合提供统一的标识（Id）能力。标识类型不做统一约束，
//! 可以是 `String`、`u64`、`Uuid` 或 `#[entity_id]` 生成的新类型。
//!
use std::{fmt::Display, str::FromStr};

/// 具备唯一标识的实体抽象
pub trait Entity: Send + Sync {
    /// 实体标识类型，要求可解析、可显示与可克隆
    type Id: FromStr + Clone + Display + PartialEq + Send + Sync;

    /// 使用给定标识创建实体
    fn new(id: Self::Id) -> Self;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;

    /// 标识相等即视为同一实体，其余状态不参与比较
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
