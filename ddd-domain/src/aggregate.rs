//! 聚合（Aggregate）抽象
//!
//! 聚合是一组相关对象的一致性边界：既是具备标识的实体，
//! 又持有待分发的领域事件（`EventSource`）。
//!
use crate::domain_event::EventSource;
use crate::entity::Entity;

/// 聚合根标记
pub trait AggregateRoot: Entity + EventSource {
    /// 聚合类型名（用于日志与审计）
    const TYPE: &'static str;
}
