use std::sync::Arc;

use super::domain_event_trait::DomainEvent;

/// 持有待分发事件的窄能力接口
///
/// 分发器只依赖该接口，不关心所属实体的标识类型与事件类型。
pub trait EventHolder: Send {
    fn has_pending_events(&self) -> bool;

    fn pending_count(&self) -> usize;

    /// 取出全部待分发事件（保持登记顺序）并清空
    fn drain(&mut self) -> Vec<Arc<dyn DomainEvent>>;
}

/// 可交给分发器的对象
///
/// 返回 `None` 表示该对象不暴露事件队列，分发器会记录告警并跳过。
pub trait EventSource: Send {
    /// 用于诊断日志的来源名称
    fn source_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn event_holder(&mut self) -> Option<&mut dyn EventHolder>;
}
