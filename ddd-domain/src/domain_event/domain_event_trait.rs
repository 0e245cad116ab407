use chrono::{DateTime, Utc};
use std::any::Any;
use std::fmt;

/// 事件发生时间（构造时确定，之后不再变化）
pub type OccurredAt = DateTime<Utc>;

/// 将具体类型以 `&dyn Any` 暴露，用于从 `dyn DomainEvent` 还原具体事件类型
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// 领域事件载荷需要满足的通用能力边界
///
/// 该 trait 保持对象安全，分发器以 `Arc<dyn DomainEvent>` 统一承载
/// 来自不同聚合、不同事件类型的事件。
pub trait DomainEvent: AsAny + fmt::Debug + Send + Sync + 'static {
    /// 事件类型（形如 `OrderEvent.Placed` 或自定义类型名）
    fn event_type(&self) -> &str;

    /// 事件发生时间
    fn occurred_at(&self) -> OccurredAt;
}

impl dyn DomainEvent {
    /// 还原为具体事件类型
    pub fn downcast_ref<T: DomainEvent>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// 判断是否为指定的具体事件类型
    pub fn is<T: DomainEvent>(&self) -> bool {
        self.as_any().is::<T>()
    }
}
