//! 领域事件（Domain Event）与待分发事件队列
//!
//! 定义事件载荷需要实现的最小接口（`DomainEvent`），实体内嵌的事件队列
//! `EventQueue`，以及分发器面向的窄能力接口 `EventHolder` / `EventSource`。

mod domain_event_trait;
mod event_queue;
mod event_source;

pub use domain_event_trait::{AsAny, DomainEvent, OccurredAt};
pub use event_queue::EventQueue;
pub use event_source::{EventHolder, EventSource};
