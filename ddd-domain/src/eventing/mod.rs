//! 事件子系统（eventing）
//!
//! 提供领域事件的收割与发布：
//! - `EventPublisher`：逐条发布事件的外部协作者协议；
//! - `EventHandler`：对事件进行消费处理；
//! - `InMemoryEventPublisher`：进程内中介者，按类型路由到处理器并顺序执行；
//! - `ChannelEventPublisher`：把事件转交给通道另一端的任务；
//! - `DomainEventDispatcher`：从一批实体收割事件、清空队列并顺序发布，支持取消。
//!
//! 分发是本地、按调用同步推进的，不提供持久化、重试或 Outbox 保证。
//!
pub mod dispatcher;
pub mod handler;
pub mod publisher;
pub mod publisher_channel;
pub mod publisher_inmemory;

pub use dispatcher::DomainEventDispatcher;
pub use handler::{EventHandler, HandledEventType};
pub use publisher::EventPublisher;
pub use publisher_channel::ChannelEventPublisher;
pub use publisher_inmemory::InMemoryEventPublisher;
