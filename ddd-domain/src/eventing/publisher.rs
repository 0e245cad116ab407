//! 事件发布（EventPublisher）协议
//!
//! 分发器唯一依赖的外部协作者：逐条发布事件，返回成功或失败。
//! 实现可以是进程内中介者、消息总线等，分发器不关心具体的处理器数量与顺序。
//!
use crate::domain_event::DomainEvent;
use crate::error::DomainResult as Result;
use async_trait::async_trait;
use std::sync::Arc;

/// 事件发布者：一条事件的全部处理完成（或失败）后才返回
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: Arc<dyn DomainEvent>) -> Result<()>;
}

#[async_trait]
impl<T> EventPublisher for Arc<T>
where
    T: EventPublisher + ?Sized,
{
    async fn publish(&self, event: Arc<dyn DomainEvent>) -> Result<()> {
        (**self).publish(event).await
    }
}
