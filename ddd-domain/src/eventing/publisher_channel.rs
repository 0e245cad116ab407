//! 通道事件发布者（ChannelEventPublisher）
//!
//! 基于 `tokio::sync::mpsc` 的 `EventPublisher` 实现，把事件转交给
//! 另一个任务消费（例如写入 Outbox 或转发到消息中间件）。
//!
//! 接收端被丢弃后，发布返回 `DomainError::EventPublish`。
use super::EventPublisher;
use crate::domain_event::DomainEvent;
use crate::error::{DomainError, DomainResult as Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct ChannelEventPublisher {
    tx: mpsc::UnboundedSender<Arc<dyn DomainEvent>>,
}

impl ChannelEventPublisher {
    /// 创建发布者与对应的接收端
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Arc<dyn DomainEvent>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl EventPublisher for ChannelEventPublisher {
    async fn publish(&self, event: Arc<dyn DomainEvent>) -> Result<()> {
        let event_type = event.event_type().to_string();
        self.tx
            .send(event)
            .map_err(|e| DomainError::event_publish(event_type, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_event::OccurredAt;

    #[derive(Debug)]
    struct Tick(u8);

    impl DomainEvent for Tick {
        fn event_type(&self) -> &str {
            "Tick"
        }

        fn occurred_at(&self) -> OccurredAt {
            OccurredAt::default()
        }
    }

    #[tokio::test]
    async fn forwards_in_order() {
        let (publisher, mut rx) = ChannelEventPublisher::new();
        publisher.publish(Arc::new(Tick(1))).await.unwrap();
        publisher.publish(Arc::new(Tick(2))).await.unwrap();

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        assert_eq!(first.downcast_ref::<Tick>().map(|t| t.0), Some(1));
        assert_eq!(second.downcast_ref::<Tick>().map(|t| t.0), Some(2));
    }

    #[tokio::test]
    async fn closed_receiver_fails_publish() {
        let (publisher, rx) = ChannelEventPublisher::new();
        drop(rx);

        let err = publisher.publish(Arc::new(Tick(1))).await.unwrap_err();
        assert!(matches!(err, DomainError::EventPublish { ref event_type, .. } if event_type == "Tick"));
    }
}
