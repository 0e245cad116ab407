//! 进程内事件发布者（InMemoryEventPublisher）
//!
//! 中介者风格的 `EventPublisher` 实现：
//! - 按 `event_type` 匹配处理器，并追加订阅全部事件的处理器；
//! - 同一事件的处理器按注册顺序逐个执行，前一个完成后才执行下一个；
//! - 任一处理器失败即返回 `DomainError::EventHandler`，后续处理器不再执行。
//!
//! 没有匹配处理器的事件视为发布成功。
use super::handler::HandledEventType;
use super::{EventHandler, EventPublisher};
use crate::domain_event::DomainEvent;
use crate::error::{DomainError, DomainResult as Result};
use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc};
use tracing::debug;

#[derive(Clone, Default)]
pub struct InMemoryEventPublisher {
    registry: HandlerRegistry,
}

impl InMemoryEventPublisher {
    pub fn new(handlers: Vec<Arc<dyn EventHandler>>) -> Self {
        Self {
            registry: HandlerRegistry::new(handlers),
        }
    }

    /// 追加一个处理器
    pub fn with_handler(mut self, handler: Arc<dyn EventHandler>) -> Self {
        self.registry.insert(handler);
        self
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventPublisher {
    async fn publish(&self, event: Arc<dyn DomainEvent>) -> Result<()> {
        let handlers = self.registry.matching(event.event_type());
        if handlers.is_empty() {
            debug!(event_type = event.event_type(), "no handler registered for event");
            return Ok(());
        }

        for h in handlers {
            h.handle(&event)
                .await
                .map_err(|err| DomainError::EventHandler {
                    handler: h.handler_name().to_string(),
                    reason: err.to_string(),
                })?;
        }

        Ok(())
    }
}

#[derive(Clone, Default)]
struct HandlerRegistry {
    by_type: HashMap<String, Vec<Arc<dyn EventHandler>>>,
    all: Vec<Arc<dyn EventHandler>>,
}

impl HandlerRegistry {
    fn new(handlers: Vec<Arc<dyn EventHandler>>) -> Self {
        let mut registry = Self::default();
        for h in handlers {
            registry.insert(h);
        }
        registry
    }

    fn insert(&mut self, h: Arc<dyn EventHandler>) {
        match h.handled_event_type() {
            HandledEventType::All => self.all.push(h),
            HandledEventType::One(t) => {
                self.by_type.entry(t).or_default().push(h);
            }
            HandledEventType::Many(ts) => {
                for t in ts {
                    self.by_type.entry(t).or_default().push(h.clone());
                }
            }
        }
    }

    fn matching(&self, event_type: &str) -> Vec<Arc<dyn EventHandler>> {
        let mut merged: Vec<Arc<dyn EventHandler>> = Vec::new();
        if let Some(list) = self.by_type.get(event_type) {
            merged.extend(list.iter().cloned());
        }
        merged.extend(self.all.iter().cloned());
        merged
    }
}
