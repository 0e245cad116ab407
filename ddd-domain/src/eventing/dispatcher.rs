//! 领域事件分发器（DomainEventDispatcher）
//!
//! 逐个收割一批实体上的待分发事件并交给 `EventPublisher` 发布：
//! 1. 读取实体的全部待分发事件，并在发布前立即清空其队列；
//! 2. 按登记顺序逐条发布，上一条完成后才发布下一条；
//! 3. 不暴露事件队列的对象记录告警后跳过，不影响同批次其余实体。
//!
//! 失败语义：任一事件发布失败即向调用方返回错误；此前已清空的队列不会回滚，
//! 因此保证的是“每次收割至多发布一次”，而非整体上的“恰好一次”。
//! 调用方需要在自身事务边界内处理部分分发的情况。
//!
use super::EventPublisher;
use crate::domain_event::EventSource;
use crate::error::{DomainError, DomainResult as Result};
use bon::Builder;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

#[derive(Builder, Clone)]
pub struct DomainEventDispatcher {
    publisher: Arc<dyn EventPublisher>,
}

impl DomainEventDispatcher {
    pub fn new(publisher: Arc<dyn EventPublisher>) -> Self {
        Self { publisher }
    }

    /// 收割并发布 `sources` 上的全部待分发事件
    pub async fn dispatch_and_clear(&self, sources: &mut [&mut dyn EventSource]) -> Result<()> {
        self.dispatch_and_clear_until(sources, &CancellationToken::new())
            .await
    }

    /// 同 [`dispatch_and_clear`](Self::dispatch_and_clear)，但在收割每个实体之前与相邻两次发布之间
    /// 检查取消信号。
    ///
    /// 一旦收割，当前实体至少会尝试发布第一条事件；取消后不再发布后续事件，
    /// 尚未收割的实体保持原样，已收割的实体不会重新入队。
    /// 返回的 `DispatchCancelled::undelivered` 为已从当前实体取出但未发布的事件数。
    pub async fn dispatch_and_clear_until(
        &self,
        sources: &mut [&mut dyn EventSource],
        cancel: &CancellationToken,
    ) -> Result<()> {
        for source in sources.iter_mut() {
            let source_name = source.source_name();
            let Some(holder) = source.event_holder() else {
                warn!(source = source_name, "dispatch target exposes no event queue, skipped");
                continue;
            };

            if cancel.is_cancelled() {
                return Err(DomainError::DispatchCancelled { undelivered: 0 });
            }
            let events = holder.drain();
            let total = events.len();
            for (published, event) in events.into_iter().enumerate() {
                if published > 0 && cancel.is_cancelled() {
                    return Err(DomainError::DispatchCancelled {
                        undelivered: total - published,
                    });
                }
                debug!(
                    source = source_name,
                    event_type = event.event_type(),
                    "publishing domain event"
                );
                self.publisher.publish(event).await?;
            }
        }

        Ok(())
    }
}
