/// 领域事件分发示例
/// 展示实体登记事件 -> 分发器收割并清空 -> 进程内发布者路由到处理器的完整流程
use anyhow::Result as AnyResult;
use chrono::Utc;
use ddd_domain::aggregate::AggregateRoot;
use ddd_domain::domain_event::{DomainEvent, EventSource};
use ddd_domain::entity::Entity;
use ddd_domain::eventing::{
    DomainEventDispatcher, EventHandler, HandledEventType, InMemoryEventPublisher,
};
use ddd_macros::{domain_event, entity, entity_id};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

// ============================================================================
// 领域模型
// ============================================================================

#[entity_id]
struct OrderId(Uuid);

#[domain_event]
enum OrderEvent {
    Placed { total: i64 },
    #[event(event_type = "order.cancelled")]
    Cancelled { reason: String },
}

#[entity(id = OrderId, events = OrderEvent)]
struct Order {
    total: i64,
    cancelled: bool,
}

impl AggregateRoot for Order {
    const TYPE: &'static str = "order";
}

impl Order {
    fn place(&mut self, total: i64) {
        self.total = total;
        self.register_event(OrderEvent::Placed {
            total,
            occurred_at: Utc::now(),
        });
    }

    fn cancel(&mut self, reason: &str) {
        self.cancelled = true;
        self.register_event(OrderEvent::Cancelled {
            reason: reason.to_string(),
            occurred_at: Utc::now(),
        });
    }
}

/// 只读的报表对象，没有事件队列
#[entity]
struct Report {
    title: String,
}

// ============================================================================
// 处理器
// ============================================================================

struct AuditLog;

#[async_trait::async_trait]
impl EventHandler for AuditLog {
    fn handler_name(&self) -> &str {
        "audit-log"
    }

    fn handled_event_type(&self) -> HandledEventType {
        HandledEventType::All
    }

    async fn handle(&self, event: &Arc<dyn DomainEvent>) -> AnyResult<()> {
        println!("[audit] {} at {}", event.event_type(), event.occurred_at());
        Ok(())
    }
}

struct Refunds;

#[async_trait::async_trait]
impl EventHandler for Refunds {
    fn handler_name(&self) -> &str {
        "refunds"
    }

    fn handled_event_type(&self) -> HandledEventType {
        HandledEventType::One("order.cancelled".to_string())
    }

    async fn handle(&self, event: &Arc<dyn DomainEvent>) -> AnyResult<()> {
        if let Some(OrderEvent::Cancelled { reason, .. }) = event.downcast_ref::<OrderEvent>() {
            println!("[refunds] issuing refund: {reason}");
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> AnyResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("ddd_domain=debug".parse()?))
        .init();

    let handlers: Vec<Arc<dyn EventHandler>> = vec![
        Arc::new(AuditLog) as Arc<dyn EventHandler>,
        Arc::new(Refunds) as Arc<dyn EventHandler>,
    ];
    let publisher = InMemoryEventPublisher::new(handlers);
    let dispatcher = DomainEventDispatcher::new(Arc::new(publisher));

    let mut first = Order::new(OrderId::new(Uuid::new_v4()));
    first.place(250);
    let mut second = Order::new(OrderId::new(Uuid::new_v4()));
    second.place(80);
    second.cancel("customer changed their mind");
    let mut report = Report::new("daily".to_string());
    report.title = "Daily sales".into();

    println!(
        "pending before dispatch: {} {}={}, {} {}={}",
        Order::TYPE,
        first.id(),
        first.pending_events().len(),
        Order::TYPE,
        second.id(),
        second.pending_events().len()
    );

    // Report 没有事件队列，分发器记录告警后跳过
    let mut sources: [&mut dyn EventSource; 3] = [&mut first, &mut report, &mut second];
    dispatcher.dispatch_and_clear(&mut sources).await?;

    println!(
        "pending after dispatch: {}, {}",
        first.pending_events().len(),
        second.pending_events().len()
    );
    Ok(())
}
