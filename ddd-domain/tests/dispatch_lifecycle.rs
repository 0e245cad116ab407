use async_trait::async_trait;
use chrono::Utc;
use ddd_domain::aggregate::AggregateRoot;
use ddd_domain::domain_event::{DomainEvent, EventSource};
use ddd_domain::entity::Entity;
use ddd_domain::error::DomainResult;
use ddd_domain::eventing::{
    DomainEventDispatcher, EventHandler, EventPublisher, HandledEventType, InMemoryEventPublisher,
};
use ddd_macros::{domain_event, entity, entity_id};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[domain_event]
enum OrderEvent {
    Placed { total: i64 },
    #[event(event_type = "order.shipped")]
    Shipped,
}

#[entity(events = OrderEvent)]
struct Order {
    total: i64,
    shipped: bool,
}

impl Order {
    fn place(&mut self, total: i64) {
        self.total = total;
        self.register_event(OrderEvent::Placed {
            total,
            occurred_at: Utc::now(),
        });
    }

    fn ship(&mut self) {
        self.shipped = true;
        self.register_event(OrderEvent::Shipped {
            occurred_at: Utc::now(),
        });
    }
}

impl AggregateRoot for Order {
    const TYPE: &'static str = "order";
}

#[domain_event(event_type = "customer.renamed")]
struct CustomerRenamed {
    name: String,
}

#[entity(id = u64, events = CustomerRenamed)]
struct Customer {
    name: String,
}

impl Customer {
    fn rename(&mut self, name: &str) {
        self.name = name.to_string();
        self.register_event(CustomerRenamed {
            name: name.to_string(),
            occurred_at: Utc::now(),
        });
    }
}

#[entity_id]
struct ParcelId(Uuid);

#[domain_event]
struct ParcelLabelled {
    carrier: String,
}

#[entity(id = ParcelId, events = ParcelLabelled)]
struct Parcel {
    carrier: String,
}

impl Parcel {
    fn label(&mut self, carrier: &str) {
        self.carrier = carrier.to_string();
        self.register_event(ParcelLabelled {
            carrier: carrier.to_string(),
            occurred_at: Utc::now(),
        });
    }
}

#[derive(Default)]
struct Collected {
    events: Mutex<Vec<Arc<dyn DomainEvent>>>,
}

impl Collected {
    fn types(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.event_type().to_string())
            .collect()
    }
}

#[async_trait]
impl EventPublisher for Collected {
    async fn publish(&self, event: Arc<dyn DomainEvent>) -> DomainResult<()> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}

fn describe<A: AggregateRoot>(aggregate: &A) -> String {
    format!("{}#{}", A::TYPE, aggregate.id())
}

#[tokio::test]
async fn heterogeneous_batch_is_drained_in_order() {
    let collected = Arc::new(Collected::default());
    let dispatcher = DomainEventDispatcher::new(collected.clone());

    let mut quiet = Customer::new(1);
    let mut order = Order::new("o-1".to_string());
    order.place(120);
    order.ship();
    let mut parcel = Parcel::new(ParcelId::new(Uuid::new_v4()));
    parcel.label("dhl");

    let mut sources: [&mut dyn EventSource; 3] = [&mut quiet, &mut order, &mut parcel];
    dispatcher.dispatch_and_clear(&mut sources).await.unwrap();

    assert_eq!(
        collected.types(),
        vec!["OrderEvent.Placed", "order.shipped", "ParcelLabelled"]
    );
    assert!(order.pending_events().is_empty());
    assert!(parcel.pending_events().is_empty());
    assert!(order.shipped);
    assert_eq!(describe(&order), "order#o-1");
}

#[tokio::test]
async fn published_events_keep_their_concrete_type() {
    let collected = Arc::new(Collected::default());
    let dispatcher = DomainEventDispatcher::new(collected.clone());

    let mut customer = Customer::new(42);
    customer.rename("Ada");

    let mut sources: [&mut dyn EventSource; 1] = [&mut customer];
    dispatcher.dispatch_and_clear(&mut sources).await.unwrap();

    let events = collected.events.lock().unwrap();
    let renamed = events[0]
        .downcast_ref::<CustomerRenamed>()
        .expect("customer event");
    assert_eq!(renamed.name, "Ada");
    assert_eq!(customer.name, "Ada");
}

#[test]
fn clearing_discards_without_publishing() {
    let mut order = Order::new("o-2".to_string());
    order.place(10);
    order.ship();
    assert_eq!(order.pending_events().len(), 2);

    order.clear_events();
    assert!(order.pending_events().is_empty());

    // 空队列上再次清空仍为无操作
    order.clear_events();
    assert!(order.pending_events().is_empty());
}

struct ShippingNotifier {
    notified: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl EventHandler for ShippingNotifier {
    fn handler_name(&self) -> &str {
        "shipping-notifier"
    }

    fn handled_event_type(&self) -> HandledEventType {
        HandledEventType::One("order.shipped".to_string())
    }

    async fn handle(&self, event: &Arc<dyn DomainEvent>) -> anyhow::Result<()> {
        let Some(OrderEvent::Shipped { occurred_at }) = event.downcast_ref::<OrderEvent>() else {
            anyhow::bail!("unexpected event {}", event.event_type());
        };
        self.notified
            .lock()
            .unwrap()
            .push(occurred_at.to_rfc3339());
        Ok(())
    }
}

#[tokio::test]
async fn in_memory_publisher_routes_dispatched_events() {
    let notified = Arc::new(Mutex::new(Vec::new()));
    let publisher = InMemoryEventPublisher::default().with_handler(Arc::new(ShippingNotifier {
        notified: notified.clone(),
    }));
    let dispatcher = DomainEventDispatcher::new(Arc::new(publisher));

    let mut order = Order::new("o-3".to_string());
    order.place(99);
    order.ship();

    let mut sources: [&mut dyn EventSource; 1] = [&mut order];
    dispatcher.dispatch_and_clear(&mut sources).await.unwrap();

    assert_eq!(notified.lock().unwrap().len(), 1);
    assert!(order.pending_events().is_empty());
}
