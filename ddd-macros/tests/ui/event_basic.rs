use ddd_domain::domain_event::DomainEvent;
use ddd_macros::domain_event;

#[domain_event]
struct StockReserved {
    sku: String,
    quantity: u32,
}

#[domain_event(event_type = "inventory.released")]
struct StockReleased {
    sku: String,
}

fn main() {
    let reserved = StockReserved {
        sku: "A-1".into(),
        quantity: 2,
        occurred_at: chrono::Utc::now(),
    };
    assert_eq!(reserved.event_type(), "StockReserved");
    assert_eq!(reserved.occurred_at(), reserved.occurred_at);
    assert_eq!(reserved.clone(), reserved);

    let released = StockReleased {
        sku: "A-1".into(),
        occurred_at: chrono::Utc::now(),
    };
    assert_eq!(released.event_type(), "inventory.released");
}
