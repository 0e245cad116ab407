use ddd_domain::domain_event::DomainEvent;
use ddd_macros::domain_event;

#[domain_event]
enum PaymentEvent {
    Authorized { amount: i64 },
    #[event(event_type = "payment.captured")]
    Captured { amount: i64 },
    Voided,
}

fn main() {
    let now = chrono::Utc::now();

    let authorized = PaymentEvent::Authorized { amount: 10, occurred_at: now };
    assert_eq!(authorized.event_type(), "PaymentEvent.Authorized");
    assert_eq!(authorized.occurred_at(), now);

    let captured = PaymentEvent::Captured { amount: 10, occurred_at: now };
    assert_eq!(captured.event_type(), "payment.captured");

    let voided = PaymentEvent::Voided { occurred_at: now };
    assert_eq!(voided.event_type(), "PaymentEvent.Voided");
}
