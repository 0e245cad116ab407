use ddd_domain::domain_event::EventSource;
use ddd_domain::entity::Entity;
use ddd_macros::{domain_event, entity};

#[domain_event]
enum TicketEvent {
    Opened { title: String },
    Closed,
}

#[entity(events = TicketEvent)]
struct Ticket {
    title: String,
}

impl Ticket {
    fn open(&mut self, title: &str) {
        self.title = title.to_string();
        self.register_event(TicketEvent::Opened {
            title: title.to_string(),
            occurred_at: chrono::Utc::now(),
        });
    }
}

#[entity(id = u64, debug = false)]
struct Tag {
    name: String,
}

impl std::fmt::Debug for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tag({})", self.id)
    }
}

fn main() {
    let mut ticket = Ticket::new("T-1".to_string());
    ticket.open("printer on fire");
    assert_eq!(ticket.id(), "T-1");
    assert_eq!(ticket.pending_events().len(), 1);
    assert!(ticket.event_holder().is_some());
    ticket.clear_events();
    assert!(ticket.pending_events().is_empty());

    let mut tag = Tag::new(7);
    tag.name = "urgent".into();
    assert!(tag.event_holder().is_none());
    let _ = format!("{:?}", tag);
}
