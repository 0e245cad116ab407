use std::collections::HashSet;

use ddd_domain::value_object::{Component, ValueObject};
use std::borrow::Cow;
use ddd_macros::value_object;

#[value_object]
struct Amount {
    value: i64,
    currency: String,
}

#[value_object(debug = false)]
struct Percent(u8);

impl std::fmt::Debug for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[value_object]
struct Annotated {
    key: String,
    #[component(skip)]
    note: String,
}

#[value_object(components = manual)]
struct CaseInsensitive(String);

impl ValueObject for CaseInsensitive {
    fn equality_components(&self) -> Vec<Component<'_>> {
        vec![Component::Str(Cow::Owned(self.0.to_lowercase()))]
    }
}

fn main() {
    let a = Amount { value: 5, currency: "EUR".into() };
    let b = a.clone();
    assert_eq!(a, b);
    assert!(Amount { value: 4, currency: "EUR".into() } < a);

    let mut set = HashSet::new();
    set.insert(a);
    set.insert(b);
    assert_eq!(set.len(), 1);

    assert!(Percent(1) < Percent(2));
    let _ = format!("{:?}", Percent(3));

    let x = Annotated { key: "k".into(), note: "first".into() };
    let y = Annotated { key: "k".into(), note: "second".into() };
    assert_eq!(x, y);

    assert_eq!(CaseInsensitive("Hello".into()), CaseInsensitive("hELLO".into()));
}
