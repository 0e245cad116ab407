/// 值对象示例
/// 展示基于相等分量的相等、哈希与排序，以及空值感知的比较辅助
use ddd_domain::value_object::{StructuralComparer, ValueObject};
use ddd_macros::value_object;
use std::collections::{BTreeSet, HashSet};

#[value_object]
struct Money {
    amount: i64,
    currency: String,
}

#[value_object]
struct Price {
    net: Money,
    discount: Option<i64>,
    #[component(skip)]
    label: String,
}

fn money(amount: i64, currency: &str) -> Money {
    Money {
        amount,
        currency: currency.to_string(),
    }
}

fn main() {
    let five = money(5, "EUR");
    let also_five = money(5, "EUR");
    println!("five == also_five: {}", five == also_five);
    println!("components: {:?}", five.equality_components());

    let unique: HashSet<Money> = [money(5, "EUR"), money(5, "EUR"), money(7, "USD")]
        .into_iter()
        .collect();
    println!("distinct amounts: {}", unique.len());

    let ordered: BTreeSet<Money> = [money(9, "EUR"), money(1, "EUR"), money(4, "EUR")]
        .into_iter()
        .collect();
    println!("ordered: {:?}", ordered.iter().map(|m| m.amount).collect::<Vec<_>>());

    let list_price = Price {
        net: money(100, "EUR"),
        discount: None,
        label: "list".into(),
    };
    let promo = Price {
        net: money(100, "EUR"),
        discount: Some(10),
        label: "promo".into(),
    };
    println!("list < promo (null discount first): {}", list_price < promo);

    let comparer = StructuralComparer::shared();
    let missing: Option<&Price> = None;
    println!(
        "null vs promo: eq={} lt={}",
        comparer.equals_opt(missing, Some(&promo)),
        comparer.lt(missing, Some(&promo))
    );
}
