use proc_macro::TokenStream;

mod domain_event;
mod entity;
mod entity_id;
mod utils;
mod value_object;

/// 实体宏
/// - 追加字段：`id: IdType`（若缺失）并置于字段最前
/// - 自动为目标结构体实现 `::ddd_domain::entity::Entity` 与 `::ddd_domain::domain_event::EventSource`
/// - 支持参数：`#[entity(id = IdType, events = EventType, debug = true|false)]`，`id` 默认 `String`
///
/// ```ignore
/// #[entity(id = OrderId, events = OrderEvent)]
/// struct Order {
///     total: i64,
/// }
/// ```
#[proc_macro_attribute]
pub fn entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity::expand(attr, item)
}

/// 实体 ID 宏
/// 用于为 `tuple struct` 形式的 ID 类型（例如 `struct AccountId(String);`、`struct OrderId(Uuid);`）
/// 自动实现以下 trait：
/// - `Display`（要求内部类型实现 `Display`）
/// - `FromStr`（要求内部类型实现 `FromStr`，并委托解析）
/// - `AsRef`/`From`，以及参与值比较的 `ToComponent`
///
/// 仅支持单字段的 `tuple struct`。
#[proc_macro_attribute]
pub fn entity_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity_id::expand(attr, item)
}

/// 领域事件宏
/// 支持具名字段结构体，或形如：
/// pub enum XxxEvent {
///     Variant { field_a: T, ... },
///     Unit,
/// }
/// 的枚举，并为结构体或每个变体追加 `occurred_at: OccurredAt` 字段（若缺失）。
/// - 结构体：`#[domain_event(event_type = "...")]` 覆写事件类型，默认结构体名
/// - 变体：`#[event(event_type = "...")]` 覆写事件类型，默认 `Enum.Variant`
#[proc_macro_attribute]
pub fn domain_event(attr: TokenStream, item: TokenStream) -> TokenStream {
    domain_event::expand(attr, item)
}

/// 值对象宏
/// - 以字段声明顺序作为相等分量，`#[component(skip)]` 排除字段
/// - 基于 `StructuralComparer` 生成 `PartialEq`/`Eq`/`Hash`/`PartialOrd`/`Ord`
/// - 支持参数：`#[value_object(debug = true|false, components = manual)]`
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    value_object::expand(attr, item)
}
