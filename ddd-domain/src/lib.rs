//! DDD 领域层基础库（ddd-domain）
//!
//! 提供以 DDD 为中心的通用抽象与构件：
//! - 实体（`entity`）与聚合根（`aggregate`）：标识与一致性边界
//! - 领域事件（`domain_event`）：事件协议与实体内嵌的待分发事件队列
//! - 事件分发（`eventing`）：从一批实体收割事件并顺序发布
//! - 值对象（`value_object`）：基于相等分量的结构化相等、哈希与排序
//! - 仓储协议（`persist`）与统一错误（`error`）
//!
//! 本 crate 与存储、传输实现解耦，仅定义领域层接口与最小必要的错误类型。
//!
//! 典型用法：
//! 1. 使用 `#[entity(events = ...)]` 定义聚合，在行为方法中登记领域事件；
//! 2. 使用 `#[value_object]` 定义值对象，获得结构化比较；
//! 3. 在事务边界处通过 `DomainEventDispatcher` 收割并发布事件。
//!
pub mod aggregate;
pub mod domain_event;
pub mod entity;
pub mod error;
#[cfg(feature = "eventing")]
pub mod eventing;
pub mod persist;
pub mod value_object;

// 允许在本 crate 内部通过 ::ddd_domain 进行自引用，
// 以便过程宏在本 crate 的单元测试中也能解析到 ::ddd_domain 路径。
extern crate self as ddd_domain;
