//! 持久化协议（persist）
//!
//! 只定义面向实体的读写仓储接口，领域事件与值对象逻辑不直接依赖它们；
//! 存储后端（ORM、数据库等）由基础设施层提供实现并注入。
//! `InMemoryRepository` 用于测试与示例。
//!
mod repository;
mod repository_inmemory;

pub use repository::{ReadRepository, Repository};
pub use repository_inmemory::InMemoryRepository;
