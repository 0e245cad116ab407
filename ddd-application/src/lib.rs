//! 应用层（Application）
//!
//! 命令（Command）经 `CommandBus` 路由到对应的 `CommandHandler`；
//! `LoggingCommandBus` 以装饰器形式为任意总线补充结构化日志。
//!
pub mod command;
pub mod command_bus;
pub mod command_handler;
pub mod context;
pub mod error;
pub mod inmemory_command_bus;
pub mod logging;

pub use inmemory_command_bus::InMemoryCommandBus;
pub use logging::LoggingCommandBus;
