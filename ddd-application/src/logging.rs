//! 命令管道日志装饰器
//!
//! 为任意 `CommandBus` 包装一层结构化日志：每条命令一个 span（命令名 + 关联 ID），
//! 记录开始、完成耗时或失败原因。结果原样返回，不做任何改写。
use crate::{command::Command, command_bus::CommandBus, context::AppContext, error::AppError};
use async_trait::async_trait;
use std::time::Instant;
use tracing::{Instrument, info, info_span, warn};

pub struct LoggingCommandBus<B> {
    inner: B,
}

impl<B: CommandBus> LoggingCommandBus<B> {
    pub fn new(inner: B) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }
}

#[async_trait]
impl<B: CommandBus> CommandBus for LoggingCommandBus<B> {
    async fn dispatch<C: Command>(&self, ctx: &AppContext, cmd: C) -> Result<(), AppError> {
        let span = info_span!(
            "command",
            command = C::NAME,
            correlation_id = ctx.correlation_id.as_deref().unwrap_or("-"),
        );

        async move {
            info!("command started");
            let started = Instant::now();
            let result = self.inner.dispatch(ctx, cmd).await;
            let elapsed_ms = started.elapsed().as_millis() as u64;
            match &result {
                Ok(()) => info!(elapsed_ms, "command completed"),
                Err(err) => warn!(elapsed_ms, error = %err, "command failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}
