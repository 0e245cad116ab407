use async_trait::async_trait;
use ddd_application::command::Command;
use ddd_application::command_bus::CommandBus;
use ddd_application::command_handler::CommandHandler;
use ddd_application::context::AppContext;
use ddd_application::error::AppError;
use ddd_application::{InMemoryCommandBus, LoggingCommandBus};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct CreateUser {
    name: String,
}

impl Command for CreateUser {
    const NAME: &'static str = "user.create";
}

struct CreateUserHandler;

#[async_trait]
impl CommandHandler<CreateUser> for CreateUserHandler {
    async fn handle(&self, _ctx: &AppContext, cmd: CreateUser) -> Result<(), AppError> {
        if cmd.name.trim().is_empty() {
            return Err(AppError::Validation("name must not be blank".into()));
        }
        println!("CreateUser: name={}", cmd.name);
        Ok(())
    }
}

#[derive(Debug)]
struct DeleteUser {
    id: u32,
}

impl Command for DeleteUser {
    const NAME: &'static str = "user.delete";
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let inner = InMemoryCommandBus::new();
    inner.register::<CreateUser, _>(Arc::new(CreateUserHandler));
    let bus = LoggingCommandBus::new(inner);

    let ctx = AppContext::builder()
        .correlation_id("cor-1".into())
        .actor_id("u-1".into())
        .idempotency_key("idem-1".into())
        .build();

    bus.dispatch(
        &ctx,
        CreateUser {
            name: "Alice".into(),
        },
    )
    .await?;

    if let Err(err) = bus.dispatch(&ctx, CreateUser { name: " ".into() }).await {
        println!("rejected: {err}");
    }

    // 未注册的命令 -> 返回 HandlerNotFound 错误
    if let Err(AppError::HandlerNotFound(name)) = bus.dispatch(&ctx, DeleteUser { id: 7 }).await {
        println!("no handler for {name}");
    }

    Ok(())
}
