use bon::Builder;

/// 应用层上下文（Application Context）
///
/// 承载一次命令调用所需的横切信息，例如：
/// - 关联追踪 `correlation_id`，贯穿日志 span；
/// - 执行者 `actor_id`，用于审计；
/// - 幂等键（`idempotency_key`）：用于在基础设施层实现请求幂等（如 API 层重复提交保护）。
///
/// 典型用法：
/// ```rust
/// use ddd_application::context::AppContext;
///
/// let ctx = AppContext::builder()
///     .correlation_id("cor-123".to_string())
///     .actor_id("u-1".to_string())
///     .maybe_idempotency_key(None)
///     .build();
/// assert_eq!(ctx.correlation_id.as_deref(), Some("cor-123"));
/// ```
#[derive(Builder, Clone, Debug, Default)]
pub struct AppContext {
    pub correlation_id: Option<String>,
    pub actor_id: Option<String>,
    /// 幂等键（可选）：为空则由上层或基础设施决定是否参与幂等
    pub idempotency_key: Option<String>,
}
