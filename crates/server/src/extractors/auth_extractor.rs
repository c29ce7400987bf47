use crate::auth::AuthUser;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use utils::AppError;

/// 从请求扩展中取出认证中间件写入的用户
#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("authentication required".to_string()))
    }
}
