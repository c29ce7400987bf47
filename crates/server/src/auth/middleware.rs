use crate::auth::{AuthUser, JwtManager, TokenExtractor};
use axum::{extract::Request, middleware::Next, response::Response, Extension};
use std::sync::Arc;
use utils::AppError;

/// JWT认证中间件
///
/// 校验 `Authorization: Bearer <token>`，成功后把 [`AuthUser`] 写入请求扩展。
pub async fn jwt_auth_middleware(
    Extension(jwt_manager): Extension<Arc<JwtManager>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = TokenExtractor::extract_bearer_token(
        request.headers().get("authorization").and_then(|v| v.to_str().ok()),
    );

    let Some(token) = token else {
        tracing::warn!("No authentication token provided");
        return Err(AppError::Unauthorized("missing bearer token".to_string()));
    };

    match jwt_manager.verify_token(&token) {
        Ok(claims) => {
            request.extensions_mut().insert(AuthUser::from(claims));
            Ok(next.run(request).await)
        }
        Err(e) => {
            tracing::warn!("Token verification failed: {}", e);
            Err(AppError::Unauthorized("invalid or expired token".to_string()))
        }
    }
}
