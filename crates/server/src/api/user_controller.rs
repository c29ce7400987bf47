use crate::{
    auth::{jwt_auth_middleware, AuthUser, JwtManager},
    dtos::user_dto::{LoginRequest, LoginResponse, RegisterUserRequest, RegisterUserResponse, UserInfoResponse},
    extractors::validation_extractor::ValidationExtractor,
    services::Services,
};
use axum::{
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;
use utils::{ApiResponse, AppError, AppResult};

/// 用户注册
#[utoipa::path(
    post,
    path = "/api/v1/user/register",
    tag = "user",
    request_body = RegisterUserRequest,
    responses(
        (status = 200, description = "注册成功，返回用户ID", body = RegisterUserResponse),
        (status = 400, description = "参数校验失败", body = utils::ErrorResponse),
        (status = 409, description = "用户名已存在", body = utils::ErrorResponse)
    )
)]
pub async fn register(
    Extension(services): Extension<Services>,
    ValidationExtractor(req): ValidationExtractor<RegisterUserRequest>,
) -> AppResult<Json<ApiResponse<RegisterUserResponse>>> {
    let id = services.user.register(req).await?;

    Ok(Json(ApiResponse::success(RegisterUserResponse { id })))
}

/// 用户登录，返回 JWT
#[utoipa::path(
    post,
    path = "/api/v1/user/login",
    tag = "user",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "登录成功", body = LoginResponse),
        (status = 401, description = "用户名或密码错误", body = utils::ErrorResponse)
    )
)]
pub async fn login(
    Extension(services): Extension<Services>,
    Extension(jwt_manager): Extension<Arc<JwtManager>>,
    ValidationExtractor(req): ValidationExtractor<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginResponse>>> {
    let user = services.user.authenticate(&req.name, &req.password).await?;

    let user_id = user
        .id_hex()
        .ok_or_else(|| AppError::InternalServerErrorWithContext("user record has no id".to_string()))?;
    let token = jwt_manager.generate_token(&user_id, &user.name)?;

    Ok(Json(ApiResponse::success(LoginResponse {
        token,
        expires_in: jwt_manager.expires_in_secs(),
    })))
}

/// 当前登录用户信息
#[utoipa::path(
    get,
    path = "/api/v1/user/info",
    tag = "user",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "用户信息", body = UserInfoResponse),
        (status = 401, description = "未登录", body = utils::ErrorResponse),
        (status = 404, description = "用户不存在", body = utils::ErrorResponse)
    )
)]
pub async fn info(
    Extension(services): Extension<Services>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<UserInfoResponse>>> {
    let info = services.user.get_user_info(&user.user_id).await?;

    Ok(Json(ApiResponse::success(info)))
}

pub struct UserController;
impl UserController {
    pub fn app() -> Router {
        let protected = Router::new()
            .route("/user/info", get(info))
            .route_layer(middleware::from_fn(jwt_auth_middleware));

        Router::new()
            .route("/user/register", post(register))
            .route("/user/login", post(login))
            .merge(protected)
    }
}
