use crate::{
    auth::password,
    dtos::user_dto::{RegisterUserRequest, UserInfoResponse},
};
use async_trait::async_trait;
use database::user::{model::User, repository::DynUserRepository};
use std::sync::Arc;
use tracing::{info, warn};
use utils::{AppError, AppResult};

pub type DynUserService = Arc<dyn UserServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserServiceTrait {
    /// 注册用户，返回用户ID
    async fn register(&self, request: RegisterUserRequest) -> AppResult<String>;

    /// 校验用户名和密码
    async fn authenticate(&self, name: &str, password: &str) -> AppResult<User>;

    async fn get_user_info(&self, user_id: &str) -> AppResult<UserInfoResponse>;
}

#[derive(Clone)]
pub struct UserService {
    repository: DynUserRepository,
}

impl UserService {
    pub fn new(repository: DynUserRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn register(&self, request: RegisterUserRequest) -> AppResult<String> {
        let mut user = User::new(request.name, request.password, request.birthday);
        // 长度约束针对明文密码
        user.ensure_valid()?;
        user.password = password::hash_password_blocking(user.password).await?;

        let id = match self.repository.create_user(&user).await {
            Ok(id) => id,
            Err(e @ AppError::Conflict(_)) => return Err(e),
            Err(e) => return Err(AppError::record_create("failed to create user", e)),
        };

        info!("✅ 用户注册成功: name={}, id={}", user.name, id);
        Ok(id)
    }

    async fn authenticate(&self, name: &str, password: &str) -> AppResult<User> {
        let user = self
            .repository
            .get_user_by_name(name)
            .await
            .map_err(|e| AppError::query("failed to query user", e))?;

        if let Some(user) = user {
            if password::verify_password_blocking(user.password.clone(), password.to_string()).await? {
                return Ok(user);
            }
        }

        warn!("⚠️ 登录失败: name={}", name);
        Err(AppError::Unauthorized("invalid user name or password".to_string()))
    }

    async fn get_user_info(&self, user_id: &str) -> AppResult<UserInfoResponse> {
        let user = self
            .repository
            .get_user_by_id(user_id)
            .await
            .map_err(|e| AppError::query("failed to query user", e))?;

        user.map(UserInfoResponse::from)
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found.", user_id)))
    }
}
