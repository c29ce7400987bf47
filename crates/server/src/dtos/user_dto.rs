use chrono::NaiveDateTime;
use database::user::model::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 注册请求
///
/// 字段约束由 `User::ensure_valid` 负责，这里只做绑定。
#[derive(Clone, Serialize, Deserialize, Debug, Validate, ToSchema)]
pub struct RegisterUserRequest {
    pub name: String,

    pub password: String,

    #[serde(default, with = "utils::json_time::option")]
    #[schema(value_type = Option<String>, example = "1990-01-01 00:00:00")]
    pub birthday: Option<NaiveDateTime>,
}

#[derive(Clone, Serialize, Deserialize, Debug, ToSchema)]
pub struct RegisterUserResponse {
    pub id: String,
}

#[derive(Clone, Serialize, Deserialize, Debug, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Clone, Serialize, Deserialize, Debug, ToSchema)]
pub struct LoginResponse {
    pub token: String,

    /// 有效期（秒）
    pub expires_in: u64,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct UserInfoResponse {
    pub id: String,

    pub name: String,

    #[serde(with = "utils::json_time::option")]
    #[schema(value_type = Option<String>, example = "1990-01-01 00:00:00")]
    pub birthday: Option<NaiveDateTime>,
}

impl From<User> for UserInfoResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id_hex().unwrap_or_default(),
            name: user.name,
            birthday: user.birthday,
        }
    }
}
