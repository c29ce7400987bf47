use chrono::{DateTime, NaiveDateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utils::AppResult;
use validator::Validate;

/// 用户模型
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    /// MongoDB文档ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 用户名
    #[validate(length(min = 1, max = 32))]
    pub name: String,
    /// 密码：校验时为明文，入库前替换为哈希；序列化时忽略，避免泄露
    #[serde(skip_serializing, default)]
    #[validate(length(min = 6, max = 32))]
    pub password: String,
    #[serde(default, with = "utils::json_time::option")]
    pub birthday: Option<NaiveDateTime>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, password: String, birthday: Option<NaiveDateTime>) -> Self {
        Self {
            id: None,
            name,
            password,
            birthday,
            created_at: Utc::now(),
        }
    }

    /// 字段级校验，失败时返回 VALIDATE_ERR 并列出不满足约束的字段
    pub fn ensure_valid(&self) -> AppResult<()> {
        self.validate()?;
        Ok(())
    }

    pub fn id_hex(&self) -> Option<String> {
        self.id.map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user() {
        let user = User::new("tony".to_string(), "secret1".to_string(), None);
        assert!(user.ensure_valid().is_ok());
    }

    #[test]
    fn test_name_length_bounds() {
        let empty = User::new(String::new(), "secret1".to_string(), None);
        let err = empty.ensure_valid().unwrap_err();
        assert_eq!(err.code(), "VALIDATE_ERR");
        assert!(err.to_string().contains("name"));

        let long = User::new("a".repeat(33), "secret1".to_string(), None);
        assert!(long.ensure_valid().is_err());

        let max = User::new("a".repeat(32), "secret1".to_string(), None);
        assert!(max.ensure_valid().is_ok());
    }

    #[test]
    fn test_password_length_bounds() {
        let short = User::new("tony".to_string(), "12345".to_string(), None);
        let err = short.ensure_valid().unwrap_err();
        assert!(err.to_string().contains("password"));
        assert!(!err.to_string().contains("name"));

        let long = User::new("tony".to_string(), "p".repeat(33), None);
        assert!(long.ensure_valid().is_err());

        let min = User::new("tony".to_string(), "123456".to_string(), None);
        assert!(min.ensure_valid().is_ok());
    }

    #[test]
    fn test_password_never_serialized() {
        let user = User::new("tony".to_string(), "secret1".to_string(), None);
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("password").is_none());
        assert_eq!(json["name"], "tony");
        assert!(!json.to_string().contains("secret1"));
    }

    #[test]
    fn test_password_is_read_back_from_store() {
        let json = r#"{"name":"tony","password":"$argon2i$hash","birthday":"1990-01-01 00:00:00","created_at":"2022-05-27T00:00:00Z"}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.password, "$argon2i$hash");
        assert!(user.birthday.is_some());
    }
}
