use crate::{user::model::User, Database};
use async_trait::async_trait;
use mongodb::{
    bson::{self, doc, oid::ObjectId, Document},
    error::{ErrorKind, WriteFailure},
};
use std::sync::Arc;
use utils::{AppError, AppResult};

pub type DynUserRepository = Arc<dyn UserRepositoryTrait + Send + Sync>;

// 主要用于Service中，表示提供了该Trait功能
#[async_trait]
pub trait UserRepositoryTrait {
    /// 新建用户，返回用户ID；用户名重复时返回 Conflict
    async fn create_user(&self, user: &User) -> AppResult<String>;

    async fn get_user_by_name(&self, name: &str) -> AppResult<Option<User>>;

    async fn get_user_by_id(&self, id: &str) -> AppResult<Option<User>>;
}

/// E11000 duplicate key
const DUPLICATE_KEY_CODE: i32 = 11000;

fn is_duplicate_key(e: &mongodb::error::Error) -> bool {
    matches!(
        e.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl UserRepositoryTrait for Database {
    async fn create_user(&self, user: &User) -> AppResult<String> {
        if self.users.find_one(doc! { "name": &user.name }, None).await?.is_some() {
            return Err(AppError::Conflict(format!("User with name {} already exists.", user.name)));
        }

        // password 在 serde 层被忽略，这里显式写入
        let mut document = bson::to_document(user)
            .map_err(|e| AppError::InternalServerErrorWithContext(format!("Failed to encode user: {}", e)))?;
        document.insert("password", user.password.as_str());

        // 并发注册时预检查可能都通过，由唯一索引兜底
        let result = self
            .users
            .clone_with_type::<Document>()
            .insert_one(document, None)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::Conflict(format!("User with name {} already exists.", user.name))
                } else {
                    AppError::from(e)
                }
            })?;

        Ok(result
            .inserted_id
            .as_object_id()
            .map(|id| id.to_hex())
            .unwrap_or_else(|| result.inserted_id.to_string()))
    }

    async fn get_user_by_name(&self, name: &str) -> AppResult<Option<User>> {
        let user = self.users.find_one(doc! { "name": name }, None).await?;

        Ok(user)
    }

    async fn get_user_by_id(&self, id: &str) -> AppResult<Option<User>> {
        // 非法的ID按"不存在"处理
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let user = self.users.find_one(doc! { "_id": oid }, None).await?;

        Ok(user)
    }
}
