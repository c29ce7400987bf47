//! 内存存储实现，用于本地开发和测试（STORAGE_BACKEND=memory）

use crate::{
    account_bill::{model::AccountBill, repository::AccountBillRepositoryTrait},
    user::{model::User, repository::UserRepositoryTrait},
};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::{Arc, RwLock};
use utils::{AppError, AppResult};

#[derive(Clone, Default)]
pub struct InMemoryDatabase {
    users: Arc<RwLock<Vec<User>>>,
    account_bills: Arc<RwLock<Vec<AccountBill>>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account_bill_count(&self) -> usize {
        self.account_bills.read().map(|bills| bills.len()).unwrap_or_default()
    }
}

fn lock_error(e: impl std::fmt::Display) -> AppError {
    AppError::InternalServerErrorWithContext(format!("Failed to acquire lock: {}", e))
}

#[async_trait]
impl AccountBillRepositoryTrait for InMemoryDatabase {
    async fn save(&self, bill: &AccountBill) -> AppResult<String> {
        let mut bills = self.account_bills.write().map_err(lock_error)?;

        let id = ObjectId::new();
        let mut bill = bill.clone();
        bill.id = Some(id);
        bills.push(bill);

        Ok(id.to_hex())
    }

    async fn select_list_by_user_id(&self, user_id: &str) -> AppResult<Vec<AccountBill>> {
        let bills = self.account_bills.read().map_err(lock_error)?;

        let mut result: Vec<AccountBill> = bills.iter().filter(|bill| bill.user_id == user_id).cloned().collect();
        // 与 MongoDB 实现一致：bill_date 倒序，同一时间后写入的在前
        result.sort_by(|a, b| b.bill_date.cmp(&a.bill_date).then_with(|| b.id.cmp(&a.id)));

        Ok(result)
    }
}

#[async_trait]
impl UserRepositoryTrait for InMemoryDatabase {
    async fn create_user(&self, user: &User) -> AppResult<String> {
        let mut users = self.users.write().map_err(lock_error)?;

        if users.iter().any(|u| u.name == user.name) {
            return Err(AppError::Conflict(format!("User with name {} already exists.", user.name)));
        }

        let id = ObjectId::new();
        let mut user = user.clone();
        user.id = Some(id);
        users.push(user);

        Ok(id.to_hex())
    }

    async fn get_user_by_name(&self, name: &str) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(lock_error)?;

        Ok(users.iter().find(|u| u.name == name).cloned())
    }

    async fn get_user_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(lock_error)?;

        Ok(users.iter().find(|u| u.id_hex().as_deref() == Some(id)).cloned())
    }
}
