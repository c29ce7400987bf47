use crate::{account_bill::model::AccountBill, Database};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::FindOptions};
use std::sync::Arc;
use tracing::debug;
use utils::AppResult;

pub type DynAccountBillRepository = Arc<dyn AccountBillRepositoryTrait + Send + Sync>;

/// 账目清单的存储接口，Service 只依赖这两个操作
#[async_trait]
pub trait AccountBillRepositoryTrait {
    /// 保存一条账目，返回新记录ID
    async fn save(&self, bill: &AccountBill) -> AppResult<String>;

    /// 查询某个用户的全部账目；没有记录时返回空列表
    async fn select_list_by_user_id(&self, user_id: &str) -> AppResult<Vec<AccountBill>>;
}

#[async_trait]
impl AccountBillRepositoryTrait for Database {
    async fn save(&self, bill: &AccountBill) -> AppResult<String> {
        let result = self.account_bills.insert_one(bill, None).await?;

        Ok(result
            .inserted_id
            .as_object_id()
            .map(|id| id.to_hex())
            .unwrap_or_else(|| result.inserted_id.to_string()))
    }

    async fn select_list_by_user_id(&self, user_id: &str) -> AppResult<Vec<AccountBill>> {
        let options = FindOptions::builder()
            .sort(doc! { "bill_date": -1, "_id": -1 })
            .build();

        let cursor = self.account_bills.find(doc! { "user_id": user_id }, options).await?;
        let bills: Vec<AccountBill> = cursor.try_collect().await?;

        debug!("📒 user {} has {} account bills", user_id, bills.len());
        Ok(bills)
    }
}
