////////////////////////////////////////////////////////////////////////
//
// 1. 每个Domain(Entity)单独一个文件夹
// 2. 每个Domain由两部分组成:
//    - model: 定义Schema
//    - repository: 实际的数据库底层操作
//
//////////////////////////////////////////////////////////////////////

use mongodb::{bson::doc, options::IndexOptions, Client, Collection, IndexModel};
use std::sync::Arc;
use tracing::info;
use utils::{AppConfig, AppResult};

pub use memory::InMemoryDatabase;

pub mod account_bill;
pub mod memory;
pub mod serde_helpers;
pub mod user;

#[derive(Clone, Debug)]
pub struct Database {
    pub users: Collection<user::model::User>,
    pub account_bills: Collection<account_bill::model::AccountBill>,
}

impl Database {
    pub async fn new(config: Arc<AppConfig>) -> AppResult<Self> {
        let client = Client::with_uri_str(&config.mongo_uri).await?;
        let db: mongodb::Database = client.database(&config.mongo_db);

        let users = db.collection("User");
        let account_bills = db.collection("AccountBill");

        info!("🧱 database({:#}) connected.", &config.mongo_db);

        Ok(Database { users, account_bills })
    }

    /// 初始化数据库索引
    pub async fn init_indexes(&self) -> AppResult<()> {
        info!("🔧 初始化数据库索引...");

        // 用户名唯一
        self.users
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "name": 1 })
                    .options(IndexOptions::builder().unique(true).build())
                    .build(),
                None,
            )
            .await?;

        // 按用户查账目，账目日期倒序
        self.account_bills
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "user_id": 1, "bill_date": -1 })
                    .build(),
                None,
            )
            .await?;

        info!("✅ 数据库索引初始化完成");
        Ok(())
    }
}
