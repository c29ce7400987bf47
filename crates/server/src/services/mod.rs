////////////////////////////////////////////////////////////////////////
//
// 1. 每个Domain单独一个文件夹
// 2. Service 只依赖 database 中的 Repository Trait，
//    具体是 MongoDB 还是内存实现由启动时注入
//
//////////////////////////////////////////////////////////////////////

pub mod account_bill;
pub mod user;

use account_bill::account_bill_service::{AccountBillService, DynAccountBillService};
use database::{
    account_bill::repository::{AccountBillRepositoryTrait, DynAccountBillRepository},
    user::repository::{DynUserRepository, UserRepositoryTrait},
};
use std::sync::Arc;
use tracing::info;
use user::user_service::{DynUserService, UserService};

#[derive(Clone)]
pub struct Services {
    pub user: DynUserService,
    pub account_bill: DynAccountBillService,
}

impl Services {
    /// 由同时实现了所有 Repository Trait 的存储构建（Database / InMemoryDatabase）
    pub fn new<R>(storage: R) -> Self
    where
        R: UserRepositoryTrait + AccountBillRepositoryTrait + Send + Sync + 'static,
    {
        let storage = Arc::new(storage);
        Self::with_repositories(storage.clone(), storage)
    }

    pub fn with_repositories(user_repository: DynUserRepository, account_bill_repository: DynAccountBillRepository) -> Self {
        let user = Arc::new(UserService::new(user_repository)) as DynUserService;
        let account_bill = Arc::new(AccountBillService::new(account_bill_repository)) as DynAccountBillService;

        info!("🧠 Services initialized");

        Self { user, account_bill }
    }
}
