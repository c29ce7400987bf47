use crate::dtos::account_bill_dto::{AccountBillResponse, AddAccountBillRequest};
use async_trait::async_trait;
use chrono::Utc;
use database::account_bill::{model::AccountBill, repository::DynAccountBillRepository};
use std::sync::Arc;
use tracing::{info, warn};
use utils::{money, AppError, AppResult};

pub type DynAccountBillService = Arc<dyn AccountBillServiceTrait + Send + Sync>;

#[async_trait]
pub trait AccountBillServiceTrait {
    /// 新增账目，返回记录ID
    async fn add_account_bill(&self, user_id: &str, request: AddAccountBillRequest) -> AppResult<String>;

    /// 当前用户的账目清单，没有记录时返回空列表
    async fn get_account_bill_list(&self, user_id: &str) -> AppResult<Vec<AccountBillResponse>>;
}

#[derive(Clone)]
pub struct AccountBillService {
    repository: DynAccountBillRepository,
}

impl AccountBillService {
    pub fn new(repository: DynAccountBillRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AccountBillServiceTrait for AccountBillService {
    async fn add_account_bill(&self, user_id: &str, request: AddAccountBillRequest) -> AppResult<String> {
        // 金额必须先转换成功，才会组装记录并写库
        let amount = money::parse_minor_units(&request.amount).map_err(|e| {
            warn!("⚠️ 账目金额无效: user_id={}, amount={:?}, error={}", user_id, request.amount, e);
            AppError::from(e)
        })?;

        let bill = AccountBill {
            id: None,
            user_id: user_id.to_string(),
            amount,
            bill_date: request.bill_date,
            origin_incident: request.origin_incident,
            relation: request.relation,
            to_name: request.to_name,
            is_follow: request.is_follow,
            remark: request.remark,
            created_at: Utc::now(),
        };

        let id = self
            .repository
            .save(&bill)
            .await
            .map_err(|e| AppError::record_create("failed to save account bill", e))?;

        info!("✅ 账目已保存: user_id={}, id={}, amount={}", user_id, id, amount);
        Ok(id)
    }

    async fn get_account_bill_list(&self, user_id: &str) -> AppResult<Vec<AccountBillResponse>> {
        let bills = self
            .repository
            .select_list_by_user_id(user_id)
            .await
            .map_err(|e| AppError::query("failed to query account bills", e))?;

        Ok(bills.into_iter().map(AccountBillResponse::from).collect())
    }
}
