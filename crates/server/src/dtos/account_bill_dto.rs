use chrono::NaiveDateTime;
use database::account_bill::model::AccountBill;
use serde::{Deserialize, Serialize};
use utils::money;
use utoipa::ToSchema;
use validator::Validate;

/// 新增账目请求
#[derive(Clone, Serialize, Deserialize, Debug, Validate, ToSchema)]
pub struct AddAccountBillRequest {
    /// 金额，十进制字符串，最多保留两位小数
    #[validate(length(min = 1, max = 32))]
    #[schema(example = "12.30")]
    pub amount: String,

    /// 账目日期
    #[serde(with = "utils::json_time")]
    #[schema(value_type = String, example = "2022-05-27 12:00:00")]
    pub bill_date: NaiveDateTime,

    /// 事由
    #[serde(default)]
    #[validate(length(max = 128))]
    pub origin_incident: String,

    /// 与对方的关系
    #[serde(default)]
    #[validate(length(max = 32))]
    pub relation: String,

    /// 对方姓名
    #[validate(length(min = 1, max = 32))]
    pub to_name: String,

    #[serde(default)]
    pub is_follow: bool,

    #[serde(default)]
    #[validate(length(max = 255))]
    pub remark: String,
}

/// 账目展示
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct AccountBillResponse {
    #[serde(with = "utils::json_time")]
    #[schema(value_type = String, example = "2022-05-27 12:00:00")]
    pub bill_date: NaiveDateTime,

    pub origin_incident: String,

    /// 固定两位小数
    #[schema(example = "12.30")]
    pub amount: String,

    pub relation: String,

    pub to_name: String,

    pub is_follow: bool,

    pub remark: String,
}

impl From<AccountBill> for AccountBillResponse {
    fn from(bill: AccountBill) -> Self {
        Self {
            bill_date: bill.bill_date,
            origin_incident: bill.origin_incident,
            amount: money::format_minor_units(bill.amount),
            relation: bill.relation,
            to_name: bill.to_name,
            is_follow: bill.is_follow,
            remark: bill.remark,
        }
    }
}
