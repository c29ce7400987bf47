use crate::serde_helpers::serialize_u64_as_number;
use chrono::{DateTime, NaiveDateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 账目清单
///
/// `amount` 以"分"为单位存储，始终非负。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountBill {
    /// MongoDB文档ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 所属用户ID
    pub user_id: String,
    /// 金额（分）
    #[serde(serialize_with = "serialize_u64_as_number")]
    pub amount: u64,
    /// 账目日期
    pub bill_date: NaiveDateTime,
    /// 事由
    pub origin_incident: String,
    /// 与对方的关系
    pub relation: String,
    /// 对方姓名
    pub to_name: String,
    /// 是否需要跟进（回礼）
    pub is_follow: bool,
    pub remark: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mongodb::bson::{self, Bson};

    fn sample() -> AccountBill {
        AccountBill {
            id: None,
            user_id: "6290a0f1c2b3d4e5f6a7b8c9".to_string(),
            amount: 1230,
            bill_date: NaiveDate::from_ymd_opt(2022, 5, 27).unwrap().and_hms_opt(12, 0, 0).unwrap(),
            origin_incident: "wedding".to_string(),
            relation: "friend".to_string(),
            to_name: "Li Lei".to_string(),
            is_follow: true,
            remark: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_bson_amount_is_plain_integer() {
        let doc = bson::to_document(&sample()).unwrap();

        assert_eq!(doc.get("amount"), Some(&Bson::Int32(1230)));
        assert!(doc.get("_id").is_none());
    }

    #[test]
    fn test_bson_round_trip() {
        let bill = sample();
        let doc = bson::to_document(&bill).unwrap();
        let back: AccountBill = bson::from_document(doc).unwrap();

        assert_eq!(back, bill);
    }
}
