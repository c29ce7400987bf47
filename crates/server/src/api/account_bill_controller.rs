use crate::{
    auth::{jwt_auth_middleware, AuthUser},
    dtos::account_bill_dto::{AccountBillResponse, AddAccountBillRequest},
    extractors::validation_extractor::ValidationExtractor,
    services::Services,
};
use axum::{middleware, routing::get, Extension, Json, Router};
use utils::{ApiResponse, AppResult};

/// 新增账目
///
/// 金额为十进制字符串，负数或非数字会被拒绝，且不会写库。
#[utoipa::path(
    post,
    path = "/api/v1/account_bill",
    tag = "account_bill",
    request_body = AddAccountBillRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "账目已保存"),
        (status = 400, description = "金额无效或参数校验失败", body = utils::ErrorResponse),
        (status = 401, description = "未登录", body = utils::ErrorResponse),
        (status = 500, description = "写库失败", body = utils::ErrorResponse)
    )
)]
pub async fn add_account_bill(
    Extension(services): Extension<Services>,
    user: AuthUser,
    ValidationExtractor(req): ValidationExtractor<AddAccountBillRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    services.account_bill.add_account_bill(&user.user_id, req).await?;

    Ok(Json(ApiResponse::<()>::ok()))
}

/// 当前用户的账目清单
#[utoipa::path(
    get,
    path = "/api/v1/account_bill",
    tag = "account_bill",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "账目清单，没有记录时为空数组", body = Vec<AccountBillResponse>),
        (status = 401, description = "未登录", body = utils::ErrorResponse),
        (status = 500, description = "查询失败", body = utils::ErrorResponse)
    )
)]
pub async fn get_account_bill_list(
    Extension(services): Extension<Services>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<Vec<AccountBillResponse>>>> {
    let bills = services.account_bill.get_account_bill_list(&user.user_id).await?;

    Ok(Json(ApiResponse::success(bills)))
}

pub struct AccountBillController;
impl AccountBillController {
    pub fn app() -> Router {
        Router::new()
            .route("/account_bill", get(get_account_bill_list).post(add_account_bill))
            .route_layer(middleware::from_fn(jwt_auth_middleware))
    }
}
