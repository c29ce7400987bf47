use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Billbook API",
        description = "人情往来账本 API 文档",
        version = "1.0.0"
    ),
    paths(
        // System health check
        crate::api::health,
        // User endpoints
        crate::api::user_controller::register,
        crate::api::user_controller::login,
        crate::api::user_controller::info,
        // Account bill endpoints
        crate::api::account_bill_controller::add_account_bill,
        crate::api::account_bill_controller::get_account_bill_list,
    ),
    components(
        schemas(
            utils::ErrorResponse,
            crate::dtos::user_dto::RegisterUserRequest,
            crate::dtos::user_dto::RegisterUserResponse,
            crate::dtos::user_dto::LoginRequest,
            crate::dtos::user_dto::LoginResponse,
            crate::dtos::user_dto::UserInfoResponse,
            crate::dtos::account_bill_dto::AddAccountBillRequest,
            crate::dtos::account_bill_dto::AccountBillResponse,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "系统状态", description = "系统健康检查和状态监控"),
        (name = "user", description = "用户注册、登录与信息"),
        (name = "account_bill", description = "账目清单")
    )
)]
pub struct ApiDoc;

/// 注册 `bearer_auth` 认证方式，供需要登录的接口引用
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme("bearer_auth", SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_routes_and_auth() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/v1/account_bill"));
        assert!(doc.paths.paths.contains_key("/api/v1/user/login"));

        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
        assert!(components.schemas.contains_key("AddAccountBillRequest"));
    }
}
