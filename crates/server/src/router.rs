use super::services::Services;
use crate::{api, auth::JwtManager, docs::ApiDoc, middleware};
use axum::{
    error_handling::HandleErrorLayer,
    http::{Method, StatusCode},
    middleware as axum_middleware,
    response::{IntoResponse, Response},
    routing::get,
    BoxError, Extension, Json, Router,
};
use std::{sync::Arc, time::Duration};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utils::{ApiResponse, AppError, ErrorResponse};
use utoipa::OpenApi;

pub struct AppRouter;

impl AppRouter {
    pub fn new(services: Services, jwt_manager: Arc<JwtManager>, timeout: Duration) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
                axum::http::header::USER_AGENT,
            ]);

        Router::new()
            // API 路由
            .nest("/api/v1", api::app())
            // OpenAPI 文档
            .route("/api-docs/openapi.json", get(openapi_json))
            .fallback(Self::handle_404)
            .layer(axum_middleware::from_fn(middleware::request_logger))
            .layer(cors)
            .layer(
                ServiceBuilder::new()
                    .layer(Extension(services))
                    .layer(Extension(jwt_manager))
                    .layer(TraceLayer::new_for_http())
                    .layer(HandleErrorLayer::new(move |err: BoxError| Self::handle_timeout_error(err, timeout)))
                    .timeout(timeout),
            )
    }

    async fn handle_404() -> AppError {
        AppError::NotFound("The requested resource does not exist on this server!".to_string())
    }

    async fn handle_timeout_error(err: BoxError, timeout: Duration) -> Response {
        if err.is::<tower::timeout::error::Elapsed>() {
            let body = ApiResponse::<()>::error(ErrorResponse::new(
                "TIMEOUT",
                &format!(
                    "Request took longer than the configured {} second timeout",
                    timeout.as_secs()
                ),
            ));
            (StatusCode::REQUEST_TIMEOUT, Json(body)).into_response()
        } else {
            AppError::InternalServerErrorWithContext(format!("Unhandled internal error: {}", err)).into_response()
        }
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
