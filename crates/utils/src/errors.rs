use crate::response::{ApiResponse, ErrorResponse};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// 业务错误
///
/// 每个变体对应一个对外暴露的错误代码，见 [`AppError::code`]。
#[derive(Error, Debug)]
pub enum AppError {
    /// 参数校验失败（金额格式、负数金额、请求体绑定失败等）
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    /// 写入记录失败
    #[error("{message}: {source}")]
    RecordCreate {
        message: String,
        #[source]
        source: Box<AppError>,
    },

    /// 查询失败（与"结果为空"区分开）
    #[error("{message}: {source}")]
    Query {
        message: String,
        #[source]
        source: Box<AppError>,
    },

    #[error("{0}")]
    InternalServerErrorWithContext(String),

    #[error("MongoDB error: {0}")]
    MongoError(#[from] mongodb::error::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string().replace('\n', "; "))
    }
}

impl AppError {
    pub fn record_create(message: impl Into<String>, source: AppError) -> Self {
        AppError::RecordCreate {
            message: message.into(),
            source: Box::new(source),
        }
    }

    pub fn query(message: impl Into<String>, source: AppError) -> Self {
        AppError::Query {
            message: message.into(),
            source: Box::new(source),
        }
    }

    /// 对外的错误代码
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATE_ERR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::NotFound(_) => "NOT_FOUND_ERR",
            AppError::Conflict(_) => "CONFLICT_ERR",
            AppError::RecordCreate { .. } => "RECORD_CREATE_ERR",
            AppError::Query { .. } => "QUERY_ERR",
            AppError::InternalServerErrorWithContext(_) | AppError::MongoError(_) | AppError::Anyhow(_) => {
                "INTERNAL_ERR"
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::RecordCreate { .. }
            | AppError::Query { .. }
            | AppError::InternalServerErrorWithContext(_)
            | AppError::MongoError(_)
            | AppError::Anyhow(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 返回给调用方的消息，服务端内部细节不外泄
    pub fn public_message(&self) -> String {
        match self {
            AppError::RecordCreate { message, .. } | AppError::Query { message, .. } => message.clone(),
            AppError::MongoError(_) | AppError::Anyhow(_) => "internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("❌ {} ({}): {}", self.code(), status.as_u16(), self);
        } else {
            tracing::debug!("⚠️ {} ({}): {}", self.code(), status.as_u16(), self);
        }

        let body = ApiResponse::<()>::error(ErrorResponse::new(self.code(), &self.public_message()));
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_statuses() {
        let cases = [
            (AppError::Validation("x".into()), "VALIDATE_ERR", StatusCode::BAD_REQUEST),
            (AppError::Unauthorized("x".into()), "UNAUTHORIZED", StatusCode::UNAUTHORIZED),
            (AppError::NotFound("x".into()), "NOT_FOUND_ERR", StatusCode::NOT_FOUND),
            (AppError::Conflict("x".into()), "CONFLICT_ERR", StatusCode::CONFLICT),
            (
                AppError::query("failed to query account bills", AppError::InternalServerErrorWithContext("down".into())),
                "QUERY_ERR",
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, code, status) in cases {
            assert_eq!(err.code(), code);
            assert_eq!(err.status_code(), status);
        }
    }

    #[test]
    fn test_wrapped_errors_hide_source_from_caller() {
        let err = AppError::record_create(
            "failed to save account bill",
            AppError::InternalServerErrorWithContext("connection reset by peer".into()),
        );

        assert_eq!(err.public_message(), "failed to save account bill");
        assert!(err.to_string().contains("connection reset by peer"));
    }

    #[tokio::test]
    async fn test_into_response_renders_envelope() {
        let response = AppError::Validation("amount must not be negative".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "VALIDATE_ERR");
        assert_eq!(json["error"]["message"], "amount must not be negative");
    }
}
