use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 错误响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,

    /// 错误消息
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}

/// 统一响应包装器
///
/// 成功时 `error` 为 null，失败时携带错误代码和消息。
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// 是否成功
    pub success: bool,

    /// 响应数据
    pub data: Option<T>,

    /// 错误信息
    pub error: Option<ErrorResponse>,

    /// 时间戳
    pub timestamp: i64,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }

    pub fn error(error: ErrorResponse) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

impl ApiResponse<()> {
    /// 无数据的成功响应
    pub fn ok() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope_has_null_error_and_data() {
        let json = serde_json::to_value(ApiResponse::ok()).unwrap();

        assert_eq!(json["success"], true);
        assert!(json["data"].is_null());
        assert!(json["error"].is_null());
        assert!(json["timestamp"].is_i64());
    }

    #[test]
    fn test_error_envelope() {
        let resp: ApiResponse<Vec<String>> = ApiResponse::error(ErrorResponse::new("VALIDATE_ERR", "bad amount"));
        let json = serde_json::to_value(resp).unwrap();

        assert_eq!(json["success"], false);
        assert!(json["data"].is_null());
        assert_eq!(json["error"]["code"], "VALIDATE_ERR");
        assert_eq!(json["error"]["message"], "bad amount");
    }
}
