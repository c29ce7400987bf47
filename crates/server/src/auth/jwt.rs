use crate::auth::models::{AuthConfig, Claims};
use anyhow::{anyhow, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

pub const JWT_ISSUER: &str = "billbook-api";

/// JWT令牌管理器
#[derive(Clone)]
pub struct JwtManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: AuthConfig,
}

impl JwtManager {
    /// 创建新的JWT管理器
    pub fn new(config: AuthConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

        Self {
            encoding_key,
            decoding_key,
            config,
        }
    }

    /// 令牌有效期（秒）
    pub fn expires_in_secs(&self) -> u64 {
        self.config.jwt_expires_in_hours * 3600
    }

    /// 生成JWT令牌
    pub fn generate_token(&self, user_id: &str, name: &str) -> Result<String> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.config.jwt_expires_in_hours as i64);

        let claims = Claims {
            sub: user_id.to_string(),
            name: name.to_string(),
            exp: expires_at.timestamp() as u64,
            iat: now.timestamp() as u64,
            iss: JWT_ISSUER.to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| anyhow!("Failed to generate JWT token: {}", e))
    }

    /// 验证JWT令牌（签名、签发者、过期时间）
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[JWT_ISSUER]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| anyhow!("Invalid JWT token: {}", e))?;

        Ok(token_data.claims)
    }
}

/// JWT令牌提取器
pub struct TokenExtractor;

impl TokenExtractor {
    /// 从Authorization头部提取Bearer令牌
    pub fn extract_bearer_token(auth_header: Option<&str>) -> Option<String> {
        auth_header
            .and_then(|header| header.strip_prefix("Bearer "))
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test_secret_key_for_jwt_testing_only".to_string(),
            jwt_expires_in_hours: 24,
        }
    }

    #[test]
    fn test_jwt_generation_and_verification() {
        let jwt_manager = JwtManager::new(create_test_config());

        let token = jwt_manager.generate_token("6290a0f1c2b3d4e5f6a7b8c9", "tony").unwrap();
        let claims = jwt_manager.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "6290a0f1c2b3d4e5f6a7b8c9");
        assert_eq!(claims.name, "tony");
        assert_eq!(claims.iss, JWT_ISSUER);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_invalid_tokens_are_rejected() {
        let jwt_manager = JwtManager::new(create_test_config());

        assert!(jwt_manager.verify_token("invalid_token").is_err());
        assert!(jwt_manager.verify_token("").is_err());

        let other = JwtManager::new(AuthConfig {
            jwt_secret: "another_secret".to_string(),
            jwt_expires_in_hours: 24,
        });
        let foreign = other.generate_token("u1", "tony").unwrap();
        assert!(jwt_manager.verify_token(&foreign).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let config = create_test_config();
        let jwt_manager = JwtManager::new(config.clone());

        let now = Utc::now().timestamp() as u64;
        let claims = Claims {
            sub: "u1".to_string(),
            name: "tony".to_string(),
            exp: now - 3600,
            iat: now - 7200,
            iss: JWT_ISSUER.to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_ref()),
        )
        .unwrap();

        assert!(jwt_manager.verify_token(&token).is_err());
    }

    #[test]
    fn test_bearer_token_extraction() {
        let token = TokenExtractor::extract_bearer_token(Some("Bearer eyJhbGciOiJIUzI1NiJ9.abc"));
        assert_eq!(token, Some("eyJhbGciOiJIUzI1NiJ9.abc".to_string()));

        assert_eq!(TokenExtractor::extract_bearer_token(Some("Basic dXNlcjpwYXNz")), None);
        assert_eq!(TokenExtractor::extract_bearer_token(Some("Bearer   ")), None);
        assert_eq!(TokenExtractor::extract_bearer_token(None), None);
    }
}
