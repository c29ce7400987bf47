use utils::{AppError, AppResult};

/// 使用 argon2 对明文密码加盐哈希
pub fn hash_password(plain: &str) -> AppResult<String> {
    let salt: [u8; 16] = rand::random();

    argon2::hash_encoded(plain.as_bytes(), &salt, &argon2::Config::default())
        .map_err(|e| AppError::InternalServerErrorWithContext(format!("Failed to hash password: {}", e)))
}

/// 校验明文密码与哈希是否匹配，哈希格式错误时视为不匹配
pub fn verify_password(encoded: &str, plain: &str) -> bool {
    argon2::verify_encoded(encoded, plain.as_bytes()).unwrap_or(false)
}

/// 在阻塞线程池中计算哈希，避免占用 tokio 工作线程
pub async fn hash_password_blocking(plain: String) -> AppResult<String> {
    tokio::task::spawn_blocking(move || hash_password(&plain))
        .await
        .map_err(|e| AppError::InternalServerErrorWithContext(format!("Password hashing task failed: {}", e)))?
}

/// 在阻塞线程池中校验密码
pub async fn verify_password_blocking(encoded: String, plain: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || verify_password(&encoded, &plain))
        .await
        .map_err(|e| AppError::InternalServerErrorWithContext(format!("Password verification task failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        },
        time::Duration,
    };

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("secret1").unwrap();

        assert_ne!(hash, "secret1");
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password(&hash, "secret1"));
        assert!(!verify_password(&hash, "secret2"));
    }

    #[test]
    fn test_same_password_gets_different_salt() {
        assert_ne!(hash_password("secret1").unwrap(), hash_password("secret1").unwrap());
    }

    #[test]
    fn test_malformed_hash_does_not_verify() {
        assert!(!verify_password("not-a-hash", "secret1"));
        assert!(!verify_password("", ""));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_hashing_leaves_runtime_free() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let ticker = {
            let ticks = ticks.clone();
            tokio::spawn(async move {
                loop {
                    ticks.fetch_add(1, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(1)).await;
                }
            })
        };

        let hash = hash_password_blocking("secret1".to_string()).await.unwrap();
        // 单线程运行时：哈希期间其他任务仍被调度
        assert!(ticks.load(Ordering::SeqCst) > 0);

        assert!(verify_password_blocking(hash.clone(), "secret1".to_string()).await.unwrap());
        assert!(!verify_password_blocking(hash, "secret2".to_string()).await.unwrap());

        ticker.abort();
    }
}
