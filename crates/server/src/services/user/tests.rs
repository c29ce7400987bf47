use super::user_service::{UserService, UserServiceTrait};
use crate::dtos::user_dto::RegisterUserRequest;
use database::InMemoryDatabase;
use std::sync::Arc;

fn service() -> UserService {
    UserService::new(Arc::new(InMemoryDatabase::new()))
}

fn register_request(name: &str, password: &str) -> RegisterUserRequest {
    RegisterUserRequest {
        name: name.to_string(),
        password: password.to_string(),
        birthday: None,
    }
}

#[tokio::test]
async fn test_register_and_authenticate() {
    let service = service();

    let id = service.register(register_request("tony", "secret1")).await.unwrap();
    let user = service.authenticate("tony", "secret1").await.unwrap();

    assert_eq!(user.id_hex().unwrap(), id);
    // 存储的是哈希而非明文
    assert_ne!(user.password, "secret1");
}

#[tokio::test]
async fn test_register_validates_fields() {
    let service = service();

    let err = service.register(register_request("tony", "123")).await.unwrap_err();

    assert_eq!(err.code(), "VALIDATE_ERR");
    assert!(err.to_string().contains("password"));
}

#[tokio::test]
async fn test_duplicate_name_is_conflict() {
    let service = service();
    service.register(register_request("tony", "secret1")).await.unwrap();

    let err = service.register(register_request("tony", "secret2")).await.unwrap_err();

    assert_eq!(err.code(), "CONFLICT_ERR");
}

#[tokio::test]
async fn test_wrong_password_and_unknown_user_look_the_same() {
    let service = service();
    service.register(register_request("tony", "secret1")).await.unwrap();

    let wrong_password = service.authenticate("tony", "secret2").await.unwrap_err();
    let unknown_user = service.authenticate("nobody", "secret1").await.unwrap_err();

    assert_eq!(wrong_password.code(), "UNAUTHORIZED");
    assert_eq!(wrong_password.to_string(), unknown_user.to_string());
}

#[tokio::test]
async fn test_user_info() {
    let service = service();
    let id = service.register(register_request("tony", "secret1")).await.unwrap();

    let info = service.get_user_info(&id).await.unwrap();
    assert_eq!(info.name, "tony");
    assert_eq!(info.id, id);

    let err = service.get_user_info("000000000000000000000000").await.unwrap_err();
    assert_eq!(err.code(), "NOT_FOUND_ERR");
}
