pub mod account_bill_dto;
pub mod user_dto;
