pub mod account_bill_service;
