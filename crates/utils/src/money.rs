//! 金额编解码
//!
//! 存储层统一使用"分"为单位的 `u64`，只在接口边界做十进制字符串的解析和格式化，
//! 全程使用 `rust_decimal`，不经过浮点数。

use crate::AppError;
use rust_decimal::prelude::*;
use thiserror::Error;

/// 1 元 = 100 分
pub const MINOR_UNIT_SCALE: u32 = 2;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("amount must be a valid number")]
    Invalid,

    #[error("amount must not be negative")]
    Negative,

    #[error("amount is too large")]
    Overflow,
}

impl From<AmountError> for AppError {
    fn from(err: AmountError) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// 可入库的最大金额（分），受 BSON Int64 限制
pub const MAX_MINOR_UNITS: u64 = i64::MAX as u64;

/// 十进制金额字符串 -> 分
///
/// 只接受 `[+-]digits[.digits]`。超过两位的小数部分直接截断（不四舍五入），
/// `"12.345"` 得到 `1234`。
pub fn parse_minor_units(raw: &str) -> Result<u64, AmountError> {
    let (negative, unsigned) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (unsigned, ""),
    };

    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if integer.is_empty() || !is_digits(integer) || !is_digits(fraction) || unsigned.ends_with('.') {
        return Err(AmountError::Invalid);
    }

    // "-0" / "-0.00" 不算负数
    if negative && integer.bytes().chain(fraction.bytes()).any(|b| b != b'0') {
        return Err(AmountError::Negative);
    }

    // 先按字符截掉分以下的位数，避免高精度输入在解析时被舍入
    let cents_fraction = &fraction[..fraction.len().min(MINOR_UNIT_SCALE as usize)];
    let truncated = if cents_fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{}.{}", integer, cents_fraction)
    };

    Decimal::from_str_exact(&truncated)
        .ok()
        .and_then(|amount| amount.checked_mul(Decimal::ONE_HUNDRED))
        .and_then(|cents| cents.to_u64())
        .filter(|cents| *cents <= MAX_MINOR_UNITS)
        .ok_or(AmountError::Overflow)
}

/// 分 -> 固定两位小数的字符串，`1230` 得到 `"12.30"`
pub fn format_minor_units(minor_units: u64) -> String {
    Decimal::from_i128_with_scale(i128::from(minor_units), MINOR_UNIT_SCALE).to_string()
}
