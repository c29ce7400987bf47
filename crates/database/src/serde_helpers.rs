use serde::{Serialize, Serializer};

/// 将u64强制序列化为BSON数值类型（而非NumberLong包装）
///
/// BSON没有无符号整数，超过 i64::MAX 的值会序列化失败。
pub fn serialize_u64_as_number<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if *value <= i32::MAX as u64 {
        (*value as i32).serialize(serializer)
    } else if *value <= i64::MAX as u64 {
        (*value as i64).serialize(serializer)
    } else {
        value.serialize(serializer)
    }
}
