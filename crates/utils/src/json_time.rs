//! 接口层的时间格式：`2006-01-02 15:04:05`
//!
//! 用法：`#[serde(with = "utils::json_time")]` 或
//! `#[serde(with = "utils::json_time::option")]`。

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer};

pub const JSON_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(JSON_TIME_FORMAT))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, JSON_TIME_FORMAT)
        .map_err(|e| serde::de::Error::custom(format!("invalid time {:?}, expected {}: {}", raw, JSON_TIME_FORMAT, e)))
}

pub mod option {
    use super::JSON_TIME_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => super::serialize(v, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.is_empty() => NaiveDateTime::parse_from_str(&raw, JSON_TIME_FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Stamp {
        #[serde(with = "crate::json_time")]
        at: NaiveDateTime,
        #[serde(default, with = "crate::json_time::option")]
        maybe: Option<NaiveDateTime>,
    }

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2022, 5, 27).unwrap().and_hms_opt(9, 30, 0).unwrap()
    }

    #[test]
    fn test_serialize_format() {
        let json = serde_json::to_value(Stamp { at: sample(), maybe: None }).unwrap();
        assert_eq!(json["at"], "2022-05-27 09:30:00");
        assert!(json["maybe"].is_null());
    }

    #[test]
    fn test_deserialize() {
        let stamp: Stamp = serde_json::from_str(r#"{"at":"2022-05-27 09:30:00","maybe":"2022-05-27 09:30:00"}"#).unwrap();
        assert_eq!(stamp.at, sample());
        assert_eq!(stamp.maybe, Some(sample()));

        let stamp: Stamp = serde_json::from_str(r#"{"at":"2022-05-27 09:30:00","maybe":""}"#).unwrap();
        assert_eq!(stamp.maybe, None);

        let stamp: Stamp = serde_json::from_str(r#"{"at":"2022-05-27 09:30:00"}"#).unwrap();
        assert_eq!(stamp.maybe, None);
    }

    #[test]
    fn test_rejects_other_formats() {
        assert!(serde_json::from_str::<Stamp>(r#"{"at":"2022-05-27T09:30:00Z"}"#).is_err());
        assert!(serde_json::from_str::<Stamp>(r#"{"at":"27/05/2022"}"#).is_err());
    }
}
