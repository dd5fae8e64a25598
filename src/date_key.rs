use std::{fmt, str::FromStr};

use chrono::NaiveDate;

use crate::parse::Error;

// universalis.com keys its pages by this format, ex. 20250907
const COMPACT_FORMAT: &str = "%Y%m%d";
const ISO_FORMAT: &str = "%Y-%m-%d";

/// The calendar day a readings page is published for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    #[must_use]
    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    #[inline]
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for DateKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let format = match s.len() {
            8 if s.bytes().all(|b| b.is_ascii_digit()) => COMPACT_FORMAT,
            10 => ISO_FORMAT,
            _ => return Err(Error::invalid_date(s)),
        };
        NaiveDate::parse_from_str(s, format)
            .map(Self)
            .map_err(|_| Error::invalid_date(s))
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(COMPACT_FORMAT))
    }
}

impl serde::Serialize for DateKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_string().serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for DateKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compact() {
        let key: DateKey = "20250907".parse().unwrap();
        assert_eq!(key.date(), NaiveDate::from_ymd_opt(2025, 9, 7).unwrap());
        assert_eq!(key.to_string(), "20250907");
    }

    #[test]
    fn test_parse_iso() {
        let key: DateKey = "2025-09-21".parse().unwrap();
        assert_eq!(key.to_string(), "20250921");
    }

    #[test]
    fn test_rejects_garbage() {
        for bad in ["", "2025097", "20251301", "yesterday", "2025/09/07", "+2025090"] {
            assert!(bad.parse::<DateKey>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_serde() {
        let key: DateKey = "20250907".parse().unwrap();
        let serialized = serde_json::to_string(&key).unwrap();
        assert_eq!(serialized, "\"20250907\"");
        let deserialized: DateKey = serde_json::from_str(&serialized).unwrap();
        assert_eq!(key, deserialized);
    }
}
