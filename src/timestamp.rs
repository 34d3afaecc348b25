//! Timestamp codec for the gateway's two wire formats.
//!
//! The gateway emits RFC 3339 timestamps on some fields and naive
//! `2026-01-20T11:57:31`-style values (no offset, no fractional seconds)
//! on others. Both parse into the same normalized instant; serialization
//! always emits the timezone-qualified RFC 3339 form so consumers see one
//! unambiguous format.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, PrimitiveDateTime};

/// An instant as exchanged with the gateway, or the unset value.
///
/// The unset value deserializes from JSON `null`, the empty string, and the
/// literal text `"null"`, and serializes back to JSON `null`, never to an
/// empty or malformed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp(Option<OffsetDateTime>);

impl Timestamp {
    /// The unset timestamp.
    pub const UNSET: Timestamp = Timestamp(None);

    /// The current instant in UTC.
    pub fn now() -> Self {
        Timestamp(Some(OffsetDateTime::now_utc()))
    }

    /// The wrapped instant, or `None` when unset.
    pub fn datetime(&self) -> Option<OffsetDateTime> {
        self.0
    }

    /// Whether this timestamp holds an instant.
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Parse a wire value.
    ///
    /// Empty input and the literal `null` yield [`Timestamp::UNSET`]
    /// without error. Otherwise RFC 3339 is tried first, then the naive
    /// offset-less form interpreted as UTC.
    pub fn parse(text: &str) -> Result<Self, TimestampParseError> {
        if text.is_empty() || text == "null" {
            return Ok(Timestamp::UNSET);
        }
        if let Ok(datetime) = OffsetDateTime::parse(text, &Rfc3339) {
            return Ok(Timestamp(Some(datetime)));
        }
        let naive = time::macros::format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second]"
        );
        PrimitiveDateTime::parse(text, naive)
            .map(|datetime| Timestamp(Some(datetime.assume_utc())))
            .map_err(|_| TimestampParseError {
                value: text.to_owned(),
            })
    }

    /// Canonical RFC 3339 text, or `None` when unset.
    pub fn format(&self) -> Option<String> {
        self.0.and_then(|datetime| datetime.format(&Rfc3339).ok())
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Timestamp::UNSET
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(datetime: OffsetDateTime) -> Self {
        Timestamp(Some(datetime))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format() {
            Some(text) => f.write_str(&text),
            None => f.write_str("null"),
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(datetime) => {
                let text = datetime.format(&Rfc3339).map_err(serde::ser::Error::custom)?;
                serializer.serialize_str(&text)
            }
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) => Timestamp::parse(&text).map_err(serde::de::Error::custom),
            None => Ok(Timestamp::UNSET),
        }
    }
}

/// The text matched neither of the gateway's timestamp formats.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized timestamp: {value:?}")]
pub struct TimestampParseError {
    /// The input that failed to parse.
    pub value: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use serde::{Deserialize, Serialize};
    use time::macros::datetime;

    use super::*;

    #[test]
    fn parses_rfc3339() {
        let parsed = Timestamp::parse("2026-01-20T11:57:31Z").unwrap();
        assert_eq!(parsed.datetime(), Some(datetime!(2026-01-20 11:57:31 UTC)));
    }

    #[test]
    fn naive_form_is_read_as_utc() {
        let naive = Timestamp::parse("2026-01-20T11:57:31").unwrap();
        let qualified = Timestamp::parse("2026-01-20T11:57:31Z").unwrap();
        assert_eq!(naive, qualified);
    }

    #[test]
    fn offset_input_keeps_the_instant() {
        let offset = Timestamp::parse("2026-01-20T14:57:31+03:00").unwrap();
        let utc = Timestamp::parse("2026-01-20T11:57:31Z").unwrap();
        assert_eq!(offset, utc);
    }

    #[test]
    fn null_and_empty_are_unset() {
        assert_eq!(Timestamp::parse("null").unwrap(), Timestamp::UNSET);
        assert_eq!(Timestamp::parse("").unwrap(), Timestamp::UNSET);
        assert!(!Timestamp::UNSET.is_set());
    }

    #[test]
    fn unset_serializes_to_json_null() {
        let value = serde_json::to_value(Timestamp::UNSET).unwrap();
        assert_eq!(value, serde_json::Value::Null);
        assert_eq!(Timestamp::UNSET.format(), None);
    }

    #[test]
    fn canonical_round_trip() {
        let original = Timestamp::from(datetime!(2026-01-20 11:57:31 UTC));
        let text = original.format().unwrap();
        assert_eq!(text, "2026-01-20T11:57:31Z");
        assert_eq!(Timestamp::parse(&text).unwrap(), original);
    }

    #[test]
    fn parse_failure_keeps_the_input() {
        let err = Timestamp::parse("20/01/2026").unwrap_err();
        assert_eq!(err.value, "20/01/2026");
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    struct Holder {
        at: Timestamp,
    }

    #[test]
    fn json_null_and_missing_field_deserialize_as_unset() {
        let from_null: Holder = serde_json::from_str(r#"{"at":null}"#).unwrap();
        assert_eq!(from_null.at, Timestamp::UNSET);

        let from_missing: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(from_missing.at, Timestamp::UNSET);
    }

    #[test]
    fn embedded_naive_value_deserializes() {
        let holder: Holder = serde_json::from_str(r#"{"at":"2026-01-20T11:57:31"}"#).unwrap();
        assert_eq!(holder.at.datetime(), Some(datetime!(2026-01-20 11:57:31 UTC)));
    }
}
