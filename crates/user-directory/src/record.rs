//! Directory record types.
//!
//! A [`UserRecord`] mirrors the shape of the bundled dataset entries. Only the
//! four editable fields change after load; everything else is display data.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stable identifier of a directory record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// One person in the directory.
///
/// ## Invariants
/// - `id` never changes once loaded.
/// - `first`, `last` and `email` are non-empty after any committed edit.
///
/// # Example
///
/// ```
/// use user_directory::UserRecord;
///
/// let json = r#"{"id": 7, "first": "Grace", "last": "Hopper",
///     "email": "grace@example.com", "dob": "1906-12-09", "gender": "female",
///     "country": "United States", "picture": "https://example.com/grace.jpg"}"#;
/// let record: UserRecord = serde_json::from_str(json).expect("valid record");
///
/// assert_eq!(record.full_name(), "Grace Hopper");
/// assert!(record.description.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique identifier.
    pub id: UserId,
    /// Given name.
    pub first: String,
    /// Family name.
    pub last: String,
    /// Contact address; only presence is checked.
    pub email: String,
    /// Free-form notes.
    #[serde(default)]
    pub description: String,
    /// Date of birth, used to derive the displayed age.
    pub dob: NaiveDate,
    /// Display-only gender label.
    pub gender: String,
    /// Display-only country name.
    pub country: String,
    /// Avatar image URL.
    pub picture: String,
}

impl UserRecord {
    /// Returns `first` and `last` joined by a single space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UserRecord {
        UserRecord {
            id: UserId::new(3),
            first: "Ada".to_owned(),
            last: "Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            description: String::new(),
            dob: NaiveDate::from_ymd_opt(1815, 12, 10).expect("valid date"),
            gender: "female".to_owned(),
            country: "United Kingdom".to_owned(),
            picture: "https://example.com/ada.jpg".to_owned(),
        }
    }

    #[test]
    fn user_id_serializes_as_bare_number() {
        let json = serde_json::to_string(&UserId::new(42)).expect("serialize");
        assert_eq!(json, "42");
    }

    #[test]
    fn user_id_displays_raw_value() {
        assert_eq!(UserId::from(9).to_string(), "9");
    }

    #[test]
    fn full_name_joins_with_single_space() {
        assert_eq!(sample().full_name(), "Ada Lovelace");
    }

    #[test]
    fn dob_serializes_as_iso_date() {
        let json = serde_json::to_value(sample()).expect("serialize");
        assert_eq!(json["dob"], "1815-12-10");
        assert_eq!(json["id"], 3);
    }

    #[test]
    fn missing_description_defaults_to_empty() {
        let json = r#"{"id": 1, "first": "A", "last": "B", "email": "a@b.c",
            "dob": "2000-01-01", "gender": "x", "country": "y", "picture": "z"}"#;
        let record: UserRecord = serde_json::from_str(json).expect("deserialize");
        assert_eq!(record.description, "");
    }
}
