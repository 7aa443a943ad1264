//! Full-name search matching.

use crate::record::UserRecord;

/// Returns `true` when `record`'s full name contains `term`, ignoring case.
///
/// The full name is `first` and `last` joined by a single space, so a term
/// spanning both names ("ada love") matches. An empty term matches every
/// record. The term is used as given, without trimming.
///
/// # Example
///
/// ```
/// use user_directory::{UserRecord, matches_full_name};
///
/// let record: UserRecord = serde_json::from_str(r#"{"id": 1, "first": "Ada",
///     "last": "Lovelace", "email": "ada@example.com", "dob": "1815-12-10",
///     "gender": "female", "country": "UK", "picture": ""}"#).expect("valid");
///
/// assert!(matches_full_name(&record, "A LOVE"));
/// assert!(matches_full_name(&record, ""));
/// assert!(!matches_full_name(&record, "turing"));
/// ```
#[must_use]
pub fn matches_full_name(record: &UserRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    record
        .full_name()
        .to_lowercase()
        .contains(&term.to_lowercase())
}
