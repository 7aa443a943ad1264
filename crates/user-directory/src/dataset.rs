//! Loading the startup collection from JSON.
//!
//! A dataset is a JSON array of [`UserRecord`] objects. Files are opened
//! through a capability handle on their parent directory.

use std::collections::HashSet;
use std::io;
use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};

use crate::error::DatasetError;
use crate::record::UserRecord;

/// Parses a dataset from a JSON string.
///
/// Records keep the order they appear in. Identifier uniqueness is checked
/// when the records are handed to [`crate::Directory::new`].
///
/// # Errors
///
/// Returns [`DatasetError::Parse`] if the JSON is malformed or any record is
/// missing a field or has a field of the wrong type.
///
/// # Example
///
/// ```
/// use user_directory::parse_records;
///
/// let records = parse_records(r#"[{"id": 1, "first": "Ada", "last": "Lovelace",
///     "email": "ada@example.com", "dob": "1815-12-10", "gender": "female",
///     "country": "UK", "picture": ""}]"#).expect("valid dataset");
///
/// assert_eq!(records.len(), 1);
/// ```
pub fn parse_records(json: &str) -> Result<Vec<UserRecord>, DatasetError> {
    serde_json::from_str(json).map_err(|e| DatasetError::Parse {
        message: e.to_string(),
    })
}

/// Loads a dataset from a JSON file.
///
/// # Errors
///
/// Returns [`DatasetError::Io`] if the file cannot be opened or is not valid
/// UTF-8, and [`DatasetError::Parse`] if its contents do not parse.
pub fn load_records(path: &Path) -> Result<Vec<UserRecord>, DatasetError> {
    let io_error = |message: String| DatasetError::Io {
        path: path.to_path_buf(),
        message,
    };

    let parent = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| io_error("dataset path must be a file".to_owned()))?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|e| io_error(e.to_string()))?;
    let contents = dir
        .read_to_string(Path::new(file_name))
        .map_err(|e: io::Error| io_error(e.to_string()))?;

    parse_records(&contents)
}

/// Rejects a collection in which any identifier appears twice.
pub(crate) fn ensure_unique_ids(records: &[UserRecord]) -> Result<(), DatasetError> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .iter()
        .find(|record| !seen.insert(record.id))
        .map_or(Ok(()), |duplicate| {
            Err(DatasetError::DuplicateId { id: duplicate.id })
        })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::record::UserId;

    const TWO_RECORDS: &str = r#"[
        {"id": 1, "first": "Ada", "last": "Lovelace", "email": "ada@example.com",
         "description": "Analyst", "dob": "1815-12-10", "gender": "female",
         "country": "United Kingdom", "picture": "https://example.com/ada.jpg"},
        {"id": 2, "first": "Alan", "last": "Turing", "email": "alan@example.com",
         "dob": "1912-06-23", "gender": "male", "country": "United Kingdom",
         "picture": "https://example.com/alan.jpg"}
    ]"#;

    #[test]
    fn parses_records_in_order() {
        let records = parse_records(TWO_RECORDS).expect("valid dataset");

        let ids: Vec<UserId> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![UserId::new(1), UserId::new(2)]);
        assert_eq!(records.first().map(|r| r.description.as_str()), Some("Analyst"));
    }

    #[test]
    fn empty_array_is_an_empty_dataset() {
        assert_eq!(parse_records("[]"), Ok(Vec::new()));
    }

    #[rstest]
    #[case::malformed_json("not json")]
    #[case::object_instead_of_array(r#"{"id": 1}"#)]
    #[case::missing_email(
        r#"[{"id": 1, "first": "A", "last": "B", "dob": "2000-01-01", "gender": "x", "country": "y", "picture": "z"}]"#
    )]
    #[case::invalid_dob(
        r#"[{"id": 1, "first": "A", "last": "B", "email": "e", "dob": "01/02/2000", "gender": "x", "country": "y", "picture": "z"}]"#
    )]
    #[case::string_id(
        r#"[{"id": "one", "first": "A", "last": "B", "email": "e", "dob": "2000-01-01", "gender": "x", "country": "y", "picture": "z"}]"#
    )]
    fn rejects_malformed_datasets(#[case] json: &str) {
        assert!(matches!(
            parse_records(json),
            Err(DatasetError::Parse { .. })
        ));
    }

    #[test]
    fn detects_duplicate_ids() {
        let mut records = parse_records(TWO_RECORDS).expect("valid dataset");
        for record in &mut records {
            record.id = UserId::new(7);
        }

        assert_eq!(
            ensure_unique_ids(&records),
            Err(DatasetError::DuplicateId { id: UserId::new(7) })
        );
    }

    #[test]
    fn unique_ids_pass() {
        let records = parse_records(TWO_RECORDS).expect("valid dataset");
        assert_eq!(ensure_unique_ids(&records), Ok(()));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let path = Path::new("target/user-directory-tests/does-not-exist.json");
        assert!(matches!(
            load_records(path),
            Err(DatasetError::Io { .. })
        ));
    }
}
