//! Error types for the user-directory crate.
//!
//! Directory operations surface [`DirectoryError`]; loading and generating the
//! startup collection surface [`DatasetError`] and [`GenerationError`]. All of
//! them are recoverable and intended for inline, user-facing messages.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::delete::DeleteToken;
use crate::edit::RequiredField;
use crate::record::UserId;

/// An edit was submitted with one or more required fields blank.
///
/// `missing` lists the offending fields in form order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required field(s): {}", FieldList(.missing))]
pub struct ValidationError {
    /// Required fields that were empty after trimming.
    pub missing: Vec<RequiredField>,
}

struct FieldList<'a>(&'a [RequiredField]);

impl fmt::Display for FieldList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields = self.0.iter();
        if let Some(first) = fields.next() {
            write!(f, "{first}")?;
        }
        for field in fields {
            write!(f, ", {field}")?;
        }
        Ok(())
    }
}

/// Errors returned by [`crate::Directory`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// The referenced record does not exist.
    #[error("user {id} not found")]
    NotFound {
        /// Identifier that was looked up.
        id: UserId,
    },

    /// The submitted edit failed required-field validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The delete token was never issued, or was already confirmed or cancelled.
    #[error("no pending delete request for token {token}")]
    UnknownDeleteToken {
        /// Token that was presented.
        token: DeleteToken,
    },
}

/// Errors that can occur while loading the startup collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read dataset at '{path}': {message}")]
    Io {
        /// Path to the dataset file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The dataset JSON is malformed or a record has the wrong shape.
    #[error("invalid dataset JSON: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
    },

    /// Two records share an identifier.
    #[error("duplicate user id {id} in dataset")]
    DuplicateId {
        /// The repeated identifier.
        id: UserId,
    },
}

/// Errors that can occur while generating sample users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// A generated birth date fell outside the calendar.
    #[error("generated an invalid birth date {year}-{month:02}-{day:02}")]
    InvalidBirthDate {
        /// Year component.
        year: i32,
        /// Month component.
        month: u32,
        /// Day component.
        day: u32,
    },
}
