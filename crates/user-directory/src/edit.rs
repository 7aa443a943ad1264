//! Edit form content and required-field validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::record::{UserId, UserRecord};

/// A field that must be non-blank for an edit to be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequiredField {
    /// Given name.
    First,
    /// Family name.
    Last,
    /// Email address.
    Email,
}

impl RequiredField {
    /// Returns the dataset field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Last => "last",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values submitted from the edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditFields {
    /// Given name.
    pub first: String,
    /// Family name.
    pub last: String,
    /// Email address.
    pub email: String,
    /// Optional notes; `None` clears the description.
    #[serde(default)]
    pub description: Option<String>,
}

impl EditFields {
    /// Captures the editable fields of an existing record.
    #[must_use]
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            first: record.first.clone(),
            last: record.last.clone(),
            email: record.email.clone(),
            description: Some(record.description.clone()),
        }
    }

    /// Checks every required field and reports all blank ones at once.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] naming each required field that is empty
    /// after trimming.
    ///
    /// # Example
    ///
    /// ```
    /// use user_directory::{EditFields, RequiredField};
    ///
    /// let fields = EditFields {
    ///     first: "Ada".to_owned(),
    ///     last: "  ".to_owned(),
    ///     email: String::new(),
    ///     description: None,
    /// };
    /// let err = fields.validate().expect_err("blank fields");
    /// assert_eq!(err.missing, vec![RequiredField::Last, RequiredField::Email]);
    /// ```
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<RequiredField> = [
            (RequiredField::First, &self.first),
            (RequiredField::Last, &self.last),
            (RequiredField::Email, &self.email),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }

    /// Writes the fields onto `record` exactly as submitted.
    ///
    /// Trimming only decides blankness in [`Self::validate`]; stored values
    /// keep their surrounding whitespace. Callers validate first.
    pub(crate) fn apply_to(self, record: &mut UserRecord) {
        record.first = self.first;
        record.last = self.last;
        record.email = self.email;
        record.description = self.description.unwrap_or_default();
    }
}

/// The record currently open for editing and its initial form content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    id: UserId,
    fields: EditFields,
}

impl EditSession {
    pub(crate) fn open(record: &UserRecord) -> Self {
        Self {
            id: record.id,
            fields: EditFields::from_record(record),
        }
    }

    /// Returns the identifier of the record under edit.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the form content captured when the session opened.
    #[must_use]
    pub const fn fields(&self) -> &EditFields {
        &self.fields
    }

    /// Consumes the session, yielding the form content for modification.
    #[must_use]
    pub fn into_fields(self) -> EditFields {
        self.fields
    }
}
