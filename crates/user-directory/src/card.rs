//! Presentation projection of a record.
//!
//! A card carries what a collapsible list row shows: the picture and full name
//! in its header and the derived age plus display fields in its body.

use serde::Serialize;

use crate::age::age;
use crate::record::{UserId, UserRecord};

/// Display-ready view of one directory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCard {
    /// Identifier used to start edits and deletes from the row.
    pub id: UserId,
    /// Header text: `first` and `last` joined by a space.
    pub full_name: String,
    /// Avatar image URL.
    pub picture: String,
    /// Age in whole years on the reference date; negative for future births.
    pub age: i32,
    /// Display-only gender label.
    pub gender: String,
    /// Display-only country name.
    pub country: String,
    /// Contact address.
    pub email: String,
    /// Free-form notes.
    pub description: String,
}

impl UserCard {
    /// Builds a card with the age evaluated on `today`.
    #[must_use]
    pub fn from_record(record: &UserRecord, today: chrono::NaiveDate) -> Self {
        Self {
            id: record.id,
            full_name: record.full_name(),
            picture: record.picture.clone(),
            age: age(record.dob, today),
            gender: record.gender.clone(),
            country: record.country.clone(),
            email: record.email.clone(),
            description: record.description.clone(),
        }
    }
}
