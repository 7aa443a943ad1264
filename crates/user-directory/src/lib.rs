//! In-memory state for a searchable, editable directory of people.
//!
//! The crate owns an ordered collection of [`UserRecord`] values loaded once
//! at startup and exposes the whole mutation surface through [`Directory`]:
//! search filtering, single-record edit sessions, and a two-step delete
//! protocol driven by [`DeleteToken`] confirmations. Nothing is persisted;
//! state lives for as long as the owning `Directory` value.
//!
//! # Overview
//!
//! - Loading the startup collection from JSON ([`parse_records`],
//!   [`load_records`]) or generating a deterministic sample
//!   ([`generate_sample_users`])
//! - Case-insensitive full-name search ([`Directory::filtered_view`])
//! - Validated edits that replace all editable fields or none
//!   ([`Directory::commit_edit`])
//! - Confirmed, idempotent deletion ([`Directory::request_delete`],
//!   [`Directory::confirm_delete`])
//! - Derived ages for display ([`age`], [`UserCard`])
//!
//! # Example
//!
//! ```
//! use user_directory::{Directory, EditFields, UserId, parse_records};
//!
//! let json = r#"[
//!     {"id": 1, "first": "Ada", "last": "Lovelace", "email": "ada@example.com",
//!      "dob": "1815-12-10", "gender": "female", "country": "United Kingdom",
//!      "picture": "https://example.com/ada.jpg"},
//!     {"id": 2, "first": "Alan", "last": "Turing", "email": "alan@example.com",
//!      "dob": "1912-06-23", "gender": "male", "country": "United Kingdom",
//!      "picture": "https://example.com/alan.jpg"}
//! ]"#;
//!
//! let mut directory = Directory::new(parse_records(json).expect("valid dataset"))
//!     .expect("unique ids");
//! directory.set_search_term("LOVE");
//! assert_eq!(directory.filtered_view().len(), 1);
//!
//! let session = directory.begin_edit(UserId::new(2)).expect("user exists");
//! let fields = EditFields {
//!     description: Some("Codebreaker".to_owned()),
//!     ..session.into_fields()
//! };
//! directory.commit_edit(UserId::new(2), fields).expect("valid edit");
//!
//! let token = directory.request_delete(UserId::new(1));
//! directory.confirm_delete(token).expect("pending request");
//! assert_eq!(directory.len(), 1);
//! ```

mod age;
mod card;
pub mod config;
mod dataset;
mod delete;
mod directory;
mod edit;
mod error;
mod generator;
mod record;
mod search;
#[cfg(test)]
mod test_support;

pub use age::{age, age_on_clock};
pub use card::UserCard;
pub use dataset::{load_records, parse_records};
pub use delete::{DeleteOutcome, DeleteToken};
pub use directory::Directory;
pub use edit::{EditFields, EditSession, RequiredField};
pub use error::{DatasetError, DirectoryError, GenerationError, ValidationError};
pub use generator::{SampleSpec, generate_sample_users};
pub use record::{UserId, UserRecord};
pub use search::matches_full_name;
