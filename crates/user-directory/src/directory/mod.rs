//! Directory state manager.
//!
//! [`Directory`] exclusively owns the record collection and funnels every
//! mutation through its methods. Callers keep shared borrows for reads; the
//! single `&mut` writer at a time gives the totally ordered, run-to-completion
//! behaviour the UI layer relies on.

use std::fmt;
use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::{debug, info, warn};

use crate::card::UserCard;
use crate::dataset::{ensure_unique_ids, parse_records};
use crate::delete::{DeleteOutcome, DeleteToken, PendingDeletes};
use crate::edit::{EditFields, EditSession};
use crate::error::{DatasetError, DirectoryError};
use crate::record::{UserId, UserRecord};
use crate::search::matches_full_name;

/// In-memory directory of people with search, edit and delete state.
///
/// ## Invariants
/// - Record identifiers are unique.
/// - Records stay in load order; only deletion changes membership.
/// - At most one record is open for editing.
#[derive(Clone)]
pub struct Directory {
    records: Vec<UserRecord>,
    search_term: String,
    editing: Option<UserId>,
    pending_deletes: PendingDeletes,
    clock: Arc<dyn Clock>,
}

impl Directory {
    /// Builds a directory over `records` using the system clock for ages.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::DuplicateId`] if two records share an id.
    pub fn new(records: Vec<UserRecord>) -> Result<Self, DatasetError> {
        Self::with_clock(records, Arc::new(DefaultClock))
    }

    /// Builds a directory that derives ages from `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::DuplicateId`] if two records share an id.
    pub fn with_clock(
        records: Vec<UserRecord>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, DatasetError> {
        ensure_unique_ids(&records)?;
        debug!(user_count = records.len(), "directory loaded");
        Ok(Self {
            records,
            search_term: String::new(),
            editing: None,
            pending_deletes: PendingDeletes::default(),
            clock,
        })
    }

    /// Parses a JSON dataset and builds a directory over it.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the JSON does not parse or ids repeat.
    pub fn from_dataset_json(json: &str) -> Result<Self, DatasetError> {
        Self::new(parse_records(json)?)
    }

    /// All records in load order, ignoring the search term.
    #[must_use]
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: UserId) -> Option<&UserRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when every record has been deleted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The current search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Replaces the search term. Any text is accepted, including empty.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        debug!(search_term = %self.search_term, "search term updated");
    }

    /// Records whose full name contains the search term, ignoring case.
    ///
    /// Order follows the underlying collection; an empty term returns every
    /// record.
    #[must_use]
    pub fn filtered_view(&self) -> Vec<&UserRecord> {
        self.records
            .iter()
            .filter(|record| matches_full_name(record, &self.search_term))
            .collect()
    }

    /// Display cards for the filtered view, with ages as of the clock's date.
    #[must_use]
    pub fn cards(&self) -> Vec<UserCard> {
        let today = self.clock.local().date_naive();
        self.filtered_view()
            .into_iter()
            .map(|record| UserCard::from_record(record, today))
            .collect()
    }

    /// Identifier of the record currently open for editing, if any.
    #[must_use]
    pub const fn editing(&self) -> Option<UserId> {
        self.editing
    }

    /// Opens `id` for editing and returns its current editable fields.
    ///
    /// Any previously open session is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] if no record has this id.
    pub fn begin_edit(&mut self, id: UserId) -> Result<EditSession, DirectoryError> {
        let record = self.get(id).ok_or(DirectoryError::NotFound { id })?;
        let session = EditSession::open(record);
        self.editing = Some(id);
        debug!(user_id = %id, "edit session opened");
        Ok(session)
    }

    /// Validates `fields` and writes them onto record `id`.
    ///
    /// Only `first`, `last`, `email` and `description` change, stored exactly
    /// as submitted. On success the edit session for `id` is closed; a session
    /// open on another record stays open. On failure nothing is modified.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] if a required field is blank,
    /// checked before anything else, and [`DirectoryError::NotFound`] if the
    /// record no longer exists.
    pub fn commit_edit(
        &mut self,
        id: UserId,
        fields: EditFields,
    ) -> Result<&UserRecord, DirectoryError> {
        fields.validate()?;

        let Some(record) = self.records.iter_mut().find(|record| record.id == id) else {
            warn!(user_id = %id, "edit committed for missing user");
            return Err(DirectoryError::NotFound { id });
        };

        fields.apply_to(record);
        if self.editing == Some(id) {
            self.editing = None;
        }
        info!(user_id = %id, "user updated");
        Ok(&*record)
    }

    /// Closes the edit session without applying changes. Idempotent.
    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.editing.take() {
            debug!(user_id = %id, "edit session cancelled");
        }
    }

    /// Starts a delete that takes effect only once its token is confirmed.
    ///
    /// The id is not checked here; confirming a request for an absent record
    /// is a no-op.
    #[must_use = "the delete only happens once the token is confirmed"]
    pub fn request_delete(&mut self, id: UserId) -> DeleteToken {
        let token = self.pending_deletes.request(id);
        debug!(user_id = %id, %token, "delete requested");
        token
    }

    /// Commits the delete request behind `token`.
    ///
    /// Every other pending request for the same id is settled with it, so
    /// those tokens become unknown. Removing the record that is open for
    /// editing also closes the edit session.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::UnknownDeleteToken`] if `token` was never
    /// issued or has already been confirmed, cancelled or settled.
    pub fn confirm_delete(&mut self, token: DeleteToken) -> Result<DeleteOutcome, DirectoryError> {
        let Some(id) = self.pending_deletes.take(token) else {
            warn!(%token, "delete confirmed with unknown token");
            return Err(DirectoryError::UnknownDeleteToken { token });
        };
        let settled = self.pending_deletes.settle(id);
        if settled > 0 {
            debug!(user_id = %id, settled, "sibling delete requests settled");
        }

        let Some(index) = self.records.iter().position(|record| record.id == id) else {
            debug!(user_id = %id, "delete confirmed for absent user");
            return Ok(DeleteOutcome::AlreadyAbsent { id });
        };

        let removed = self.records.remove(index);
        if self.editing == Some(id) {
            self.editing = None;
            debug!(user_id = %id, "edit session closed by delete");
        }
        info!(user_id = %id, "user deleted");
        Ok(DeleteOutcome::Removed(removed))
    }

    /// Discards the delete request behind `token`.
    ///
    /// Returns `true` if a pending request was discarded. Idempotent.
    pub fn cancel_delete(&mut self, token: DeleteToken) -> bool {
        let discarded = self.pending_deletes.take(token).is_some();
        if discarded {
            debug!(%token, "delete cancelled");
        }
        discarded
    }

    /// Number of delete requests awaiting confirmation.
    #[must_use]
    pub fn pending_deletes(&self) -> usize {
        self.pending_deletes.len()
    }
}

impl fmt::Debug for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Directory")
            .field("records", &self.records)
            .field("search_term", &self.search_term)
            .field("editing", &self.editing)
            .field("pending_deletes", &self.pending_deletes)
            .finish_non_exhaustive()
    }
}
