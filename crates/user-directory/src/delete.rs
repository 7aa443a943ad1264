//! Two-step delete confirmation.
//!
//! A delete is requested first and committed only when its token is
//! confirmed. Tokens are single use: confirming or cancelling consumes them.
//! Confirming any request for an id also settles every other request for
//! that id, so abandoned tokens do not outlive the record they name.

use std::collections::BTreeMap;
use std::fmt;

use uuid::Uuid;

use crate::record::{UserId, UserRecord};

/// Opaque handle for a delete request awaiting confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeleteToken(Uuid);

impl DeleteToken {
    fn issue() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for DeleteToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of confirming a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The record was removed from the directory.
    Removed(UserRecord),
    /// No record had the requested id; nothing changed.
    AlreadyAbsent {
        /// Identifier named in the request.
        id: UserId,
    },
}

impl DeleteOutcome {
    /// Returns `true` when a record was actually removed.
    #[must_use]
    pub const fn is_removed(&self) -> bool {
        matches!(self, Self::Removed(_))
    }
}

/// Delete requests issued but not yet confirmed or cancelled.
#[derive(Debug, Clone, Default)]
pub(crate) struct PendingDeletes {
    requests: BTreeMap<DeleteToken, UserId>,
}

impl PendingDeletes {
    pub(crate) fn request(&mut self, id: UserId) -> DeleteToken {
        let token = DeleteToken::issue();
        self.requests.insert(token, id);
        token
    }

    pub(crate) fn take(&mut self, token: DeleteToken) -> Option<UserId> {
        self.requests.remove(&token)
    }

    /// Drops every outstanding request for `id`, returning how many went.
    pub(crate) fn settle(&mut self, id: UserId) -> usize {
        let before = self.requests.len();
        self.requests.retain(|_, pending| *pending != id);
        before - self.requests.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.requests.len()
    }
}
