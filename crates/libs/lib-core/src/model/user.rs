//! # User Record
//!
//! Plain user entity with partial construction. The record carries no
//! behavior and enforces no invariants beyond field presence; any subset of
//! fields may be absent.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User record. All fields are optional; absent fields are omitted from JSON
/// rather than serialized as `null`.
///
/// The password is stored exactly as given. Hashing happens elsewhere, before
/// a record is ever persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserRecord {
    /// Construct from a partial value, copying only the fields present.
    ///
    /// Fields absent from the partial stay absent on the new record.
    pub fn new(partial: UserRecordPartial) -> Self {
        let mut record = UserRecord::default();
        if let Some(id) = partial.id {
            record.id = Some(id);
        }
        if let Some(email) = partial.email {
            record.email = Some(email);
        }
        if let Some(password) = partial.password {
            record.password = Some(password);
        }
        record
    }
}

/// Partial input for constructing a [`UserRecord`].
///
/// All fields are optional - only provided fields are copied onto the record.
#[derive(Debug, Clone, Default)]
pub struct UserRecordPartial {
    pub id: Option<i64>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserRecordPartial {
    /// Create a new empty `UserRecordPartial` instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the id.
    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}

// endregion: --- Tests
