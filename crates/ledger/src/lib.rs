// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;
use top_track_domain::AssetId;

/// Atomic counter disambiguating record identities generated within the
/// same instant. Uniqueness is the only requirement on record ids.
static RECORD_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Unique identity of a ledger record, assigned at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId {
    value: String,
}

impl RecordId {
    /// Generates a fresh record identity from the given instant.
    #[must_use]
    pub fn generate(now: OffsetDateTime) -> Self {
        let seq = RECORD_COUNTER.fetch_add(1, Ordering::SeqCst);
        Self {
            value: format!("{}-{seq}", now.unix_timestamp_nanos()),
        }
    }

    /// Returns the identity value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The direction of a lifecycle transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LedgerAction {
    /// An asset was returned to available status.
    CheckIn,
    /// An asset was assigned to a holder.
    CheckOut,
}

impl LedgerAction {
    /// Returns the string representation of this action.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CheckIn => "check-in",
            Self::CheckOut => "check-out",
        }
    }
}

impl std::fmt::Display for LedgerAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable historical check-in/check-out event.
///
/// Records reference assets by `AssetId` with no referential integrity
/// enforcement: a record may describe an asset whose current state has
/// since moved on. That is the accepted historical-log semantic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInOutRecord {
    /// Unique record identity.
    pub id: RecordId,
    /// The asset this event concerns.
    pub asset_id: AssetId,
    /// The person associated with this specific transition: the assignee
    /// for a check-out, the registered employee for a check-in.
    pub employee_name: String,
    /// The transition direction.
    pub action: LedgerAction,
    /// When the event occurred.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Notes given with the transition; never defaulted from the asset.
    pub notes: Option<String>,
}

impl CheckInOutRecord {
    /// Creates a new record for the given instant.
    ///
    /// Once created, a record is immutable.
    #[must_use]
    pub fn new(
        asset_id: AssetId,
        employee_name: String,
        action: LedgerAction,
        timestamp: OffsetDateTime,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: RecordId::generate(timestamp),
            asset_id,
            employee_name,
            action,
            timestamp,
            notes,
        }
    }
}

/// Append-only log of check-in/check-out events.
///
/// Records are appended in arrival order and never deleted or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    records: Vec<CheckInOutRecord>,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Rebuilds a ledger from previously persisted records.
    ///
    /// Insertion order of the input is preserved.
    #[must_use]
    pub fn from_records(records: Vec<CheckInOutRecord>) -> Self {
        Self { records }
    }

    /// Appends a record.
    ///
    /// No validation against the asset registry happens here: historical
    /// records outlive the states they describe.
    pub fn append(&mut self, record: CheckInOutRecord) {
        self.records.push(record);
    }

    /// Returns all records in insertion order.
    #[must_use]
    pub fn all(&self) -> &[CheckInOutRecord] {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the ledger is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns at most `n` records sorted by timestamp descending.
    ///
    /// Timestamp ties keep insertion order (stable sort); records carry no
    /// secondary sort key.
    #[must_use]
    pub fn recent(&self, n: usize) -> Vec<CheckInOutRecord> {
        let mut sorted: Vec<CheckInOutRecord> = self.records.clone();
        sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        sorted.truncate(n);
        sorted
    }
}
