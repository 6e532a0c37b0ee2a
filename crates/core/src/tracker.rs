// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::apply;
use crate::command::Command;
use crate::error::CoreError;
use crate::registry::Registry;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use top_track_domain::{Asset, AssetId, Registration};
use top_track_ledger::{CheckInOutRecord, Ledger};

/// The explicit owner of all mutable tracker state.
///
/// Owns the registry and the ledger and commits every transition to both
/// as one logical unit: either the asset update and the record append both
/// land, or neither does. No ambient or global state exists; callers hold
/// the tracker and pass it where it is needed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssetTracker {
    registry: Registry,
    ledger: Ledger,
}

/// A serializable snapshot of the full tracker state.
///
/// The two collections are logically coupled; persisting them as one
/// aggregate keeps the ledger consistent with asset state across a
/// save/load cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerSnapshot {
    /// All registered assets in insertion order.
    pub assets: Vec<Asset>,
    /// All ledger records in insertion order.
    pub records: Vec<CheckInOutRecord>,
}

impl AssetTracker {
    /// Creates a tracker with no assets and an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            registry: Registry::new(),
            ledger: Ledger::new(),
        }
    }

    /// Rebuilds a tracker from a persisted snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: TrackerSnapshot) -> Self {
        Self {
            registry: Registry::from_assets(snapshot.assets),
            ledger: Ledger::from_records(snapshot.records),
        }
    }

    /// Captures the current state as a persistable snapshot.
    #[must_use]
    pub fn to_snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            assets: self.registry.all().to_vec(),
            records: self.ledger.all().to_vec(),
        }
    }

    /// Registers a new asset at status checked-in.
    ///
    /// The sequential identifier and barcode are allocated from the
    /// registry's current contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the registration input is invalid or the
    /// allocated identity collides; nothing is mutated on failure.
    pub fn register(
        &mut self,
        registration: Registration,
        now: OffsetDateTime,
    ) -> Result<Asset, CoreError> {
        let result = apply(&self.registry, Command::RegisterAsset { registration }, now)?;
        self.registry = result.new_registry;
        Ok(result.asset)
    }

    /// Checks an asset out to a holder.
    ///
    /// # Errors
    ///
    /// Returns an error if the assignee is empty or the asset is unknown;
    /// neither collection is mutated on failure.
    pub fn check_out(
        &mut self,
        asset_id: AssetId,
        assigned_to: &str,
        notes: Option<String>,
        now: OffsetDateTime,
    ) -> Result<(Asset, CheckInOutRecord), CoreError> {
        let result = apply(
            &self.registry,
            Command::CheckOut {
                asset_id,
                assigned_to: assigned_to.to_string(),
                notes,
            },
            now,
        )?;
        self.commit(result)
    }

    /// Checks an asset back in.
    ///
    /// # Errors
    ///
    /// Returns an error if the asset is unknown; neither collection is
    /// mutated on failure.
    pub fn check_in(
        &mut self,
        asset_id: AssetId,
        notes: Option<String>,
        now: OffsetDateTime,
    ) -> Result<(Asset, CheckInOutRecord), CoreError> {
        let result = apply(&self.registry, Command::CheckIn { asset_id, notes }, now)?;
        self.commit(result)
    }

    /// Commits a validated transition to both collections.
    fn commit(
        &mut self,
        result: crate::registry::TransitionResult,
    ) -> Result<(Asset, CheckInOutRecord), CoreError> {
        let Some(record) = result.record else {
            // Lifecycle transitions always carry a record; reaching this
            // branch would mean apply() produced an inconsistent result.
            return Err(CoreError::DomainViolation(
                top_track_domain::DomainError::StatusConsistencyViolation {
                    asset_id: result.asset.asset_id.value(),
                    reason: String::from("transition produced no ledger record"),
                },
            ));
        };
        self.registry = result.new_registry;
        self.ledger.append(record.clone());
        Ok((result.asset, record))
    }

    /// Returns the asset registry.
    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the transaction ledger.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Returns all assets in insertion order.
    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        self.registry.all()
    }

    /// Returns all ledger records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[CheckInOutRecord] {
        self.ledger.all()
    }

    /// Returns the `n` most recent ledger records, newest first.
    #[must_use]
    pub fn recent_records(&self, n: usize) -> Vec<CheckInOutRecord> {
        self.ledger.recent(n)
    }
}
