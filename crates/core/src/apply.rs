// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::registry::{Registry, TransitionResult};
use time::OffsetDateTime;
use top_track_domain::{
    Asset, AssetStatus, DomainError, EntityId, next_asset_id, validate_assignee,
    validate_registration,
};
use top_track_ledger::{CheckInOutRecord, LedgerAction};

/// Applies a command to the current registry, producing a new registry and
/// the transition's ledger record.
///
/// Validation precedes effect application: on any error the input registry
/// is untouched and no record is produced. `now` is supplied by the caller
/// so transitions stay deterministic and testable.
///
/// # Arguments
///
/// * `registry` - The current registry (immutable)
/// * `command` - The command to apply
/// * `now` - The instant stamped on the transition
///
/// # Errors
///
/// Returns an error if the command violates domain rules.
pub fn apply(
    registry: &Registry,
    command: Command,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::RegisterAsset { registration } => {
            validate_registration(&registration)?;

            // Allocation derives from the numeric maximum in use, never
            // from a count.
            let asset_id = next_asset_id(&registry.asset_ids())?;
            let asset = Asset::register(EntityId::generate(now), asset_id, registration, now);

            let mut new_registry = registry.clone();
            new_registry.add(asset.clone())?;

            Ok(TransitionResult {
                new_registry,
                asset,
                record: None,
            })
        }
        Command::CheckOut {
            asset_id,
            assigned_to,
            notes,
        } => {
            validate_assignee(&assigned_to)?;

            let current = registry.find_by_asset_id(asset_id).ok_or_else(|| {
                DomainError::AssetNotFound {
                    identifier: asset_id.value(),
                }
            })?;

            // Re-checking-out an already-checked-out asset is permitted:
            // the holder is simply replaced, last write wins.
            let mut updated = current.clone();
            updated.status = AssetStatus::CheckedOut;
            updated.assigned_to = Some(assigned_to.clone());
            updated.check_out_date = Some(now);
            updated.check_in_date = None;
            // Explicit notes overwrite, prior notes are retained otherwise.
            updated.notes = notes.clone().or_else(|| current.notes.clone());

            let record = CheckInOutRecord::new(
                asset_id,
                assigned_to,
                LedgerAction::CheckOut,
                now,
                notes,
            );

            let mut new_registry = registry.clone();
            new_registry.update_by_identity(updated.clone())?;

            Ok(TransitionResult {
                new_registry,
                asset: updated,
                record: Some(record),
            })
        }
        Command::CheckIn { asset_id, notes } => {
            let current = registry.find_by_asset_id(asset_id).ok_or_else(|| {
                DomainError::AssetNotFound {
                    identifier: asset_id.value(),
                }
            })?;

            let mut updated = current.clone();
            updated.status = AssetStatus::CheckedIn;
            updated.assigned_to = None;
            updated.check_in_date = Some(now);
            // check_out_date is retained as the last-checkout history.
            updated.notes = notes.clone().or_else(|| current.notes.clone());

            // The record names the registered employee, not the last
            // assignee.
            let record = CheckInOutRecord::new(
                asset_id,
                current.employee_name.clone(),
                LedgerAction::CheckIn,
                now,
                notes,
            );

            let mut new_registry = registry.clone();
            new_registry.update_by_identity(updated.clone())?;

            Ok(TransitionResult {
                new_registry,
                asset: updated,
                record: Some(record),
            })
        }
    }
}
