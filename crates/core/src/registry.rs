// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use top_track_domain::{Asset, AssetId, AssetStatus, DomainError, EntityId};
use top_track_ledger::CheckInOutRecord;

/// The authoritative current-state collection of assets.
///
/// Assets are kept in insertion order; identity uniqueness is enforced on
/// insert. Immutability of identity fields across updates is lifecycle
/// policy, enforced by `apply`, not here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    assets: Vec<Asset>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self { assets: Vec::new() }
    }

    /// Rebuilds a registry from previously persisted assets.
    ///
    /// Insertion order of the input is preserved. The input is trusted to
    /// have been validated when it was first registered.
    #[must_use]
    pub fn from_assets(assets: Vec<Asset>) -> Self {
        Self { assets }
    }

    /// Adds a new asset, preserving insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateIdentifier` if an asset with the
    /// same internal id or asset id is already present. Nothing is
    /// inserted on failure.
    pub fn add(&mut self, asset: Asset) -> Result<(), DomainError> {
        if self.assets.iter().any(|a| a.id == asset.id) {
            return Err(DomainError::DuplicateIdentifier {
                identifier: asset.id.value().to_string(),
            });
        }
        if self.assets.iter().any(|a| a.asset_id == asset.asset_id) {
            return Err(DomainError::DuplicateIdentifier {
                identifier: asset.asset_id.value(),
            });
        }
        self.assets.push(asset);
        Ok(())
    }

    /// Replaces the stored asset whose internal id matches.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AssetNotFound` if no asset matches; no state
    /// is mutated in that case.
    pub fn update_by_identity(&mut self, asset: Asset) -> Result<(), DomainError> {
        let Some(slot) = self.assets.iter_mut().find(|a| a.id == asset.id) else {
            return Err(DomainError::AssetNotFound {
                identifier: asset.id.value().to_string(),
            });
        };
        *slot = asset;
        Ok(())
    }

    /// Returns all assets in insertion order. No hidden sorting.
    #[must_use]
    pub fn all(&self) -> &[Asset] {
        &self.assets
    }

    /// Returns the number of registered assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Returns whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Returns the sequential identifiers currently in use, in insertion
    /// order. Input for the identifier allocator.
    #[must_use]
    pub fn asset_ids(&self) -> Vec<AssetId> {
        self.assets.iter().map(|a| a.asset_id).collect()
    }

    /// Looks up an asset by its sequential identifier.
    #[must_use]
    pub fn find_by_asset_id(&self, asset_id: AssetId) -> Option<&Asset> {
        self.assets.iter().find(|a| a.asset_id == asset_id)
    }

    /// Looks up an asset by its internal identity.
    #[must_use]
    pub fn find_by_identity(&self, id: &EntityId) -> Option<&Asset> {
        self.assets.iter().find(|a| &a.id == id)
    }

    /// Returns the assets registered under a department.
    #[must_use]
    pub fn by_department(&self, department: &str) -> Vec<&Asset> {
        self.assets
            .iter()
            .filter(|a| a.department == department)
            .collect()
    }

    /// Returns the assets of a given type.
    #[must_use]
    pub fn by_asset_type(&self, asset_type: &str) -> Vec<&Asset> {
        self.assets
            .iter()
            .filter(|a| a.asset_type == asset_type)
            .collect()
    }

    /// Returns the assets in a given lifecycle state.
    #[must_use]
    pub fn by_status(&self, status: AssetStatus) -> Vec<&Asset> {
        self.assets.iter().filter(|a| a.status == status).collect()
    }
}

/// The result of a successful lifecycle transition.
///
/// Transitions are atomic from the caller's point of view: the updated
/// registry, the touched asset, and the ledger record (when the command
/// produces one) are created together and must be committed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The registry after the transition.
    pub new_registry: Registry,
    /// The asset as created or updated by the transition.
    pub asset: Asset,
    /// The ledger record for check-in/check-out transitions.
    /// Registration produces no record.
    pub record: Option<CheckInOutRecord>,
}
