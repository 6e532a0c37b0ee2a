// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use top_track_domain::{AssetId, Registration};

/// A command represents caller intent as data only.
///
/// Commands are the only way to request registry changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a new asset; the sequential identifier is allocated from
    /// the registry's current contents.
    RegisterAsset {
        /// The registration input.
        registration: Registration,
    },
    /// Assign an asset to a holder, making it unavailable.
    CheckOut {
        /// The asset to check out.
        asset_id: AssetId,
        /// The new holder; must be non-empty.
        assigned_to: String,
        /// Optional transition notes.
        notes: Option<String>,
    },
    /// Return an asset to available status.
    CheckIn {
        /// The asset to check in.
        asset_id: AssetId,
        /// Optional transition notes.
        notes: Option<String>,
    },
}
