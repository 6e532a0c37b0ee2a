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

mod asset_id;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use asset_id::{ASSET_ID_PREFIX, AssetId, Barcode, next_asset_id};
pub use error::DomainError;
pub use types::{Asset, AssetStatus, EmployeeType, EntityId, Registration};
pub use validation::{validate_assignee, validate_registration};
