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

//! `SQLite`-backed persistence for the TopTrack asset tracker.
//!
//! The tracker's two collections are stored as JSON documents in a
//! key/value table and written together in one transaction.

mod error;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use store::{ASSETS_KEY, RECORDS_KEY, Store};
