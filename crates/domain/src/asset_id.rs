// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sequential asset identifiers and barcode derivation.
//!
//! Asset identifiers render as `TOP-NNNNNN` with the numeric suffix
//! zero-padded to six digits. The suffix is compared numerically, never
//! lexicographically: allocation must keep working past `TOP-999999`,
//! where the rendered form grows to seven digits.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The prefix every asset identifier carries.
pub const ASSET_ID_PREFIX: &str = "TOP";

/// The separator between prefix and numeric suffix.
const SEPARATOR: char = '-';

/// Minimum rendered width of the numeric suffix.
const SUFFIX_WIDTH: usize = 6;

/// A human-facing sequential asset identifier.
///
/// Identifiers are immutable after assignment and globally unique across
/// the registry. Ordering follows the numeric suffix.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct AssetId {
    /// The numeric suffix (1-based).
    number: u64,
}

impl AssetId {
    /// The first identifier ever allocated: `TOP-000001`.
    pub const FIRST: Self = Self { number: 1 };

    /// Parses an identifier from its rendered form.
    ///
    /// Accepts any positive numeric suffix; re-rendering normalizes the
    /// zero padding.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MalformedIdentifier` if the prefix, separator,
    /// or numeric suffix is missing or unparsable. A malformed suffix must
    /// never silently produce a corrupt next identifier.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let rest = value
            .strip_prefix(ASSET_ID_PREFIX)
            .and_then(|r| r.strip_prefix(SEPARATOR))
            .ok_or_else(|| DomainError::MalformedIdentifier {
                value: value.to_string(),
                reason: format!("expected '{ASSET_ID_PREFIX}{SEPARATOR}' prefix"),
            })?;

        let number: u64 = rest
            .parse()
            .map_err(|_| DomainError::MalformedIdentifier {
                value: value.to_string(),
                reason: String::from("numeric suffix is not a valid number"),
            })?;

        if number == 0 {
            return Err(DomainError::MalformedIdentifier {
                value: value.to_string(),
                reason: String::from("numeric suffix must be positive"),
            });
        }

        Ok(Self { number })
    }

    /// Returns the numeric suffix.
    #[must_use]
    pub const fn number(&self) -> u64 {
        self.number
    }

    /// Returns the canonical rendered form, e.g. `TOP-000042`.
    #[must_use]
    pub fn value(&self) -> String {
        format!(
            "{ASSET_ID_PREFIX}{SEPARATOR}{:0width$}",
            self.number,
            width = SUFFIX_WIDTH
        )
    }

    /// Returns the identifier following this one.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IdentifierSpaceExhausted` if the suffix cannot
    /// be incremented.
    pub fn next(&self) -> Result<Self, DomainError> {
        let number = self
            .number
            .checked_add(1)
            .ok_or(DomainError::IdentifierSpaceExhausted)?;
        Ok(Self { number })
    }

    /// Derives the barcode rendering of this identifier.
    ///
    /// Pure and deterministic: the separator is removed, nothing else
    /// changes. The mapping is injective over valid identifiers because
    /// the prefix is fixed and the suffix is purely numeric.
    #[must_use]
    pub fn barcode(&self) -> Barcode {
        Barcode {
            value: self.value().replace(SEPARATOR, ""),
        }
    }
}

impl FromStr for AssetId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AssetId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AssetId> for String {
    fn from(id: AssetId) -> Self {
        id.value()
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A barcode-compatible rendering of an asset identifier.
///
/// Used for display and scanning, never for identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Barcode {
    value: String,
}

impl Barcode {
    /// Returns the barcode string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Barcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Derives the next sequential asset identifier from the identifiers
/// currently in use.
///
/// The maximum numeric suffix observed is incremented by one; an empty
/// collection yields `TOP-000001`. Input order is irrelevant. Retired
/// assets are never reused: allocation is strictly increasing based on the
/// maximum observed, not a count.
///
/// # Errors
///
/// Returns `DomainError::IdentifierSpaceExhausted` if the maximum suffix
/// cannot be incremented.
pub fn next_asset_id(existing: &[AssetId]) -> Result<AssetId, DomainError> {
    match existing.iter().max() {
        None => Ok(AssetId::FIRST),
        Some(max) => max.next(),
    }
}
