// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An asset with the same identity is already registered.
    DuplicateIdentifier {
        /// The conflicting identifier (internal id or asset id).
        identifier: String,
    },
    /// No registered asset matches the given identity.
    AssetNotFound {
        /// The identifier that was looked up.
        identifier: String,
    },
    /// Check-out was attempted without a usable assignee.
    InvalidAssignee(String),
    /// An asset identifier could not be parsed.
    MalformedIdentifier {
        /// The raw identifier value.
        value: String,
        /// Why parsing failed.
        reason: String,
    },
    /// The sequential identifier space has been exhausted.
    IdentifierSpaceExhausted,
    /// Asset status string is not recognized.
    InvalidStatus(String),
    /// Employee type string is not recognized.
    InvalidEmployeeType(String),
    /// Employee name is empty or invalid.
    InvalidEmployeeName(String),
    /// Department is empty or invalid.
    InvalidDepartment(String),
    /// Asset type is empty or invalid.
    InvalidAssetType(String),
    /// Asset name is empty or invalid.
    InvalidAssetName(String),
    /// An asset's status and assignment fields disagree.
    StatusConsistencyViolation {
        /// The asset identifier.
        asset_id: String,
        /// Description of the violated invariant.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateIdentifier { identifier } => {
                write!(f, "Asset with identifier '{identifier}' already exists")
            }
            Self::AssetNotFound { identifier } => {
                write!(f, "Asset with identifier '{identifier}' not found")
            }
            Self::InvalidAssignee(msg) => write!(f, "Invalid assignee: {msg}"),
            Self::MalformedIdentifier { value, reason } => {
                write!(f, "Malformed asset identifier '{value}': {reason}")
            }
            Self::IdentifierSpaceExhausted => {
                write!(f, "Sequential asset identifier space is exhausted")
            }
            Self::InvalidStatus(msg) => write!(f, "Invalid asset status: {msg}"),
            Self::InvalidEmployeeType(msg) => write!(f, "Invalid employee type: {msg}"),
            Self::InvalidEmployeeName(msg) => write!(f, "Invalid employee name: {msg}"),
            Self::InvalidDepartment(msg) => write!(f, "Invalid department: {msg}"),
            Self::InvalidAssetType(msg) => write!(f, "Invalid asset type: {msg}"),
            Self::InvalidAssetName(msg) => write!(f, "Invalid asset name: {msg}"),
            Self::StatusConsistencyViolation { asset_id, reason } => {
                write!(f, "Status consistency violation for asset '{asset_id}': {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
