// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::asset_id::{AssetId, Barcode};
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;

/// Atomic counter disambiguating identities generated within the same
/// instant. Uniqueness of `EntityId` values is the only requirement; the
/// timestamp component merely keeps values unique across process restarts.
static ENTITY_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A process-local opaque identity, assigned at creation and immutable.
///
/// This is the internal identity of an asset; the human-facing `AssetId`
/// is allocated separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId {
    value: String,
}

impl EntityId {
    /// Generates a fresh identity from the given instant.
    #[must_use]
    pub fn generate(now: OffsetDateTime) -> Self {
        let seq = ENTITY_COUNTER.fetch_add(1, Ordering::SeqCst);
        Self {
            value: format!("{}-{seq}", now.unix_timestamp_nanos()),
        }
    }

    /// Wraps an existing identity value (e.g. loaded from persistence).
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identity value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Classification of the person associated with an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeType {
    /// A regular employee.
    Employee,
    /// A guest without a permanent appointment.
    Guest,
}

impl EmployeeType {
    /// Returns the string representation of this employee type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Guest => "guest",
        }
    }
}

impl FromStr for EmployeeType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employee" => Ok(Self::Employee),
            "guest" => Ok(Self::Guest),
            _ => Err(DomainError::InvalidEmployeeType(format!(
                "Unknown employee type: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for EmployeeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The lifecycle state of an asset.
///
/// Only the `CheckedIn` ⇄ `CheckedOut` cycle has in-core transitions.
/// `Maintenance` and `Retired` are reachable states whose triggering
/// transitions live outside this subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AssetStatus {
    /// Available; not assigned to anyone.
    #[default]
    CheckedIn,
    /// Assigned to a holder and unavailable.
    CheckedOut,
    /// Under maintenance.
    Maintenance,
    /// Permanently withdrawn from service.
    Retired,
}

impl AssetStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CheckedIn => "checked-in",
            Self::CheckedOut => "checked-out",
            Self::Maintenance => "maintenance",
            Self::Retired => "retired",
        }
    }
}

impl FromStr for AssetStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "checked-in" => Ok(Self::CheckedIn),
            "checked-out" => Ok(Self::CheckedOut),
            "maintenance" => Ok(Self::Maintenance),
            "retired" => Ok(Self::Retired),
            _ => Err(DomainError::InvalidStatus(format!("Unknown status: {s}"))),
        }
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Registration input for a new asset.
///
/// A typed struct with named, statically-checked fields; registration data
/// is never applied by dynamic field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// The registering/primary associated person.
    pub employee_name: String,
    /// The person's department.
    pub department: String,
    /// The person's classification.
    pub employee_type: EmployeeType,
    /// The asset's type (e.g. "Laptop").
    pub asset_type: String,
    /// The asset's descriptive name.
    pub asset_name: String,
    /// Optional manufacturer serial number.
    pub serial_number: Option<String>,
    /// Optional freeform notes.
    pub notes: Option<String>,
}

/// A physical item under management.
///
/// Created only via registration, never deleted. Identity fields
/// (`id`, `asset_id`, `barcode`, `register_date`) and registration fields
/// are immutable; `status`, `assigned_to`, the transition dates, and
/// `notes` are mutated only by lifecycle transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Process-local opaque identity.
    pub id: EntityId,
    /// Human-facing sequential identifier.
    pub asset_id: AssetId,
    /// Barcode rendering of `asset_id`.
    pub barcode: Barcode,
    /// The registering/primary associated person.
    pub employee_name: String,
    /// The person's department.
    pub department: String,
    /// The person's classification.
    pub employee_type: EmployeeType,
    /// The asset's type.
    pub asset_type: String,
    /// The asset's descriptive name.
    pub asset_name: String,
    /// Optional manufacturer serial number.
    pub serial_number: Option<String>,
    /// Creation timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub register_date: OffsetDateTime,
    /// Current lifecycle state.
    pub status: AssetStatus,
    /// Current holder while checked out.
    pub assigned_to: Option<String>,
    /// When the asset was last checked out.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub check_out_date: Option<OffsetDateTime>,
    /// When the asset was last checked in.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub check_in_date: Option<OffsetDateTime>,
    /// Freeform notes, overwritten by the latest transition's notes.
    pub notes: Option<String>,
}

impl Asset {
    /// Creates a newly registered asset.
    ///
    /// The barcode is derived from `asset_id` and the asset starts
    /// checked in with no holder.
    #[must_use]
    pub fn register(
        id: EntityId,
        asset_id: AssetId,
        registration: Registration,
        register_date: OffsetDateTime,
    ) -> Self {
        let barcode = asset_id.barcode();
        Self {
            id,
            asset_id,
            barcode,
            employee_name: registration.employee_name,
            department: registration.department,
            employee_type: registration.employee_type,
            asset_type: registration.asset_type,
            asset_name: registration.asset_name,
            serial_number: registration.serial_number,
            register_date,
            status: AssetStatus::CheckedIn,
            assigned_to: None,
            check_out_date: None,
            check_in_date: None,
            notes: registration.notes,
        }
    }

    /// Validates the status/assignment consistency invariant.
    ///
    /// # Invariant
    ///
    /// `status == CheckedOut` ⇒ `assigned_to` and `check_out_date` present.
    /// `status == CheckedIn` ⇒ `assigned_to` absent.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::StatusConsistencyViolation` if the fields
    /// disagree with the status.
    pub fn validate_status_consistency(&self) -> Result<(), DomainError> {
        match self.status {
            AssetStatus::CheckedOut => {
                if self.assigned_to.is_none() {
                    return Err(DomainError::StatusConsistencyViolation {
                        asset_id: self.asset_id.value(),
                        reason: String::from("checked-out asset has no holder"),
                    });
                }
                if self.check_out_date.is_none() {
                    return Err(DomainError::StatusConsistencyViolation {
                        asset_id: self.asset_id.value(),
                        reason: String::from("checked-out asset has no check-out date"),
                    });
                }
            }
            AssetStatus::CheckedIn => {
                if self.assigned_to.is_some() {
                    return Err(DomainError::StatusConsistencyViolation {
                        asset_id: self.asset_id.value(),
                        reason: String::from("checked-in asset still has a holder"),
                    });
                }
            }
            AssetStatus::Maintenance | AssetStatus::Retired => {}
        }
        Ok(())
    }
}
