// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Registration;

/// Validates that a registration's required fields are present.
///
/// This function checks field-level constraints only; identifier
/// uniqueness requires registry context and is checked there.
///
/// # Errors
///
/// Returns an error if:
/// - The employee name is empty
/// - The department is empty
/// - The asset type is empty
/// - The asset name is empty
pub fn validate_registration(registration: &Registration) -> Result<(), DomainError> {
    if registration.employee_name.trim().is_empty() {
        return Err(DomainError::InvalidEmployeeName(String::from(
            "Employee name cannot be empty",
        )));
    }

    if registration.department.trim().is_empty() {
        return Err(DomainError::InvalidDepartment(String::from(
            "Department cannot be empty",
        )));
    }

    if registration.asset_type.trim().is_empty() {
        return Err(DomainError::InvalidAssetType(String::from(
            "Asset type cannot be empty",
        )));
    }

    if registration.asset_name.trim().is_empty() {
        return Err(DomainError::InvalidAssetName(String::from(
            "Asset name cannot be empty",
        )));
    }

    Ok(())
}

/// Validates that a check-out assignee is usable.
///
/// Validation precedes any effect application: a check-out with an empty
/// assignee must fail before the asset is touched.
///
/// # Errors
///
/// Returns `DomainError::InvalidAssignee` if the assignee is empty or
/// whitespace only.
pub fn validate_assignee(assigned_to: &str) -> Result<(), DomainError> {
    if assigned_to.trim().is_empty() {
        return Err(DomainError::InvalidAssignee(String::from(
            "Assignee cannot be empty",
        )));
    }
    Ok(())
}
