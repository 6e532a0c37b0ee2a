// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, Registry, apply};
use time::OffsetDateTime;
use time::macros::datetime;
use top_track_domain::{Asset, EmployeeType, Registration};

pub fn registration_time() -> OffsetDateTime {
    datetime!(2024-01-15 10:30:00 UTC)
}

pub fn transition_time() -> OffsetDateTime {
    datetime!(2024-01-16 14:20:00 UTC)
}

pub fn create_test_registration() -> Registration {
    Registration {
        employee_name: String::from("John Smith"),
        department: String::from("IT Department"),
        employee_type: EmployeeType::Employee,
        asset_type: String::from("Computer"),
        asset_name: String::from("Dell OptiPlex 7090"),
        serial_number: Some(String::from("DL123456789")),
        notes: None,
    }
}

pub fn create_registration_for(
    employee_name: &str,
    department: &str,
    asset_type: &str,
) -> Registration {
    Registration {
        employee_name: String::from(employee_name),
        department: String::from(department),
        employee_type: EmployeeType::Employee,
        asset_type: String::from(asset_type),
        asset_name: format!("{asset_type} for {employee_name}"),
        serial_number: None,
        notes: None,
    }
}

/// Registers one asset into an empty registry and returns both.
pub fn registry_with_one_asset() -> (Registry, Asset) {
    let result = apply(
        &Registry::new(),
        Command::RegisterAsset {
            registration: create_test_registration(),
        },
        registration_time(),
    )
    .unwrap();
    (result.new_registry, result.asset)
}
