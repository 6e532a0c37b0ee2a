// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    create_registration_for, create_test_registration, registration_time, registry_with_one_asset,
    transition_time,
};
use crate::{Command, CoreError, Registry, apply};
use top_track_domain::{AssetStatus, DomainError};
use top_track_ledger::LedgerAction;

#[test]
fn test_register_first_asset_allocates_initial_id() {
    let result = apply(
        &Registry::new(),
        Command::RegisterAsset {
            registration: create_test_registration(),
        },
        registration_time(),
    )
    .unwrap();

    assert_eq!(result.asset.asset_id.value(), "TOP-000001");
    assert_eq!(result.asset.status, AssetStatus::CheckedIn);
    assert_eq!(result.asset.barcode.value(), "TOP000001");
    assert_eq!(result.asset.register_date, registration_time());
    assert_eq!(result.new_registry.len(), 1);
}

#[test]
fn test_register_produces_no_ledger_record() {
    let result = apply(
        &Registry::new(),
        Command::RegisterAsset {
            registration: create_test_registration(),
        },
        registration_time(),
    )
    .unwrap();

    assert_eq!(result.record, None);
}

#[test]
fn test_register_allocates_sequentially() {
    let (registry, _) = registry_with_one_asset();

    let result = apply(
        &registry,
        Command::RegisterAsset {
            registration: create_registration_for("Sarah Johnson", "Marketing", "Laptop"),
        },
        registration_time(),
    )
    .unwrap();

    assert_eq!(result.asset.asset_id.value(), "TOP-000002");
}

#[test]
fn test_register_rejects_invalid_registration_without_mutation() {
    let registry = Registry::new();
    let mut registration = create_test_registration();
    registration.employee_name = String::new();

    let err = apply(
        &registry,
        Command::RegisterAsset { registration },
        registration_time(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::InvalidEmployeeName(_))
    ));
    assert!(registry.is_empty());
}

#[test]
fn test_check_out_scenario() {
    let (registry, asset) = registry_with_one_asset();

    let result = apply(
        &registry,
        Command::CheckOut {
            asset_id: asset.asset_id,
            assigned_to: String::from("Jane Doe"),
            notes: Some(String::from("remote")),
        },
        transition_time(),
    )
    .unwrap();

    assert_eq!(result.asset.status, AssetStatus::CheckedOut);
    assert_eq!(result.asset.assigned_to, Some(String::from("Jane Doe")));
    assert_eq!(result.asset.check_out_date, Some(transition_time()));
    assert_eq!(result.asset.check_in_date, None);
    assert_eq!(result.asset.notes, Some(String::from("remote")));

    let record = result.record.unwrap();
    assert_eq!(record.action, LedgerAction::CheckOut);
    assert_eq!(record.employee_name, "Jane Doe");
    assert_eq!(record.timestamp, transition_time());
    assert_eq!(record.notes, Some(String::from("remote")));
    assert_eq!(record.asset_id, asset.asset_id);
}

#[test]
fn test_check_out_rejects_empty_assignee_before_any_mutation() {
    let (registry, asset) = registry_with_one_asset();

    let err = apply(
        &registry,
        Command::CheckOut {
            asset_id: asset.asset_id,
            assigned_to: String::new(),
            notes: None,
        },
        transition_time(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::InvalidAssignee(_))
    ));
    assert_eq!(registry.all()[0].status, AssetStatus::CheckedIn);
}

#[test]
fn test_check_out_unknown_asset() {
    let (registry, asset) = registry_with_one_asset();

    let err = apply(
        &registry,
        Command::CheckOut {
            asset_id: asset.asset_id.next().unwrap(),
            assigned_to: String::from("Jane Doe"),
            notes: None,
        },
        transition_time(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::AssetNotFound { .. })
    ));
}

#[test]
fn test_check_out_without_notes_retains_prior_notes() {
    let result = apply(
        &Registry::new(),
        Command::RegisterAsset {
            registration: top_track_domain::Registration {
                notes: Some(String::from("Primary workstation")),
                ..create_test_registration()
            },
        },
        registration_time(),
    )
    .unwrap();

    let checked_out = apply(
        &result.new_registry,
        Command::CheckOut {
            asset_id: result.asset.asset_id,
            assigned_to: String::from("Jane Doe"),
            notes: None,
        },
        transition_time(),
    )
    .unwrap();

    // Asset notes are retained; the record's notes stay empty rather than
    // defaulting from the asset.
    assert_eq!(
        checked_out.asset.notes,
        Some(String::from("Primary workstation"))
    );
    assert_eq!(checked_out.record.unwrap().notes, None);
}

#[test]
fn test_check_in_records_registered_employee_not_assignee() {
    let (registry, asset) = registry_with_one_asset();

    let checked_out = apply(
        &registry,
        Command::CheckOut {
            asset_id: asset.asset_id,
            assigned_to: String::from("Jane Doe"),
            notes: None,
        },
        transition_time(),
    )
    .unwrap();

    let checked_in = apply(
        &checked_out.new_registry,
        Command::CheckIn {
            asset_id: asset.asset_id,
            notes: None,
        },
        transition_time(),
    )
    .unwrap();

    assert_eq!(checked_in.asset.status, AssetStatus::CheckedIn);
    assert_eq!(checked_in.asset.assigned_to, None);
    assert_eq!(checked_in.asset.check_in_date, Some(transition_time()));

    let record = checked_in.record.unwrap();
    assert_eq!(record.action, LedgerAction::CheckIn);
    // The registered employee, not the last assignee.
    assert_eq!(record.employee_name, "John Smith");
}

#[test]
fn test_check_in_retains_last_check_out_date() {
    let (registry, asset) = registry_with_one_asset();

    let checked_out = apply(
        &registry,
        Command::CheckOut {
            asset_id: asset.asset_id,
            assigned_to: String::from("Jane Doe"),
            notes: None,
        },
        transition_time(),
    )
    .unwrap();

    let checked_in = apply(
        &checked_out.new_registry,
        Command::CheckIn {
            asset_id: asset.asset_id,
            notes: None,
        },
        transition_time(),
    )
    .unwrap();

    assert_eq!(checked_in.asset.check_out_date, Some(transition_time()));
}

#[test]
fn test_check_in_unknown_asset() {
    let (registry, asset) = registry_with_one_asset();

    let err = apply(
        &registry,
        Command::CheckIn {
            asset_id: asset.asset_id.next().unwrap(),
            notes: None,
        },
        transition_time(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::AssetNotFound { .. })
    ));
}

#[test]
fn test_apply_does_not_mutate_input_registry() {
    let (registry, asset) = registry_with_one_asset();
    let before = registry.clone();

    let _ = apply(
        &registry,
        Command::CheckOut {
            asset_id: asset.asset_id,
            assigned_to: String::from("Jane Doe"),
            notes: None,
        },
        transition_time(),
    )
    .unwrap();

    assert_eq!(registry, before);
}
