// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_registration, registration_time, registry_with_one_asset};
use crate::{CoreError, Registry};
use top_track_domain::{
    Asset, AssetId, AssetStatus, DomainError, EntityId,
};

fn second_asset() -> Asset {
    Asset::register(
        EntityId::generate(registration_time()),
        AssetId::FIRST.next().unwrap(),
        create_test_registration(),
        registration_time(),
    )
}

#[test]
fn test_add_preserves_insertion_order() {
    let (registry, first) = registry_with_one_asset();
    let mut registry = registry;
    let second = second_asset();
    registry.add(second.clone()).unwrap();

    let all = registry.all();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, first.id);
    assert_eq!(all[1].id, second.id);
}

#[test]
fn test_add_rejects_duplicate_asset_id() {
    let (mut registry, existing) = registry_with_one_asset();

    // Fresh internal id, same sequential id.
    let mut duplicate = second_asset();
    duplicate.asset_id = existing.asset_id;

    let err = registry.add(duplicate).unwrap_err();
    assert!(matches!(err, DomainError::DuplicateIdentifier { .. }));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_add_rejects_duplicate_internal_id() {
    let (mut registry, existing) = registry_with_one_asset();

    let mut duplicate = second_asset();
    duplicate.id = existing.id;

    let err = registry.add(duplicate).unwrap_err();
    assert!(matches!(err, DomainError::DuplicateIdentifier { .. }));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_update_by_identity_replaces_matching_asset() {
    let (mut registry, asset) = registry_with_one_asset();

    let mut updated = asset.clone();
    updated.notes = Some(String::from("reimaged"));
    registry.update_by_identity(updated.clone()).unwrap();

    assert_eq!(registry.all()[0].notes, Some(String::from("reimaged")));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_update_by_identity_rejects_unknown_asset() {
    let (mut registry, _) = registry_with_one_asset();
    let before = registry.clone();

    let err = registry.update_by_identity(second_asset()).unwrap_err();
    assert!(matches!(err, DomainError::AssetNotFound { .. }));
    assert_eq!(registry, before);
}

#[test]
fn test_find_by_asset_id() {
    let (registry, asset) = registry_with_one_asset();

    assert!(registry.find_by_asset_id(asset.asset_id).is_some());
    assert!(
        registry
            .find_by_asset_id(asset.asset_id.next().unwrap())
            .is_none()
    );
}

#[test]
fn test_queries_filter_without_reordering() {
    let (mut registry, _) = registry_with_one_asset();
    registry.add(second_asset()).unwrap();

    let by_department = registry.by_department("IT Department");
    assert_eq!(by_department.len(), 2);
    let by_type = registry.by_asset_type("Computer");
    assert_eq!(by_type.len(), 2);
    let checked_in = registry.by_status(AssetStatus::CheckedIn);
    assert_eq!(checked_in.len(), 2);
    assert!(registry.by_status(AssetStatus::Retired).is_empty());
    assert!(registry.by_department("Finance").is_empty());
}

#[test]
fn test_core_error_wraps_domain_error() {
    let err: CoreError = DomainError::AssetNotFound {
        identifier: String::from("TOP-000009"),
    }
    .into();
    assert!(matches!(err, CoreError::DomainViolation(_)));
    assert!(format!("{err}").contains("TOP-000009"));
}

#[test]
fn test_empty_registry() {
    let registry = Registry::new();
    assert!(registry.is_empty());
    assert!(registry.asset_ids().is_empty());
}
