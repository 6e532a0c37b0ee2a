// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Aggregate reporting over a registry snapshot.
//!
//! All functions here are pure reads: they take the current registry and
//! produce derived counts, with no side effects. Rendering and export are
//! external collaborators.

use crate::registry::Registry;
use top_track_domain::AssetStatus;

/// Per-status and grouped counts over a set of assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewReport {
    /// Total number of assets considered.
    pub total_assets: usize,
    /// Assets at status checked-in.
    pub checked_in: usize,
    /// Assets at status checked-out.
    pub checked_out: usize,
    /// Assets at status maintenance.
    pub maintenance: usize,
    /// Assets at status retired.
    pub retired: usize,
    /// Counts grouped by department, in first-seen order.
    pub by_department: Vec<(String, usize)>,
    /// Counts grouped by asset type, in first-seen order.
    pub by_asset_type: Vec<(String, usize)>,
    /// Counts grouped by employee type, in first-seen order.
    pub by_employee_type: Vec<(String, usize)>,
}

/// Per-department totals with a status breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentReport {
    /// The department.
    pub department: String,
    /// Total assets registered under the department.
    pub total_assets: usize,
    /// Assets at status checked-in.
    pub checked_in: usize,
    /// Assets at status checked-out.
    pub checked_out: usize,
    /// Assets at status maintenance.
    pub maintenance: usize,
    /// Assets at status retired.
    pub retired: usize,
}

/// Increments the count for `key`, preserving first-seen order.
fn bump(groups: &mut Vec<(String, usize)>, key: &str) {
    if let Some(entry) = groups.iter_mut().find(|(k, _)| k == key) {
        entry.1 += 1;
    } else {
        groups.push((key.to_string(), 1));
    }
}

/// Produces the overview report for the whole registry.
#[must_use]
pub fn overview(registry: &Registry) -> OverviewReport {
    let mut report = OverviewReport {
        total_assets: registry.len(),
        checked_in: 0,
        checked_out: 0,
        maintenance: 0,
        retired: 0,
        by_department: Vec::new(),
        by_asset_type: Vec::new(),
        by_employee_type: Vec::new(),
    };

    for asset in registry.all() {
        match asset.status {
            AssetStatus::CheckedIn => report.checked_in += 1,
            AssetStatus::CheckedOut => report.checked_out += 1,
            AssetStatus::Maintenance => report.maintenance += 1,
            AssetStatus::Retired => report.retired += 1,
        }
        bump(&mut report.by_department, &asset.department);
        bump(&mut report.by_asset_type, &asset.asset_type);
        bump(&mut report.by_employee_type, asset.employee_type.as_str());
    }

    report
}

/// Produces per-department reports, one entry per department in
/// first-seen order.
#[must_use]
pub fn department_breakdown(registry: &Registry) -> Vec<DepartmentReport> {
    let mut reports: Vec<DepartmentReport> = Vec::new();

    for asset in registry.all() {
        if !reports.iter().any(|r| r.department == asset.department) {
            reports.push(DepartmentReport {
                department: asset.department.clone(),
                total_assets: 0,
                checked_in: 0,
                checked_out: 0,
                maintenance: 0,
                retired: 0,
            });
        }
        let Some(report) = reports
            .iter_mut()
            .find(|r| r.department == asset.department)
        else {
            continue;
        };

        report.total_assets += 1;
        match asset.status {
            AssetStatus::CheckedIn => report.checked_in += 1,
            AssetStatus::CheckedOut => report.checked_out += 1,
            AssetStatus::Maintenance => report.maintenance += 1,
            AssetStatus::Retired => report.retired += 1,
        }
    }

    reports
}
