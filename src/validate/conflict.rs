//! Duplicate key and path detection.

use rustc_hash::FxHashMap;

use super::{RouteDiagnostics, Violation};
use crate::route::Route;
use crate::table::RouteTable;

/// Value -> records claiming it, in traversal order.
pub type ClaimMap<'a> = FxHashMap<&'a str, Vec<&'a Route>>;

/// A value claimed by more than one record.
#[derive(Debug, Clone)]
pub struct Conflict<'a> {
    pub value: &'a str,
    pub claimants: Vec<&'a Route>,
}

/// Collect name -> records.
pub fn collect_keys(table: &RouteTable) -> ClaimMap<'_> {
    let mut claims = ClaimMap::default();
    table.walk(|route, _| {
        claims.entry(route.name.as_str()).or_default().push(route);
    });
    claims
}

/// Collect path -> records.
pub fn collect_paths(table: &RouteTable) -> ClaimMap<'_> {
    let mut claims = ClaimMap::default();
    table.walk(|route, _| {
        claims.entry(route.path.as_str()).or_default().push(route);
    });
    claims
}

/// Values with more than one claimant, sorted by value.
pub fn detect_conflicts<'a>(claims: &ClaimMap<'a>) -> Vec<Conflict<'a>> {
    let mut conflicts: Vec<_> = claims
        .iter()
        .filter(|(_, routes)| routes.len() > 1)
        .map(|(value, routes)| Conflict {
            value: *value,
            claimants: routes.clone(),
        })
        .collect();
    conflicts.sort_by(|a, b| a.value.cmp(b.value));
    conflicts
}

/// Report duplicate keys and paths of a table.
pub fn check_conflicts(table: &RouteTable, diag: &mut RouteDiagnostics) {
    for conflict in detect_conflicts(&collect_keys(table)) {
        let paths = join_with(&conflict.claimants, |r| r.path.as_str());
        diag.error(
            conflict.value,
            conflict.claimants[0].path.as_str(),
            Violation::DuplicateKey,
            format!(
                "key declared {} times (paths: {})",
                conflict.claimants.len(),
                paths
            ),
        );
    }

    for conflict in detect_conflicts(&collect_paths(table)) {
        let keys = join_with(&conflict.claimants, |r| r.name.as_str());
        diag.error(
            conflict.claimants[0].name.as_str(),
            conflict.value,
            Violation::DuplicatePath,
            format!(
                "path claimed by {} routes (keys: {})",
                conflict.claimants.len(),
                keys
            ),
        );
    }
}

fn join_with(routes: &[&Route], field: impl Fn(&Route) -> &str) -> String {
    routes
        .iter()
        .map(|r| format!("`{}`", field(*r)))
        .collect::<Vec<_>>()
        .join(", ")
}
