//! Route table loading.
//!
//! A route table is the list of top-level route records. Two file formats
//! are accepted, picked by extension:
//!
//! ```text
//! routes.json   [ { "name": "root", ... }, ... ]      (backend format)
//!               { "routes": [ ... ] }
//! routes.toml   [[routes]]
//!               name = "root"
//!               ...
//! ```
//!
//! Unknown fields never abort loading; they are collected and reported.

pub mod handle;

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::log;
use crate::route::{KeySet, Route, RoutePath};
use crate::validate::RouteDiagnostics;

pub use handle::{init_routes, routes};

// ============================================================================
// TableError
// ============================================================================

/// Route-table-related errors
#[derive(Debug, Error)]
pub enum TableError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("route table parsing error")]
    Json(#[from] serde_json::Error),

    #[error("route table parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported route table format `{0}` (expected .json or .toml)")]
    UnsupportedFormat(PathBuf),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Rejected(RouteDiagnostics),
}

// ============================================================================
// RouteTable
// ============================================================================

/// File layout with a top-level `routes` list.
#[derive(Debug, Default, Serialize, Deserialize)]
struct TableDoc {
    #[serde(default)]
    routes: Vec<Route>,
}

/// Top-level route records plus where they came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteTable {
    /// Source file, `None` for in-memory tables
    pub source: Option<PathBuf>,
    pub routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self {
            source: None,
            routes,
        }
    }

    /// Load a route table file, warning about unknown fields.
    pub fn from_path(path: &Path) -> Result<Self, TableError> {
        let content =
            fs::read_to_string(path).map_err(|err| TableError::Io(path.to_path_buf(), err))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        let (mut table, ignored) = match extension {
            "json" => Self::from_json_str(&content)?,
            "toml" => Self::from_toml_str(&content)?,
            _ => return Err(TableError::UnsupportedFormat(path.to_path_buf())),
        };

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        table.source = Some(path.to_path_buf());
        Ok(table)
    }

    /// Parse a JSON route table: a bare array or `{ "routes": [...] }`.
    ///
    /// Returns the table and the paths of unknown fields.
    pub fn from_json_str(content: &str) -> Result<(Self, Vec<String>), TableError> {
        let mut ignored = Vec::new();
        let mut deserializer = serde_json::Deserializer::from_str(content);
        let on_ignored = |path: serde_ignored::Path| ignored.push(path.to_string());

        let routes = if content.trim_start().starts_with('[') {
            let routes: Vec<Route> = serde_ignored::deserialize(&mut deserializer, on_ignored)?;
            routes
        } else {
            let doc: TableDoc = serde_ignored::deserialize(&mut deserializer, on_ignored)?;
            doc.routes
        };
        deserializer.end()?;

        Ok((Self::new(routes), ignored))
    }

    /// Parse a TOML route table (`[[routes]]`).
    pub fn from_toml_str(content: &str) -> Result<(Self, Vec<String>), TableError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let doc: TableDoc = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((Self::new(doc.routes), ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        log!("warning"; "unknown fields in {}, ignoring:", path.display());
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // traversal
    // ========================================================================

    /// Visit every record depth-first with its parent.
    pub fn walk<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Route, Option<&'a Route>),
    {
        for route in &self.routes {
            route.walk(None, &mut visit);
        }
    }

    /// Total number of records, nested ones included.
    pub fn len(&self) -> usize {
        let mut count = 0;
        self.walk(|_, _| count += 1);
        count
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Well-formed keys of every record.
    pub fn keys(&self) -> KeySet {
        let mut keys = KeySet::default();
        self.walk(|route, _| {
            if let Some(key) = route.key() {
                keys.insert(key);
            }
        });
        keys
    }

    /// Every path declared in the tree.
    pub fn paths(&self) -> FxHashSet<&RoutePath> {
        let mut paths = FxHashSet::default();
        self.walk(|route, _| {
            paths.insert(&route.path);
        });
        paths
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::route::RouteComponent;

    /// A table shaped like a typical admin front end.
    pub(crate) const SAMPLE_JSON: &str = r#"[
        { "name": "root", "path": "/", "redirect": "/dashboard/analysis", "meta": { "title": "Root" } },
        {
            "name": "login",
            "path": "/login",
            "component": "blank",
            "meta": { "title": "Login", "dynamicPath": "/login/:module(pwd-login|code-login)?", "hide": true }
        },
        {
            "name": "dashboard",
            "path": "/dashboard",
            "redirect": "/dashboard/analysis",
            "component": "layout",
            "meta": { "title": "Dashboard", "icon": "mdi:monitor-dashboard", "order": 1 },
            "children": [
                { "name": "dashboard_analysis", "path": "/dashboard/analysis", "component": "self",
                  "meta": { "title": "Analysis", "requiresAuth": true } },
                { "name": "dashboard_workbench", "path": "/dashboard/workbench", "component": "self",
                  "meta": { "title": "Workbench", "requiresAuth": true, "permissions": ["super", "admin"] } }
            ]
        },
        {
            "name": "multi-menu",
            "path": "/multi-menu",
            "component": "layout",
            "meta": { "title": "Multi Menu", "order": 2 },
            "children": [
                {
                    "name": "multi-menu_first",
                    "path": "/multi-menu/first",
                    "component": "multi",
                    "meta": { "title": "First" },
                    "children": [
                        { "name": "multi-menu_first_second", "path": "/multi-menu/first/second",
                          "component": "self", "meta": { "title": "Second", "keepAlive": true } }
                    ]
                }
            ]
        },
        { "name": "about", "path": "/about", "component": "self",
          "meta": { "title": "About", "singleLayout": "layout", "order": 3 } },
        { "name": "not-found-page", "path": "/:pathMatch(.*)*", "component": "blank",
          "meta": { "title": "Not Found" } }
    ]"#;

    pub(crate) fn sample_table() -> RouteTable {
        RouteTable::from_json_str(SAMPLE_JSON).unwrap().0
    }

    #[test]
    fn test_from_json_array() {
        let (table, ignored) = RouteTable::from_json_str(SAMPLE_JSON).unwrap();
        assert!(ignored.is_empty(), "{ignored:?}");
        assert_eq!(table.routes.len(), 6);
        assert_eq!(table.len(), 10);
    }

    #[test]
    fn test_from_json_wrapped() {
        let content = format!("{{ \"routes\": {SAMPLE_JSON} }}");
        let (table, _) = RouteTable::from_json_str(&content).unwrap();
        assert_eq!(table, sample_table());
    }

    #[test]
    fn test_from_json_reports_unknown_fields() {
        let content = r#"[{ "name": "about", "path": "/about", "component": "self",
            "meta": { "title": "About", "badge": "new" }, "alias": "/info" }]"#;
        let (table, ignored) = RouteTable::from_json_str(content).unwrap();
        assert_eq!(table.routes.len(), 1);
        assert_eq!(ignored.len(), 2);
        assert!(ignored.iter().any(|f| f.contains("badge")));
        assert!(ignored.iter().any(|f| f.contains("alias")));
    }

    #[test]
    fn test_from_json_rejects_trailing_garbage() {
        assert!(RouteTable::from_json_str("[] []").is_err());
        assert!(RouteTable::from_json_str(r#"[{ "name": "x" }]"#).is_err());
    }

    #[test]
    fn test_from_toml() {
        let content = r#"
[[routes]]
name = "about"
path = "/about"
component = "self"
props = true
meta = { title = "About" }

[[routes]]
name = "dashboard"
path = "/dashboard"
component = "layout"

[routes.meta]
title = "Dashboard"

[[routes.children]]
name = "dashboard_analysis"
path = "/dashboard/analysis"
component = "self"
meta = { title = "Analysis" }
"#;
        let (table, ignored) = RouteTable::from_toml_str(content).unwrap();
        assert!(ignored.is_empty());
        assert_eq!(table.routes.len(), 2);
        assert_eq!(table.routes[1].children[0].component, Some(RouteComponent::SelfView));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_from_path_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json = dir.path().join("routes.json");
        fs::write(&json, SAMPLE_JSON).unwrap();
        let table = RouteTable::from_path(&json).unwrap();
        assert_eq!(table.source.as_deref(), Some(json.as_path()));
        assert_eq!(table.routes.len(), 6);

        let yaml = dir.path().join("routes.yaml");
        fs::write(&yaml, "").unwrap();
        assert!(matches!(
            RouteTable::from_path(&yaml),
            Err(TableError::UnsupportedFormat(_))
        ));

        assert!(matches!(
            RouteTable::from_path(&dir.path().join("missing.json")),
            Err(TableError::Io(..))
        ));
    }

    #[test]
    fn test_keys_and_paths() {
        let table = sample_table();
        let keys = table.keys();
        assert_eq!(keys.len(), 10);
        assert!(keys.contains("multi-menu_first_second"));

        let paths = table.paths();
        assert!(paths.contains(&RoutePath::new("/dashboard/analysis")));
        assert!(paths.contains(&RoutePath::new("/:pathMatch(.*)*")));
    }
}
