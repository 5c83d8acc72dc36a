//! Single routes and the parents synthesized around them.
//!
//! A layout is applied by nesting, so a top-level route without key-level
//! children needs an explicit parent that carries the layout:
//!
//! ```text
//! about            -> about-parent (layout) -> about (self)
//! /about           -> /about-parent         -> /about
//! ```
//!
//! Classification only looks at whether a key contains a split mark. A key
//! with none is a single route unless it is a system key or the first segment
//! of some split key (`dashboard` is the parent of `dashboard_analysis`).

use rustc_hash::FxHashSet;

use super::key::{PARENT_SUFFIX, RouteKey};
use super::path::RoutePath;

/// Synthesized parent of a single route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleRouteParent {
    /// `<child>-parent`
    pub key: RouteKey,
    /// Projection of `key`.
    pub path: RoutePath,
    /// The single route being wrapped.
    pub child: RouteKey,
}

impl SingleRouteParent {
    pub fn derive(child: &RouteKey) -> Self {
        let key = child.parent_key();
        let path = key.to_path();
        Self {
            key,
            path,
            child: child.clone(),
        }
    }
}

/// The set of keys a route table declares, with single/multi classification.
#[derive(Debug, Clone, Default)]
pub struct KeySet {
    /// Declaration order.
    keys: Vec<RouteKey>,
    index: FxHashSet<RouteKey>,
    multi_parents: FxHashSet<String>,
}

impl KeySet {
    pub fn new(keys: impl IntoIterator<Item = RouteKey>) -> Self {
        let mut set = Self::default();
        for key in keys {
            set.insert(key);
        }
        set
    }

    pub fn insert(&mut self, key: RouteKey) {
        if self.index.contains(&key) {
            return;
        }
        if key.is_multi() {
            self.multi_parents.insert(key.top_level().to_string());
        }
        self.index.insert(key.clone());
        self.keys.push(key);
    }

    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteKey> {
        self.keys.iter()
    }

    /// Whether `key` is the first segment of some split key in the set.
    pub fn is_multi_route_parent(&self, key: &RouteKey) -> bool {
        self.multi_parents.contains(key.as_str())
    }

    /// The key `key` was synthesized for, when `key` is `<base>-parent` and
    /// `base` is a single route of the set.
    pub fn synthesized_for<'a>(&self, key: &'a RouteKey) -> Option<&'a str> {
        key.as_str().strip_suffix(PARENT_SUFFIX).filter(|base| {
            self.index
                .get(*base)
                .is_some_and(|base| self.is_single_route(base))
        })
    }

    /// Whether `key` needs a synthesized parent.
    pub fn is_single_route(&self, key: &RouteKey) -> bool {
        !key.is_multi()
            && !key.is_system()
            && !self.is_multi_route_parent(key)
            && self.synthesized_for(key).is_none()
    }

    /// Single route keys, in declaration order.
    pub fn single_route_keys(&self) -> Vec<&RouteKey> {
        self.keys.iter().filter(|k| self.is_single_route(k)).collect()
    }

    /// Top-level keys of split keys, sorted.
    pub fn multi_route_parent_keys(&self) -> Vec<&str> {
        let mut parents: Vec<_> = self.multi_parents.iter().map(String::as_str).collect();
        parents.sort_unstable();
        parents
    }

    /// Parent derivation for `key`, `None` if it is not a single route.
    pub fn single_route_parent(&self, key: &RouteKey) -> Option<SingleRouteParent> {
        self.is_single_route(key).then(|| SingleRouteParent::derive(key))
    }

    pub fn single_route_parents(&self) -> Vec<SingleRouteParent> {
        self.single_route_keys()
            .into_iter()
            .map(SingleRouteParent::derive)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> KeySet {
        KeySet::new(
            [
                "root",
                "login",
                "not-found",
                "no-permission",
                "service-error",
                "not-found-page",
                "dashboard",
                "dashboard_analysis",
                "dashboard_workbench",
                "multi-menu",
                "multi-menu_first",
                "multi-menu_first_second",
                "about",
            ]
            .into_iter()
            .map(|k| RouteKey::parse(k).unwrap()),
        )
    }

    #[test]
    fn test_single_route_keys() {
        let keys = sample();
        let singles: Vec<_> = keys
            .single_route_keys()
            .into_iter()
            .map(RouteKey::as_str)
            .collect();
        assert_eq!(singles, vec!["about"]);
    }

    #[test]
    fn test_multi_route_parent_keys() {
        let keys = sample();
        assert_eq!(keys.multi_route_parent_keys(), vec!["dashboard", "multi-menu"]);
    }

    #[test]
    fn test_about_parent_example() {
        let keys = sample();
        let about = RouteKey::parse("about").unwrap();
        let parent = keys.single_route_parent(&about).unwrap();
        assert_eq!(parent.key.as_str(), "about-parent");
        assert_eq!(parent.path.as_str(), "/about-parent");
        assert_eq!(parent.child, about);
    }

    #[test]
    fn test_no_parent_for_system_or_multi_keys() {
        let keys = sample();
        for raw in ["root", "login", "not-found-page", "dashboard", "dashboard_analysis"] {
            let key = RouteKey::parse(raw).unwrap();
            assert!(keys.single_route_parent(&key).is_none(), "{raw}");
        }
    }

    #[test]
    fn test_parents_are_distinct_from_existing() {
        let keys = sample();
        let paths: FxHashSet<_> = keys.iter().map(RouteKey::to_path).collect();
        for parent in keys.single_route_parents() {
            assert!(!keys.contains(parent.key.as_str()));
            assert!(!paths.contains(&parent.path));
        }
    }

    #[test]
    fn test_split_key_without_declared_parent_still_classifies() {
        // `orphan` is never declared, yet `orphan_child` makes it a multi parent
        let keys = KeySet::new(
            ["orphan_child", "orphan"]
                .into_iter()
                .map(|k| RouteKey::parse(k).unwrap()),
        );
        let orphan = RouteKey::parse("orphan").unwrap();
        assert!(keys.is_multi_route_parent(&orphan));
        assert!(!keys.is_single_route(&orphan));
    }

    #[test]
    fn test_existing_wrapper_is_not_single() {
        let keys = KeySet::new(
            ["about-parent", "about", "contact-parent"]
                .into_iter()
                .map(|k| RouteKey::parse(k).unwrap()),
        );
        let wrapper = RouteKey::parse("about-parent").unwrap();
        assert_eq!(keys.synthesized_for(&wrapper), Some("about"));
        assert!(!keys.is_single_route(&wrapper));

        // no `contact` in the set, so this is an ordinary key
        let lone = RouteKey::parse("contact-parent").unwrap();
        assert!(keys.synthesized_for(&lone).is_none());
        assert!(keys.is_single_route(&lone));
    }

    #[test]
    fn test_parent_suffix_of_non_single_key_is_ordinary() {
        let keys = KeySet::new(
            ["dashboard", "dashboard_analysis", "dashboard-parent", "login", "login-parent"]
                .into_iter()
                .map(|k| RouteKey::parse(k).unwrap()),
        );
        for raw in ["dashboard-parent", "login-parent"] {
            let key = RouteKey::parse(raw).unwrap();
            assert!(keys.synthesized_for(&key).is_none(), "{raw}");
            assert!(keys.is_single_route(&key), "{raw}");
            assert_eq!(
                keys.single_route_parent(&key).unwrap().key.as_str(),
                format!("{raw}-parent")
            );
        }
    }

    #[test]
    fn test_insert_deduplicates() {
        let mut keys = KeySet::default();
        keys.insert(RouteKey::parse("about").unwrap());
        keys.insert(RouteKey::parse("about").unwrap());
        assert_eq!(keys.len(), 1);
    }
}
