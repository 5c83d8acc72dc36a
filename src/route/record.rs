//! The route record and tree traversal.

use serde::{Deserialize, Serialize};

use super::component::RouteComponent;
use super::key::{RawKey, RouteKey};
use super::meta::RouteMeta;
use super::path::RoutePath;
use super::props::RouteProps;

/// A route record, as written in a route table or returned by a backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Unique identifier.
    pub name: RawKey,

    pub path: RoutePath,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<RoutePath>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<RouteComponent>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Route>,

    pub meta: RouteMeta,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<RouteProps>,
}

impl Route {
    /// Record whose path is the projection of `key`.
    pub fn new(key: &RouteKey, meta: RouteMeta) -> Self {
        Self {
            name: key.clone().into(),
            path: key.to_path(),
            redirect: None,
            component: None,
            children: Vec::new(),
            meta,
            props: None,
        }
    }

    pub fn with_component(mut self, component: RouteComponent) -> Self {
        self.component = Some(component);
        self
    }

    pub fn with_redirect(mut self, redirect: RoutePath) -> Self {
        self.redirect = Some(redirect);
        self
    }

    pub fn with_children(mut self, children: Vec<Route>) -> Self {
        self.children = children;
        self
    }

    pub fn with_props(mut self, props: RouteProps) -> Self {
        self.props = Some(props);
        self
    }

    /// Parsed key, `None` if the name is malformed.
    pub fn key(&self) -> Option<RouteKey> {
        self.name.parse().ok()
    }

    #[inline]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Visit this record and every descendant, depth-first, pre-order.
    ///
    /// The callback receives the parent of each visited record.
    pub fn walk<'a, F>(&'a self, parent: Option<&'a Route>, visit: &mut F)
    where
        F: FnMut(&'a Route, Option<&'a Route>),
    {
        visit(self, parent);
        for child in &self.children {
            child.walk(Some(self), visit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> RouteKey {
        RouteKey::parse(s).unwrap()
    }

    #[test]
    fn test_new_projects_path() {
        let route = Route::new(&key("dashboard_analysis"), RouteMeta::new("analysis"));
        assert_eq!(route.path.as_str(), "/dashboard/analysis");
        assert_eq!(route.name.as_str(), "dashboard_analysis");
        assert_eq!(route.key(), Some(key("dashboard_analysis")));
    }

    #[test]
    fn test_walk_visits_preorder_with_parents() {
        let tree = Route::new(&key("multi-menu"), RouteMeta::new("multi"))
            .with_component(RouteComponent::Layout)
            .with_children(vec![
                Route::new(&key("multi-menu_first"), RouteMeta::new("first"))
                    .with_component(RouteComponent::Multi)
                    .with_children(vec![Route::new(
                        &key("multi-menu_first_second"),
                        RouteMeta::new("second"),
                    )]),
            ]);

        let mut seen = Vec::new();
        tree.walk(None, &mut |route, parent| {
            seen.push((
                route.name.as_str().to_string(),
                parent.map(|p| p.name.as_str().to_string()),
            ));
        });

        assert_eq!(
            seen,
            vec![
                ("multi-menu".to_string(), None),
                ("multi-menu_first".to_string(), Some("multi-menu".to_string())),
                (
                    "multi-menu_first_second".to_string(),
                    Some("multi-menu_first".to_string())
                ),
            ]
        );
    }

    #[test]
    fn test_deserialize_backend_record() {
        let route: Route = serde_json::from_str(
            r#"{
                "name": "dashboard",
                "path": "/dashboard",
                "redirect": "/dashboard/analysis",
                "component": "layout",
                "children": [
                    {
                        "name": "dashboard_analysis",
                        "path": "/dashboard/analysis",
                        "component": "self",
                        "meta": { "title": "analysis", "requiresAuth": true }
                    }
                ],
                "meta": { "title": "dashboard", "icon": "mdi:monitor-dashboard", "order": 1 }
            }"#,
        )
        .unwrap();

        assert_eq!(route.component, Some(RouteComponent::Layout));
        assert_eq!(route.children.len(), 1);
        assert_eq!(route.children[0].component, Some(RouteComponent::SelfView));
        assert!(route.children[0].meta.requires_auth());
        assert!(route.props.is_none());
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let route = Route::new(&key("about"), RouteMeta::new("about"))
            .with_component(RouteComponent::SelfView)
            .with_props(RouteProps::Flag(true));
        let json = serde_json::to_string(&route).unwrap();
        assert_eq!(
            json,
            r#"{"name":"about","path":"/about","component":"self","meta":{"title":"about"},"props":true}"#
        );
    }
}
