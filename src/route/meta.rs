//! Per-route metadata consumed by menus, breadcrumbs and the permission guard.

use serde::{Deserialize, Serialize};

use super::component::SingleLayout;

/// Metadata attached to every route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
    /// Document title and menu label.
    pub title: String,

    /// `<path>/:module` variant the route also answers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_path: Option<String>,

    /// Layout of the parent synthesized when the route is a single route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_layout: Option<SingleLayout>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_auth: Option<bool>,

    /// Roles allowed to visit the route. `None` means any role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,

    /// Cache the page when navigating away.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blank_layout: Option<bool>,

    /// Icon shown in menus and breadcrumbs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Hidden from menus, still routable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide: Option<bool>,

    /// Menu sort order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl RouteMeta {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn requires_auth(&self) -> bool {
        self.requires_auth.unwrap_or(false)
    }

    /// Whether `role` may see this route.
    pub fn allows(&self, role: &str) -> bool {
        match &self.permissions {
            None => true,
            Some(roles) => roles.iter().any(|r| r == role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_camel_case_fields() {
        let meta: RouteMeta = serde_json::from_str(
            r#"{
                "title": "login",
                "dynamicPath": "/login/:module(pwd-login|code-login)?",
                "singleLayout": "blank",
                "requiresAuth": true,
                "keepAlive": true,
                "blankLayout": true,
                "order": 3
            }"#,
        )
        .unwrap();
        assert_eq!(meta.single_layout, Some(SingleLayout::Blank));
        assert!(meta.requires_auth());
        assert_eq!(meta.keep_alive, Some(true));
        assert_eq!(meta.order, Some(3));
        assert_eq!(
            meta.dynamic_path.as_deref(),
            Some("/login/:module(pwd-login|code-login)?")
        );
    }

    #[test]
    fn test_meta_requires_title() {
        assert!(serde_json::from_str::<RouteMeta>(r#"{"icon": "home"}"#).is_err());
    }

    #[test]
    fn test_meta_omits_unset_fields() {
        let json = serde_json::to_string(&RouteMeta::new("about")).unwrap();
        assert_eq!(json, r#"{"title":"about"}"#);
    }

    #[test]
    fn test_allows() {
        let open = RouteMeta::new("open");
        assert!(open.allows("user"));

        let restricted = RouteMeta {
            permissions: Some(vec!["super".into(), "admin".into()]),
            ..RouteMeta::new("restricted")
        };
        assert!(restricted.allows("admin"));
        assert!(!restricted.allows("user"));

        let nobody = RouteMeta {
            permissions: Some(Vec::new()),
            ..RouteMeta::new("nobody")
        };
        assert!(!nobody.allows("super"));
    }
}
