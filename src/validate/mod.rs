//! Route table validation.
//!
//! Every rule is checked and every violation collected; a table with any
//! error is rejected as a whole, never coerced into shape.
//!
//! | Rule                    | Checked on                                |
//! |-------------------------|-------------------------------------------|
//! | key well-formedness     | `name`                                    |
//! | key/path agreement      | `path` vs projection of `name`            |
//! | component structure     | `component` vs `children`                 |
//! | nesting                 | child `name` vs parent `name`             |
//! | redirect target         | `redirect` vs paths declared in the tree  |
//! | dynamic path            | `meta.dynamicPath`                        |
//! | roles                   | `meta.permissions`                        |
//! | uniqueness              | `name` and `path` across the tree         |

pub mod conflict;
mod diagnostic;

pub use diagnostic::{RouteDiagnostic, RouteDiagnostics, Violation};

use rustc_hash::FxHashSet;

use crate::route::{
    DynamicPath, KeySet, Route, RouteComponent, RouteKey, RoutePath, SPLIT_MARK,
};
use crate::table::RouteTable;
use crate::utils::plural_count;

/// Application-specific inputs to validation.
#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    /// Known roles; empty disables the role check.
    pub roles: Vec<String>,
    /// Paths whose `/:module` variants are legal.
    pub dynamic_bases: Vec<RoutePath>,
}

/// Checks a route table against the route contract.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    options: ValidateOptions,
}

/// Facts about the whole table that single-record rules need.
struct TableIndex<'a> {
    keys: KeySet,
    paths: FxHashSet<&'a RoutePath>,
}

impl Validator {
    pub fn new(options: ValidateOptions) -> Self {
        Self { options }
    }

    /// Validate every record of `table`.
    pub fn validate(&self, table: &RouteTable) -> RouteDiagnostics {
        let mut diag = RouteDiagnostics::new();
        let index = TableIndex {
            keys: table.keys(),
            paths: table.paths(),
        };

        table.walk(|route, parent| self.check_route(route, parent, &index, &mut diag));
        conflict::check_conflicts(table, &mut diag);

        diag
    }

    fn check_route(
        &self,
        route: &Route,
        parent: Option<&Route>,
        index: &TableIndex<'_>,
        diag: &mut RouteDiagnostics,
    ) {
        self.check_structure(route, diag);
        self.check_redirect(route, index, diag);
        self.check_roles(route, diag);
        check_meta_hints(route, index, diag);

        let key = match route.name.parse() {
            Ok(key) => key,
            Err(e) => {
                diag.push(
                    RouteDiagnostic::new(
                        route.name.as_str(),
                        route.path.as_str(),
                        Violation::MalformedKey,
                        e.to_string(),
                    )
                    .with_hint("segments are ASCII letters, digits or `-`, joined by `_`"),
                );
                return;
            }
        };

        self.check_path(route, &key, diag);
        self.check_dynamic_path(route, &key, diag);
        check_nesting(route, &key, parent, diag);
        check_parent_collision(route, &key, index, diag);
    }

    /// `path` must be the projection of `name`, or one of its dynamic variants.
    fn check_path(&self, route: &Route, key: &RouteKey, diag: &mut RouteDiagnostics) {
        let expected = key.to_path();
        if route.path == expected {
            return;
        }

        if let Ok(dynamic) = DynamicPath::parse(route.path.as_str())
            && dynamic.base == expected
            && self.is_dynamic_base(&expected)
        {
            return;
        }

        diag.push(
            RouteDiagnostic::new(
                route.name.as_str(),
                route.path.as_str(),
                Violation::PathMismatch,
                "path is not the projection of the key",
            )
            .with_hint(format!("expected `{expected}`")),
        );
    }

    fn check_dynamic_path(&self, route: &Route, key: &RouteKey, diag: &mut RouteDiagnostics) {
        let Some(raw) = &route.meta.dynamic_path else {
            return;
        };

        let error = |message: String| {
            RouteDiagnostic::new(
                route.name.as_str(),
                route.path.as_str(),
                Violation::InvalidDynamicPath,
                message,
            )
        };

        let dynamic = match DynamicPath::parse(raw) {
            Ok(dynamic) => dynamic,
            Err(e) => {
                diag.push(error(e.to_string()));
                return;
            }
        };

        let own = key.to_path();
        if dynamic.base != own {
            diag.push(
                error(format!("`{raw}` does not extend the route's own path"))
                    .with_hint(format!("expected `{own}/:module...`")),
            );
        } else if !self.is_dynamic_base(&own) {
            diag.push(
                error(format!("`{own}` is not a dynamic base"))
                    .with_hint(format!("add \"{own}\" to `schema.dynamic`")),
            );
        }
    }

    fn check_structure(&self, route: &Route, diag: &mut RouteDiagnostics) {
        match route.component {
            Some(RouteComponent::SelfView) if route.has_children() => diag.push(
                RouteDiagnostic::new(
                    route.name.as_str(),
                    route.path.as_str(),
                    Violation::SelfWithChildren,
                    format!(
                        "`self` component is a leaf but has {}",
                        plural_count(route.children.len(), "child route")
                    ),
                )
                .with_hint("use `layout` or `multi` for routes with children"),
            ),
            Some(RouteComponent::Multi) if !route.has_children() => diag.push(
                RouteDiagnostic::new(
                    route.name.as_str(),
                    route.path.as_str(),
                    Violation::MultiWithoutChildren,
                    "`multi` component has no child routes",
                )
                .with_hint("use `self` for leaf routes"),
            ),
            _ => {}
        }
    }

    fn check_redirect(&self, route: &Route, index: &TableIndex<'_>, diag: &mut RouteDiagnostics) {
        let Some(redirect) = &route.redirect else {
            return;
        };
        let message = if *redirect == route.path {
            format!("redirect target `{redirect}` is the route itself")
        } else if !index.paths.contains(redirect) {
            format!("redirect target `{redirect}` is not a route in this table")
        } else {
            return;
        };
        diag.error(
            route.name.as_str(),
            route.path.as_str(),
            Violation::DanglingRedirect,
            message,
        );
    }

    fn check_roles(&self, route: &Route, diag: &mut RouteDiagnostics) {
        if self.options.roles.is_empty() {
            return;
        }
        let Some(permissions) = &route.meta.permissions else {
            return;
        };
        for role in permissions {
            if !self.options.roles.contains(role) {
                diag.push(
                    RouteDiagnostic::new(
                        route.name.as_str(),
                        route.path.as_str(),
                        Violation::UnknownRole,
                        format!("unknown role `{role}`"),
                    )
                    .with_hint(format!("known roles: {}", self.options.roles.join(", "))),
                );
            }
        }
    }

    fn is_dynamic_base(&self, path: &RoutePath) -> bool {
        self.options.dynamic_bases.contains(path)
    }
}

/// A child must extend its parent's key, or be the route a synthesized
/// `<key>-parent` hosts.
fn check_nesting(
    route: &Route,
    key: &RouteKey,
    parent: Option<&Route>,
    diag: &mut RouteDiagnostics,
) {
    let Some(parent_key) = parent.and_then(Route::key) else {
        return;
    };
    if key.descends_from(&parent_key) || key.parent_key() == parent_key {
        return;
    }
    diag.push(
        RouteDiagnostic::new(
            route.name.as_str(),
            route.path.as_str(),
            Violation::ChildOutsideParent,
            format!("nested under `{parent_key}` but does not extend its key"),
        )
        .with_hint(format!(
            "name it `{parent_key}{SPLIT_MARK}{}`",
            key.segments().last().unwrap_or_default()
        )),
    );
}

/// A `<key>-parent` record must host `<key>`.
fn check_parent_collision(
    route: &Route,
    key: &RouteKey,
    index: &TableIndex<'_>,
    diag: &mut RouteDiagnostics,
) {
    let Some(base) = index.keys.synthesized_for(key) else {
        return;
    };
    if route.children.iter().any(|c| c.name.as_str() == base) {
        return;
    }
    diag.push(
        RouteDiagnostic::new(
            route.name.as_str(),
            route.path.as_str(),
            Violation::ParentCollision,
            format!("collides with the parent synthesized for `{base}`"),
        )
        .with_hint(format!("either nest `{base}` here or rename this route")),
    );
}

/// Legal but suspicious metadata.
fn check_meta_hints(route: &Route, index: &TableIndex<'_>, diag: &mut RouteDiagnostics) {
    let meta = &route.meta;
    if meta.title.trim().is_empty() {
        diag.warn(route.name.as_str(), "empty title");
    }
    if meta.permissions.is_some() && !meta.requires_auth() {
        diag.warn(
            route.name.as_str(),
            "permissions without requiresAuth are only checked after login",
        );
    }
    if meta.single_layout.is_some()
        && !route
            .key()
            .is_some_and(|key| index.keys.is_single_route(&key))
    {
        diag.warn(
            route.name.as_str(),
            "singleLayout has no effect on a route that is not a single route",
        );
    }
}

// ============================================================================
// tests
// ============================================================================
