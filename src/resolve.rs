//! Router-ready route tables.
//!
//! Layouts are applied by nesting, so every top-level single route gets
//! wrapped in the parent it implies:
//!
//! ```text
//! about (self)  ->  about-parent (layout, redirect /about)
//!                   └── about (self)
//! ```

use crate::route::{KeySet, Route, RouteComponent, RouteMeta, SingleLayout, SingleRouteParent};
use crate::table::RouteTable;

#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions {
    /// Wrapper layout when a single route sets no `singleLayout`.
    pub default_layout: SingleLayout,
}

/// Wrap top-level single routes, pass everything else through.
///
/// Expects a validated table; records with malformed keys are passed
/// through untouched.
pub fn resolve(table: &RouteTable, options: &ResolveOptions) -> Vec<Route> {
    let keys = table.keys();
    table
        .routes
        .iter()
        .map(|route| wrap_single(route, &keys, options).unwrap_or_else(|| route.clone()))
        .collect()
}

fn wrap_single(route: &Route, keys: &KeySet, options: &ResolveOptions) -> Option<Route> {
    let key = route.key()?;
    let parent = keys.single_route_parent(&key)?;
    Some(wrap(route, &parent, options))
}

fn wrap(route: &Route, parent: &SingleRouteParent, options: &ResolveOptions) -> Route {
    let layout = route.meta.single_layout.unwrap_or(options.default_layout);
    let meta = RouteMeta {
        hide: route.meta.hide,
        ..RouteMeta::new(route.meta.title.clone())
    };

    Route::new(&parent.key, meta)
        .with_component(RouteComponent::from(layout))
        .with_redirect(route.path.clone())
        .with_children(vec![route.clone()])
}
