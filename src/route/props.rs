//! Props handed to a route's view.
//!
//! Three mutually exclusive shapes:
//!
//! | Shape      | Written as          | Props passed to the view          |
//! |------------|---------------------|-----------------------------------|
//! | `Flag`     | `true` / `false`    | route params, or nothing          |
//! | `Static`   | `{ "k": v, ... }`   | the mapping as-is                 |
//! | `Computed` | code only           | result of a function of the target|

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value as JsonValue};

/// Props mapping passed to a view.
pub type PropsMap = Map<String, JsonValue>;

/// Function computing props from the navigation target.
pub type PropsFn = Arc<dyn Fn(&NavigationTarget) -> PropsMap + Send + Sync>;

/// Where a navigation is heading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationTarget {
    pub path: String,
    pub params: BTreeMap<String, String>,
    pub query: BTreeMap<String, String>,
}

impl NavigationTarget {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }
}

#[derive(Clone)]
pub enum RouteProps {
    Flag(bool),
    Static(PropsMap),
    Computed(PropsFn),
}

impl RouteProps {
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&NavigationTarget) -> PropsMap + Send + Sync + 'static,
    {
        Self::Computed(Arc::new(f))
    }

    /// Props for a navigation to `to`, `None` when the view gets none.
    pub fn resolve(&self, to: &NavigationTarget) -> Option<PropsMap> {
        match self {
            Self::Flag(false) => None,
            Self::Flag(true) => Some(
                to.params
                    .iter()
                    .map(|(k, v)| (k.clone(), JsonValue::String(v.clone())))
                    .collect(),
            ),
            Self::Static(map) => Some(map.clone()),
            Self::Computed(f) => Some(f(to)),
        }
    }
}

impl fmt::Debug for RouteProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(b) => f.debug_tuple("Flag").field(b).finish(),
            Self::Static(map) => f.debug_tuple("Static").field(map).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl PartialEq for RouteProps {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Flag(a), Self::Flag(b)) => a == b,
            (Self::Static(a), Self::Static(b)) => a == b,
            (Self::Computed(a), Self::Computed(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Serialize for RouteProps {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Flag(b) => serializer.serialize_bool(*b),
            Self::Static(map) => map.serialize(serializer),
            Self::Computed(_) => Err(serde::ser::Error::custom(
                "computed props cannot be serialized",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for RouteProps {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PropsVisitor;

        impl<'de> Visitor<'de> for PropsVisitor {
            type Value = RouteProps;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a boolean or a props mapping")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(RouteProps::Flag(v))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = PropsMap::new();
                while let Some((k, v)) = access.next_entry::<String, JsonValue>()? {
                    map.insert(k, v);
                }
                Ok(RouteProps::Static(map))
            }
        }

        deserializer.deserialize_any(PropsVisitor)
    }
}
