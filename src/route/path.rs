//! Route paths: projection from keys and the dynamic `:module` variants.
//!
//! | Key                       | Path                        |
//! |---------------------------|-----------------------------|
//! | `root`                    | `/`                         |
//! | `not-found-page`          | `/:pathMatch(.*)*`          |
//! | `dashboard_analysis`      | `/dashboard/analysis`       |
//! | `about-parent`            | `/about-parent`             |

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use super::key::{RouteKey, SPLIT_MARK, SystemKey};

/// Path of the `root` route.
pub const ROOT_PATH: &str = "/";

/// Path of the `not-found-page` route: matches anything.
pub const CATCH_ALL_PATH: &str = "/:pathMatch(.*)*";

/// Name of the optional routing parameter appended by dynamic paths.
pub const MODULE_PARAM: &str = ":module";

const SEPARATOR: char = '/';

// ============================================================================
// RoutePath
// ============================================================================

/// URL path of a route.
///
/// Loaded paths are kept verbatim; [`RoutePath::from_key`] is the only
/// constructor that guarantees a projected path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutePath(Arc<str>);

impl RoutePath {
    /// Wrap a path as written.
    pub fn new(path: &str) -> Self {
        Self(Arc::from(path))
    }

    /// Project a key onto its path.
    ///
    /// The first split mark becomes a separator and the remainder is projected
    /// the same way, so every split mark ends up as `/`.
    pub fn from_key(key: &RouteKey) -> Self {
        match key.system_key() {
            Some(SystemKey::Root) => Self::new(ROOT_PATH),
            Some(SystemKey::NotFoundPage) => Self::new(CATCH_ALL_PATH),
            _ => Self(Arc::from(project(key.as_str()))),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.as_str() == ROOT_PATH
    }

    #[inline]
    pub fn is_catch_all(&self) -> bool {
        self.as_str() == CATCH_ALL_PATH
    }

    /// Invert the projection.
    ///
    /// Returns `None` when the path is not the projection of a well-formed key.
    pub fn to_key(&self) -> Option<RouteKey> {
        if self.is_root() {
            return Some(SystemKey::Root.into());
        }
        if self.is_catch_all() {
            return Some(SystemKey::NotFoundPage.into());
        }
        let rest = self.0.strip_prefix(SEPARATOR)?;
        // `_` inside a segment would make the inversion ambiguous
        if rest.contains(SPLIT_MARK) {
            return None;
        }
        let key = RouteKey::parse(&rest.replace(SEPARATOR, &SPLIT_MARK.to_string())).ok()?;
        (key.to_path() == *self).then_some(key)
    }
}

/// `a_b_c` -> `/a/b/c`
fn project(key: &str) -> String {
    match key.split_once(SPLIT_MARK) {
        Some((left, right)) => format!("{SEPARATOR}{left}{}", project(right)),
        None => format!("{SEPARATOR}{key}"),
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for RoutePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoutePath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl Serialize for RoutePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RoutePath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(|s| Self(Arc::from(s)))
    }
}

/// Project a raw key string, `None` if the key is malformed.
pub fn key_to_path(key: &str) -> Option<RoutePath> {
    RouteKey::parse(key).ok().map(|k| k.to_path())
}

// ============================================================================
// DynamicPath
// ============================================================================

/// Why a string is not a dynamic path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("`{0}` has no `/:module` segment")]
    MissingParam(String),

    #[error("`{0}` has a malformed `:module` constraint")]
    MalformedConstraint(String),

    #[error("`{path}` has an invalid constraint pattern: {reason}")]
    InvalidPattern { path: String, reason: String },
}

/// Shape of the trailing `:module` segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleParam {
    /// `/:module`
    Required,
    /// `/:module(<pattern>)`
    Constrained(String),
    /// `/:module(<pattern>)?`
    Optional(String),
}

/// A base path extended with a `:module` routing parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicPath {
    pub base: RoutePath,
    pub param: ModuleParam,
}

impl DynamicPath {
    pub fn new(base: RoutePath, param: ModuleParam) -> Self {
        Self { base, param }
    }

    /// Recognize `<base>/:module`, `<base>/:module(<p>)` or `<base>/:module(<p>)?`.
    pub fn parse(raw: &str) -> Result<Self, PathError> {
        let marker = format!("{SEPARATOR}{MODULE_PARAM}");
        let pos = raw
            .rfind(&marker)
            .ok_or_else(|| PathError::MissingParam(raw.to_string()))?;
        let base = &raw[..pos];
        let rest = &raw[pos + marker.len()..];

        if base.is_empty() || !base.starts_with(SEPARATOR) {
            return Err(PathError::MissingParam(raw.to_string()));
        }

        let param = if rest.is_empty() {
            ModuleParam::Required
        } else if let Some(inner) = rest.strip_prefix('(').and_then(|r| r.strip_suffix(")?")) {
            ModuleParam::Optional(check_pattern(raw, inner)?)
        } else if let Some(inner) = rest.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
            ModuleParam::Constrained(check_pattern(raw, inner)?)
        } else {
            return Err(PathError::MalformedConstraint(raw.to_string()));
        };

        Ok(Self::new(RoutePath::new(base), param))
    }

    /// The three variants a dynamic base accepts, for a given pattern.
    pub fn variants(base: &RoutePath, pattern: &str) -> [DynamicPath; 3] {
        [
            Self::new(base.clone(), ModuleParam::Required),
            Self::new(base.clone(), ModuleParam::Constrained(pattern.to_string())),
            Self::new(base.clone(), ModuleParam::Optional(pattern.to_string())),
        ]
    }

    /// Whether a navigation path with or without a module segment is accepted.
    pub fn is_optional(&self) -> bool {
        matches!(self.param, ModuleParam::Optional(_))
    }

    pub fn to_path(&self) -> RoutePath {
        RoutePath(Arc::from(self.to_string()))
    }
}

fn check_pattern(raw: &str, pattern: &str) -> Result<String, PathError> {
    Regex::new(pattern).map_err(|e| PathError::InvalidPattern {
        path: raw.to_string(),
        reason: e.to_string(),
    })?;
    Ok(pattern.to_string())
}

impl fmt::Display for DynamicPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.param {
            ModuleParam::Required => write!(f, "{}{SEPARATOR}{MODULE_PARAM}", self.base),
            ModuleParam::Constrained(p) => {
                write!(f, "{}{SEPARATOR}{MODULE_PARAM}({p})", self.base)
            }
            ModuleParam::Optional(p) => {
                write!(f, "{}{SEPARATOR}{MODULE_PARAM}({p})?", self.base)
            }
        }
    }
}

// ============================================================================
// tests
// ============================================================================
