//! Route keys and their well-formedness rules.
//!
//! A key is either one of the fixed [`SystemKey`] literals or an application
//! key made of one or more segments joined by [`SPLIT_MARK`]:
//!
//! ```text
//! dashboard                 -> ["dashboard"]
//! dashboard_analysis        -> ["dashboard", "analysis"]
//! multi-menu_first_second   -> ["multi-menu", "first", "second"]
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use super::path::RoutePath;

/// Separator between the segments of a multi-level key.
pub const SPLIT_MARK: char = '_';

/// Suffix appended to a single route key to name its synthesized parent.
pub const PARENT_SUFFIX: &str = "-parent";

// ============================================================================
// SystemKey
// ============================================================================

/// Fixed keys every route table may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemKey {
    Root,
    Login,
    NotFound,
    NoPermission,
    ServiceError,
    /// Catches every path no other route matched.
    NotFoundPage,
}

impl SystemKey {
    pub const ALL: [SystemKey; 6] = [
        Self::Root,
        Self::Login,
        Self::NotFound,
        Self::NoPermission,
        Self::ServiceError,
        Self::NotFoundPage,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Login => "login",
            Self::NotFound => "not-found",
            Self::NoPermission => "no-permission",
            Self::ServiceError => "service-error",
            Self::NotFoundPage => "not-found-page",
        }
    }

    pub fn lookup(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

impl fmt::Display for SystemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// KeyError
// ============================================================================

/// Why a string is not a well-formed route key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("route key is empty")]
    Empty,

    #[error("route key `{key}` has an empty segment at position {index}")]
    EmptySegment { key: String, index: usize },

    #[error("route key `{key}` contains illegal character `{ch}`")]
    IllegalChar { key: String, ch: char },
}

// ============================================================================
// RouteKey
// ============================================================================

/// A well-formed route key.
///
/// Invariants:
/// - Never empty
/// - Segments are non-empty and contain only ASCII alphanumerics and `-`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteKey(Arc<str>);

impl RouteKey {
    /// Parse and check a key.
    pub fn parse(raw: &str) -> Result<Self, KeyError> {
        if raw.is_empty() {
            return Err(KeyError::Empty);
        }

        for (index, segment) in raw.split(SPLIT_MARK).enumerate() {
            if segment.is_empty() {
                return Err(KeyError::EmptySegment {
                    key: raw.to_string(),
                    index,
                });
            }
            if let Some(ch) = segment.chars().find(|c| !is_segment_char(*c)) {
                return Err(KeyError::IllegalChar {
                    key: raw.to_string(),
                    ch,
                });
            }
        }

        Ok(Self(Arc::from(raw)))
    }

    /// Key of a fixed system route.
    pub fn system(key: SystemKey) -> Self {
        Self(Arc::from(key.as_str()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The system literal this key names, if any.
    pub fn system_key(&self) -> Option<SystemKey> {
        SystemKey::lookup(&self.0)
    }

    #[inline]
    pub fn is_system(&self) -> bool {
        self.system_key().is_some()
    }

    /// Whether the key contains at least one split mark.
    #[inline]
    pub fn is_multi(&self) -> bool {
        self.0.contains(SPLIT_MARK)
    }

    /// Split-mark-delimited segments, in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SPLIT_MARK)
    }

    /// Number of levels this key spans (`a_b_c` -> 3).
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Split at the first split mark: top-level parent and remainder.
    ///
    /// `multi-menu_first_second` -> `("multi-menu", Some("first_second"))`
    pub fn split_first(&self) -> (&str, Option<&str>) {
        match self.0.split_once(SPLIT_MARK) {
            Some((left, right)) => (left, Some(right)),
            None => (&self.0, None),
        }
    }

    /// Key of the top-level route this key lives under.
    pub fn top_level(&self) -> &str {
        self.split_first().0
    }

    /// Whether `self` is `ancestor` extended by one or more segments.
    pub fn descends_from(&self, ancestor: &RouteKey) -> bool {
        self.0
            .strip_prefix(ancestor.as_str())
            .is_some_and(|rest| rest.starts_with(SPLIT_MARK) && rest.len() > 1)
    }

    /// Key of the synthesized parent hosting this route's layout.
    pub fn parent_key(&self) -> RouteKey {
        Self(Arc::from(format!("{}{PARENT_SUFFIX}", self.0)))
    }

    /// Project this key onto its URL path.
    pub fn to_path(&self) -> RoutePath {
        RoutePath::from_key(self)
    }
}

/// Characters allowed inside a key segment.
#[inline]
fn is_segment_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for RouteKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RouteKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SystemKey> for RouteKey {
    fn from(key: SystemKey) -> Self {
        Self::system(key)
    }
}

impl std::str::FromStr for RouteKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for RouteKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Raw key as written in a route table.
///
/// Loading keeps the text as-is so that malformed keys surface as
/// diagnostics from validation instead of aborting deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RawKey(pub String);

impl RawKey {
    pub fn parse(&self) -> Result<RouteKey, KeyError> {
        RouteKey::parse(&self.0)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RawKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<RouteKey> for RawKey {
    fn from(key: RouteKey) -> Self {
        Self(key.as_str().to_string())
    }
}

impl Serialize for RawKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RawKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self)
    }
}

// ============================================================================
// tests
// ============================================================================
