//! `[schema]` section configuration.
//!
//! Application-specific parts of the route contract.
//!
//! # Example
//!
//! ```toml
//! [schema]
//! roles = ["super", "admin", "user"]   # known roles, empty = unchecked
//! dynamic = ["/login"]                 # paths accepting `/:module` variants
//! ```

use serde::{Deserialize, Serialize};

use crate::config::FieldPath;
use crate::route::{RoutePath, SystemKey};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Role identifiers `meta.permissions` may reference.
    pub roles: Vec<String>,

    /// Base paths whose `/:module` variants are legal route paths.
    pub dynamic: Vec<String>,
}

impl SchemaConfig {
    pub const ROLES: FieldPath = FieldPath::new("schema.roles");
    pub const DYNAMIC: FieldPath = FieldPath::new("schema.dynamic");

    /// Dynamic bases as route paths.
    pub fn dynamic_bases(&self) -> Vec<RoutePath> {
        self.dynamic.iter().map(|p| RoutePath::new(p)).collect()
    }

    pub fn validate(&self, errors: &mut Vec<(FieldPath, String)>) {
        for role in &self.roles {
            if role.trim().is_empty() {
                errors.push((Self::ROLES, "role identifiers must not be empty".into()));
            }
        }
        for base in &self.dynamic {
            if !base.starts_with('/') {
                errors.push((Self::DYNAMIC, format!("`{base}` must start with `/`")));
            } else if base.len() > 1 && base.ends_with('/') {
                errors.push((Self::DYNAMIC, format!("`{base}` must not end with `/`")));
            }
        }
    }
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            roles: Vec::new(),
            dynamic: vec![format!("/{}", SystemKey::Login)],
        }
    }
}
