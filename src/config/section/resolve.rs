//! `[resolve]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [resolve]
//! layout = "layout"           # Layout of synthesized parents: layout | blank
//! ```

use serde::{Deserialize, Serialize};

use crate::route::SingleLayout;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    /// Used when a single route sets no `meta.singleLayout`.
    pub layout: SingleLayout,
}
