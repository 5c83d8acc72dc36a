//! Layout component tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which layout wrapper renders a route node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteComponent {
    /// Shared chrome (header, sidebar, tabs).
    Layout,
    /// No chrome.
    Blank,
    /// Intermediate layout for routes nested three or more levels deep.
    Multi,
    /// Leaf rendering its own view; never has children.
    #[serde(rename = "self")]
    SelfView,
}

impl RouteComponent {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Layout => "layout",
            Self::Blank => "blank",
            Self::Multi => "multi",
            Self::SelfView => "self",
        }
    }

    /// Whether this component may appear as a `singleLayout`.
    pub const fn is_single_layout(self) -> bool {
        matches!(self, Self::Layout | Self::Blank)
    }
}

impl fmt::Display for RouteComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Layout of the parent synthesized around a single route.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SingleLayout {
    #[default]
    Layout,
    Blank,
}

impl From<SingleLayout> for RouteComponent {
    fn from(layout: SingleLayout) -> Self {
        match layout {
            SingleLayout::Layout => Self::Layout,
            SingleLayout::Blank => Self::Blank,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_serde_names() {
        let parsed: Vec<RouteComponent> =
            serde_json::from_str(r#"["layout", "blank", "multi", "self"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                RouteComponent::Layout,
                RouteComponent::Blank,
                RouteComponent::Multi,
                RouteComponent::SelfView
            ]
        );
        for c in parsed {
            assert_eq!(serde_json::to_string(&c).unwrap(), format!("\"{c}\""));
        }
    }

    #[test]
    fn test_single_layout_rejects_other_components() {
        assert!(serde_json::from_str::<SingleLayout>("\"multi\"").is_err());
        assert!(serde_json::from_str::<SingleLayout>("\"self\"").is_err());
        assert_eq!(
            RouteComponent::from(SingleLayout::Blank),
            RouteComponent::Blank
        );
        assert!(RouteComponent::Blank.is_single_layout());
        assert!(!RouteComponent::Multi.is_single_layout());
    }
}
