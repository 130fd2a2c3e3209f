use serde::{Deserialize, Serialize};

/// Id of the home tab. It is always open and can never be closed.
pub const MAIN_TAB_ID: &str = "main";

/// Request to open a tab, produced by menu entries and screen actions.
///
/// `group` only records which menu group the request came from so the menu can
/// expand it; it has no effect on tab behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDescriptor {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl TabDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            group: None,
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Returns the id if it is usable as a tab key (non-blank).
    pub fn resolved_id(&self) -> Option<&str> {
        let id = self.id.trim();
        if id.is_empty() {
            None
        } else {
            Some(id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_without_id_is_unresolved() {
        let descriptor: TabDescriptor =
            serde_json::from_str(r#"{"name": "Product"}"#).unwrap();
        assert_eq!(descriptor.resolved_id(), None);

        let blank = TabDescriptor::new("   ", "Blank");
        assert_eq!(blank.resolved_id(), None);
    }

    #[test]
    fn test_descriptor_group_roundtrip() {
        let descriptor = TabDescriptor::new("pi-product", "Product").with_group("production");
        let json = serde_json::to_string(&descriptor).unwrap();
        assert!(json.contains("\"group\":\"production\""));

        let plain = serde_json::to_string(&TabDescriptor::new("pi-product", "Product")).unwrap();
        assert!(!plain.contains("group"));
    }
}
