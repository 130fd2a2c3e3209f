//! Small localStorage helpers for UI preferences.

use web_sys::window;

/// localStorage key of the sidebar-open preference
pub const SIDEBAR_OPEN_KEY: &str = "workspace_sidebar_open";

fn storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load_flag(key: &str) -> Option<bool> {
    storage()
        .and_then(|s| s.get_item(key).ok().flatten())
        .and_then(|v| parse_flag(&v))
}

pub fn save_flag(key: &str, value: bool) {
    if let Some(s) = storage() {
        if s.set_item(key, if value { "1" } else { "0" }).is_err() {
            log::warn!("storage: failed to persist '{}'", key);
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("false"), Some(false));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("yes"), None);
    }
}
