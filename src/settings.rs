//! Board settings
//!
//! Read from LocalStorage (separate key from the feedback list), falling
//! back to defaults.

use serde::{Deserialize, Serialize};

use crate::pagination::PAGE_SIZE;
use crate::persistence::STORAGE_KEY;
use crate::validate::EmailRule;

/// How long the success banner stays up
pub const SUCCESS_BANNER_MS: u32 = 3000;

/// Feedback board settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Records per page
    pub page_size: usize,
    /// Email check applied on submit
    pub email_rule: EmailRule,
    /// Storage key holding the feedback list
    pub storage_key: String,
    /// Success banner auto-hide delay (ms)
    pub success_banner_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            email_rule: EmailRule::AtAndDot,
            storage_key: STORAGE_KEY.to_string(),
            success_banner_ms: SUCCESS_BANNER_MS,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "feedback_board_settings";

    /// Parse settings JSON, falling back to defaults for bad input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(mut settings) => {
                settings.page_size = settings.page_size.max(1);
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.page_size, 5);
        assert_eq!(settings.email_rule, EmailRule::AtAndDot);
        assert_eq!(settings.storage_key, "feedbacks");
        assert_eq!(settings.success_banner_ms, 3000);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{"email_rule":"AtOnly"}"#);
        assert_eq!(settings.email_rule, EmailRule::AtOnly);
        assert_eq!(settings.page_size, PAGE_SIZE);
    }

    #[test]
    fn test_bad_json_uses_defaults() {
        assert_eq!(Settings::from_json("nope"), Settings::default());
        assert_eq!(Settings::from_json(r#"{"page_size":0}"#).page_size, 1);
    }
}
