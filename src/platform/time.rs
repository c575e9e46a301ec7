//! Human-readable submission timestamps

/// Current local date and time, formatted for display
#[cfg(target_arch = "wasm32")]
pub fn timestamp() -> String {
    let locale = web_sys::window()
        .and_then(|w| w.navigator().language())
        .unwrap_or_else(|| "en-US".to_string());
    let now = js_sys::Date::new_0();
    String::from(now.to_locale_string(&locale, &wasm_bindgen::JsValue::UNDEFINED))
}

/// Current local date and time, formatted like the browser's en-US default
#[cfg(not(target_arch = "wasm32"))]
pub fn timestamp() -> String {
    chrono::Local::now()
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_not_empty() {
        let ts = timestamp();
        assert!(!ts.is_empty());
        assert!(ts.contains('/'));
    }
}
