//! Typing Effect Widget
//!
//! Optional `window.ityped` collaborator. When it is missing or fails, the
//! placeholder shows the first string as static text.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::models::HomeConfig;
use crate::render::typing_fallback;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ityped, js_name = init, catch)]
    fn ityped_init(target: &web_sys::Element, options: JsValue) -> Result<(), JsValue>;
}

#[derive(Serialize)]
struct TypingOptions<'a> {
    strings: &'a [String],
    #[serde(rename = "loop")]
    looping: bool,
}

fn widget_available() -> bool {
    web_sys::window()
        .and_then(|window| js_sys::Reflect::get(&window, &JsValue::from_str("ityped")).ok())
        .map(|widget| widget.is_object())
        .unwrap_or(false)
}

/// Start the typing effect in `target`. Returns whether the widget runs.
pub fn start(target: &web_sys::Element, home: &HomeConfig) -> bool {
    let Some(fallback) = typing_fallback(home) else {
        return false;
    };
    let strings = &home.typing_text;

    if widget_available() {
        let options = TypingOptions { strings, looping: true };
        match serde_wasm_bindgen::to_value(&options) {
            Ok(options) => match ityped_init(target, options) {
                Ok(()) => return true,
                Err(e) => log::warn!("iTyped initialization failed, using fallback text: {:?}", e),
            },
            Err(e) => log::warn!("Could not encode typing options: {}", e),
        }
    } else {
        log::debug!("iTyped not loaded, using fallback text");
    }

    if target.text_content().unwrap_or_default().trim().is_empty() {
        target.set_text_content(Some(fallback));
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_options_shape() {
        let strings = vec!["Developer".to_string(), "Writer".to_string()];
        let options = TypingOptions { strings: &strings, looping: true };

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({"strings": ["Developer", "Writer"], "loop": true})
        );
    }
}
