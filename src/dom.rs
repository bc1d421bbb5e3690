//! DOM Helpers
//!
//! Event delegation over injected markup and environment readings.

use wasm_bindgen::JsCast;

/// Nearest ancestor-or-self of the event target matching `selector`
pub fn closest(ev: &web_sys::Event, selector: &str) -> Option<web_sys::Element> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    target.closest(selector).ok().flatten()
}

/// `attribute` of the nearest element matching `selector`
pub fn closest_attribute(ev: &web_sys::Event, selector: &str, attribute: &str) -> Option<String> {
    closest(ev, selector)?.get_attribute(attribute)
}

/// Whether the event target itself matches `selector`
pub fn target_matches(ev: &web_sys::Event, selector: &str) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.matches(selector).ok())
        .unwrap_or(false)
}

/// Elements under `root` matching `selector`, in document order
pub fn query_all(root: &web_sys::Element, selector: &str) -> Vec<web_sys::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// Add or remove one class token in place
pub fn set_class(element: &web_sys::Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        log::debug!("Failed to toggle class '{}': {:?}", class, err);
    }
}

/// Section id from an anchor `href` such as `#about` or `/index.html#about`
pub fn href_target(href: &str) -> Option<&str> {
    href.split('#').nth(1).filter(|id| !id.is_empty())
}

/// Viewport width in CSS pixels; unknown widths count as wide
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(f64::INFINITY)
}

pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}
