//! DOM Glue
//!
//! The few browser calls that are not expressed as Leptos markup.

/// Id of the optional `<script type="application/json">` config element
pub const CONFIG_ELEMENT_ID: &str = "todo-config";

/// Blocking alert
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window; alert dropped: {}", message);
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::warn!("alert failed: {:?}", e);
    }
}

/// Raw JSON of the page's config element, if it has one
pub fn config_source() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
        .filter(|text| !text.trim().is_empty())
}
