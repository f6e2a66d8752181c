//! Browser Helpers
//!
//! Thin wrappers over `window` dialogs and navigation. Failures are logged
//! and otherwise ignored; none of them should take the page down.

pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("[BROWSER] alert without window: {}", message);
        return;
    };
    if let Err(err) = window.alert_with_message(message) {
        log::error!("[BROWSER] alert failed: {:?}", err);
    }
}

/// `None` when the user dismisses the prompt
pub fn prompt(message: &str) -> Option<String> {
    let window = web_sys::window()?;
    match window.prompt_with_message(message) {
        Ok(answer) => answer,
        Err(err) => {
            log::error!("[BROWSER] prompt failed: {:?}", err);
            None
        }
    }
}

pub fn navigate(href: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().set_href(href) {
        log::error!("[BROWSER] navigation to {} failed: {:?}", href, err);
    }
}

pub fn pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}
