//! Dark mode preference: read, apply, toggle.
//!
//! Stores the choice in `localStorage` and reflects it as a `data-theme`
//! attribute on the `<html>` element. SSR paths no-op so server rendering
//! stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const THEME_KEY: &str = "taskdeck_dark";

#[cfg(feature = "hydrate")]
fn stored_preference() -> Option<bool> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
    let value = storage.get_item(THEME_KEY).ok().flatten()?;
    Some(value == "true")
}

#[cfg(feature = "hydrate")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|mq| mq.matches())
}

/// Stored preference, or the system preference when none is stored.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        stored_preference().unwrap_or_else(system_prefers_dark)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Reflect the choice on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the mode, apply it, and persist the new choice.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(THEME_KEY, if next { "true" } else { "false" });
        }
    }
    next
}
