//! Local UI chrome state.
//!
//! Keeps transient presentation concerns (theme, open menus) out of domain
//! state so the task and profile data stay protocol-shaped.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for theme and the header profile dropdown.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub menu_open: bool,
}
