//! # Application State
//!
//! Core state for convarc. This module contains domain state only -
//! no TUI-specific types. Field buffers and dropdown selections are
//! presentation state and live in the `tui` module's components; nothing
//! ever reads them back into the core.
//!
//! ```text
//! App
//! └── status_message: String   // bottom help/status line text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

pub struct App {
    pub status_message: String,
}

impl App {
    pub fn new() -> Self {
        Self {
            status_message: String::new(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
