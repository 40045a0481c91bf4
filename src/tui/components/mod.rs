//! # TUI Components
//!
//! This module contains all UI components for the form.
//!
//! ## Component Architecture
//!
//! Components follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as props:
//! - `Note`: the non-editable threshold hint row
//! - `ButtonRow`: Save/Quit buttons (focus is a prop; activation happens
//!   in the event loop)
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit typed events:
//! - `TextField`: single-line input with cursor and horizontal scrolling
//! - `DropdownState` / `DropdownOverlayState`: fixed-option selection
//!
//! ## Design Philosophy
//!
//! Each component file contains everything related to that component:
//! state types, event types, rendering, event handling, and tests. External
//! data arrives as props (struct fields synced each frame), never by
//! reaching into global state.
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── text_field.rs   (City / State inputs)
//! ├── dropdown.rs     (Month / Day / Year selectors + overlay)
//! ├── button_row.rs   (Save / Quit)
//! └── note.rs         (threshold hint)
//! ```

use ratatui::style::{Color, Style};
use ratatui::text::Span;

pub mod button_row;
pub mod dropdown;
pub mod note;
pub mod text_field;

pub use button_row::{ButtonId, ButtonRow, button_at};
pub use dropdown::{DropdownEvent, DropdownOverlay, DropdownOverlayState, DropdownState};
pub use note::Note;
pub use text_field::{FieldEvent, TextField};

/// Width of the label column, so field labels line up.
pub const LABEL_WIDTH: u16 = 7;

/// Render a field label padded to the shared label column width.
pub(crate) fn label_span(label: &str) -> Span<'static> {
    Span::styled(
        format!("{:<width$}", format!("{}:", label), width = LABEL_WIDTH as usize),
        Style::default().fg(Color::Yellow),
    )
}
