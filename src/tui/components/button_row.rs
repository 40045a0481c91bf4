//! # ButtonRow Component
//!
//! The Save and Quit buttons at the bottom of the form.
//!
//! Stateless in the props sense: which button (if any) is focused comes
//! from the form's focus ring each frame. Activation is decided by the
//! event loop, which maps the focused button to its `core::Action`; the
//! buttons themselves hold no callbacks.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::action::Action;
use crate::tui::component::Component;

/// The two form buttons, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonId {
    Save,
    Quit,
}

impl ButtonId {
    /// The command this button dispatches when activated.
    pub fn action(self) -> Action {
        match self {
            ButtonId::Save => Action::Save,
            ButtonId::Quit => Action::Quit,
        }
    }

    fn text(self) -> &'static str {
        match self {
            ButtonId::Save => "[ Save ]",
            ButtonId::Quit => "[ Quit ]",
        }
    }
}

// Column spans of each button within the row, relative to the row's left
// edge: "[ Save ]  [ Quit ]"
const SAVE_SPAN: (u16, u16) = (0, 8);
const QUIT_SPAN: (u16, u16) = (10, 18);

/// Which button sits under the given column offset (relative to the row).
pub fn button_at(col: u16) -> Option<ButtonId> {
    if (SAVE_SPAN.0..SAVE_SPAN.1).contains(&col) {
        Some(ButtonId::Save)
    } else if (QUIT_SPAN.0..QUIT_SPAN.1).contains(&col) {
        Some(ButtonId::Quit)
    } else {
        None
    }
}

/// Renders the button row; `focused` highlights the active button.
pub struct ButtonRow {
    pub focused: Option<ButtonId>,
}

impl ButtonRow {
    pub fn new() -> Self {
        Self { focused: None }
    }

    fn button_span(&self, id: ButtonId) -> Span<'static> {
        let style = if self.focused == Some(id) {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Black).bg(Color::Gray)
        };
        Span::styled(id.text(), style)
    }
}

impl Default for ButtonRow {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ButtonRow {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            self.button_span(ButtonId::Save),
            Span::raw("  "),
            self.button_span(ButtonId::Quit),
        ]);
        frame.render_widget(line, area);
    }
}
