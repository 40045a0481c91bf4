//! # Note Component
//!
//! Non-editable, non-focusable help text row. The form uses it for the
//! threshold hint under the date dropdowns.
//!
//! Purely presentational - it receives everything as props and holds no
//! state, so the focus ring skips it entirely.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::tui::component::Component;
use crate::tui::components::{LABEL_WIDTH, label_span};

pub struct Note {
    pub label: &'static str,
    pub text: &'static str,
}

impl Note {
    pub fn new(label: &'static str, text: &'static str) -> Self {
        Self { label, text }
    }
}

impl Component for Note {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [label_area, text_area] =
            Layout::horizontal([Constraint::Length(LABEL_WIDTH + 1), Constraint::Min(0)])
                .areas(area);

        frame.render_widget(label_span(self.label), label_area);
        frame.render_widget(
            Span::styled(self.text, Style::default().fg(Color::Gray)),
            text_area,
        );
    }
}
