//! # TextField Component
//!
//! Single-line labeled text input for the City and State fields.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Scroll horizontally when the buffer outgrows the field width
//! - Place the terminal cursor when focused
//!
//! ## State Management
//!
//! The buffer, cursor byte offset, and scroll offset are internal state.
//! `focused` is a prop synced from the form's focus ring each frame.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use unicode_width::UnicodeWidthChar;

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{LABEL_WIDTH, label_span};
use crate::tui::event::TuiEvent;

/// Visible width of the input area, in terminal cells.
pub const FIELD_WIDTH: u16 = 30;

/// High-level events emitted by a TextField.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// Text content or cursor position changed.
    ContentChanged,
}

/// Single-line text input with a left-aligned label.
///
/// # Props
///
/// - `focused`: whether this field currently owns the terminal cursor
///
/// # State
///
/// - `buffer`: current text
/// - `cursor`: byte offset into `buffer` (always on a char boundary)
/// - `scroll`: char offset of the first visible character
pub struct TextField {
    pub label: &'static str,
    pub buffer: String,
    pub focused: bool,
    cursor: usize,
    scroll: usize,
}

impl TextField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            buffer: String::new(),
            focused: false,
            cursor: 0,
            scroll: 0,
        }
    }

    /// Char index of the cursor (scroll math works in chars, not bytes).
    fn cursor_char_index(&self) -> usize {
        self.buffer[..self.cursor].chars().count()
    }

    /// Keep the cursor inside the visible window of `FIELD_WIDTH` cells.
    fn update_scroll(&mut self) {
        let cursor_idx = self.cursor_char_index();
        if cursor_idx < self.scroll {
            self.scroll = cursor_idx;
        } else if cursor_idx >= self.scroll + FIELD_WIDTH as usize {
            self.scroll = cursor_idx + 1 - FIELD_WIDTH as usize;
        }
    }

    /// The slice of the buffer currently visible in the field.
    fn visible_text(&self) -> String {
        self.buffer
            .chars()
            .skip(self.scroll)
            .take(FIELD_WIDTH as usize)
            .collect()
    }

    /// Display-cell offset of the cursor from the field's left edge.
    fn cursor_cell_offset(&self) -> u16 {
        self.buffer
            .chars()
            .skip(self.scroll)
            .take(self.cursor_char_index() - self.scroll)
            .map(|c| c.width().unwrap_or(0) as u16)
            .sum()
    }

    fn insert_str(&mut self, text: &str) -> Option<FieldEvent> {
        // Control characters (including newlines from paste) have no place
        // in a single-line field
        let filtered: String = text.chars().filter(|c| !c.is_control()).collect();
        if filtered.is_empty() {
            return None;
        }
        self.buffer.insert_str(self.cursor, &filtered);
        self.cursor += filtered.len();
        Some(FieldEvent::ContentChanged)
    }
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.update_scroll();

        let [label_area, field_area] =
            Layout::horizontal([Constraint::Length(LABEL_WIDTH + 1), Constraint::Length(FIELD_WIDTH)])
                .areas(area);

        frame.render_widget(label_span(self.label), label_area);

        let field_bg = if self.focused { Color::Blue } else { Color::DarkGray };
        let text = format!("{:<width$}", self.visible_text(), width = FIELD_WIDTH as usize);
        let field = Span::styled(text, Style::default().fg(Color::White).bg(field_bg));
        frame.render_widget(field, field_area);

        if self.focused {
            let cursor_x = field_area.x + self.cursor_cell_offset().min(FIELD_WIDTH - 1);
            frame.set_cursor_position((cursor_x, field_area.y));
        }
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut buf = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut buf))
            }
            TuiEvent::Paste(text) => self.insert_str(text),
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(FieldEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(FieldEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                    Some(FieldEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                    Some(FieldEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                FieldEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                FieldEvent::ContentChanged
            }),
            _ => None,
        }
    }
}

/// Find the byte offset of the previous character boundary before `pos`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
