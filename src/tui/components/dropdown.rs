//! # Dropdown Component
//!
//! Single-selection control backed by a fixed ordered list of options,
//! used for the Month, Day, and Year fields.
//!
//! Closed, it renders as a labeled row showing the current option. Opening
//! it (Enter, Space, or a mouse click) creates a centered overlay list.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `DropdownState` (the committed selection) lives in `TuiState`
//! - `DropdownOverlayState` exists only while the list is open
//! - `DropdownOverlay` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::tui::component::Component;
use crate::tui::components::{LABEL_WIDTH, label_span};
use crate::tui::event::TuiEvent;

/// A closed dropdown: label, options, and the committed selection.
pub struct DropdownState {
    pub label: &'static str,
    pub options: Vec<String>,
    pub selected: usize,
    pub focused: bool,
}

impl DropdownState {
    pub fn new(label: &'static str, options: Vec<String>) -> Self {
        Self {
            label,
            options,
            selected: 0,
            focused: false,
        }
    }

    pub fn current(&self) -> &str {
        self.options.get(self.selected).map(String::as_str).unwrap_or("")
    }
}

impl Component for DropdownState {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [label_area, value_area] =
            Layout::horizontal([Constraint::Length(LABEL_WIDTH + 1), Constraint::Min(0)])
                .areas(area);

        frame.render_widget(label_span(self.label), label_area);

        let style = if self.focused {
            Style::default().fg(Color::White).bg(Color::Blue)
        } else {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        };
        let value = Span::styled(format!(" {} ▼ ", self.current()), style);
        frame.render_widget(value, value_area);
    }
}

/// Events emitted by the dropdown overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownEvent {
    /// Commit the highlighted option index.
    Select(usize),
    /// Close without changing the selection.
    Dismiss,
}

/// Persistent state for an open dropdown overlay.
pub struct DropdownOverlayState {
    pub title: &'static str,
    pub options: Vec<String>,
    pub highlight: usize,
    pub list_state: ListState,
}

impl DropdownOverlayState {
    pub fn new(title: &'static str, options: Vec<String>, initial: usize) -> Self {
        let highlight = initial.min(options.len().saturating_sub(1));
        let mut list_state = ListState::default();
        if !options.is_empty() {
            list_state.select(Some(highlight));
        }
        Self {
            title,
            options,
            highlight,
            list_state,
        }
    }

    /// Handle a key event, returning a DropdownEvent if the overlay should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<DropdownEvent> {
        match event {
            TuiEvent::Escape => Some(DropdownEvent::Dismiss),
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                if !self.options.is_empty() {
                    self.highlight = self.highlight.saturating_sub(1);
                    self.list_state.select(Some(self.highlight));
                }
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                if !self.options.is_empty() {
                    self.highlight = (self.highlight + 1).min(self.options.len() - 1);
                    self.list_state.select(Some(self.highlight));
                }
                None
            }
            TuiEvent::Submit => {
                (self.highlight < self.options.len()).then_some(DropdownEvent::Select(self.highlight))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the dropdown overlay.
pub struct DropdownOverlay<'a> {
    state: &'a mut DropdownOverlayState,
}

impl<'a> DropdownOverlay<'a> {
    pub fn new(state: &'a mut DropdownOverlayState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(40, 60, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let help_text = " Enter Select  Esc Back ";

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.state.title))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = self
            .state
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let style = if i == self.state.highlight {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(Span::styled(option.clone(), style)))
            })
            .collect();

        let list = List::new(items).block(block);

        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
