//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the form,
//! and translates keyboard/mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw: it sleeps up to 500ms in
//! `poll` and only redraws when an event arrived (plus the first frame).
//! Nothing in the form animates, so there is no timer-driven drawing.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor
//! because ratatui's `set_cursor_position` resets the terminal's blink
//! timer on every `draw()` call, making blinking cursors appear erratic
//! during bursts of redraws.

pub mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info};
use std::io::stdout;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    ButtonId, ButtonRow, DropdownEvent, DropdownOverlayState, DropdownState, Note, TextField,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Month options, exactly as the archive form has always offered them.
/// Eleven entries; the list is the contract, order included.
pub const MONTHS: [&str; 11] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "December",
];

pub fn month_options() -> Vec<String> {
    MONTHS.iter().map(|m| m.to_string()).collect()
}

/// "1" through "31".
pub fn day_options() -> Vec<String> {
    (1..=31).map(|d| d.to_string()).collect()
}

/// "2000" through "2025".
pub fn year_options() -> Vec<String> {
    (2000..=2025).map(|y| y.to_string()).collect()
}

/// The focus ring, in tab order. The note row is not in it; it can
/// never take focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusId {
    City,
    State,
    Month,
    Day,
    Year,
    Save,
    Quit,
}

impl FocusId {
    pub fn next(self) -> Self {
        match self {
            FocusId::City => FocusId::State,
            FocusId::State => FocusId::Month,
            FocusId::Month => FocusId::Day,
            FocusId::Day => FocusId::Year,
            FocusId::Year => FocusId::Save,
            FocusId::Save => FocusId::Quit,
            FocusId::Quit => FocusId::City,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FocusId::City => FocusId::Quit,
            FocusId::State => FocusId::City,
            FocusId::Month => FocusId::State,
            FocusId::Day => FocusId::Month,
            FocusId::Year => FocusId::Day,
            FocusId::Save => FocusId::Year,
            FocusId::Quit => FocusId::Save,
        }
    }

    pub fn is_dropdown(self) -> bool {
        matches!(self, FocusId::Month | FocusId::Day | FocusId::Year)
    }

    pub fn as_button(self) -> Option<ButtonId> {
        match self {
            FocusId::Save => Some(ButtonId::Save),
            FocusId::Quit => Some(ButtonId::Quit),
            _ => None,
        }
    }
}

/// TUI-specific presentation state: the form's components, the focus
/// ring position, and the open dropdown overlay (None = closed). Field
/// values live here and nowhere else; the core never reads them back.
pub struct TuiState {
    pub city: TextField,
    pub state: TextField,
    pub month: DropdownState,
    pub day: DropdownState,
    pub year: DropdownState,
    pub note: Note,
    pub buttons: ButtonRow,
    pub focus: FocusId,
    pub overlay: Option<(FocusId, DropdownOverlayState)>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            city: TextField::new("City"),
            state: TextField::new("State"),
            month: DropdownState::new("Month", month_options()),
            day: DropdownState::new("Day", day_options()),
            year: DropdownState::new("Year", year_options()),
            note: Note::new("Note", "The threshold is optional"),
            buttons: ButtonRow::new(),
            focus: FocusId::City,
            overlay: None,
        }
    }

    /// Sync each component's `focused` prop with the focus ring.
    pub fn sync_focus(&mut self) {
        self.city.focused = self.focus == FocusId::City;
        self.state.focused = self.focus == FocusId::State;
        self.month.focused = self.focus == FocusId::Month;
        self.day.focused = self.focus == FocusId::Day;
        self.year.focused = self.focus == FocusId::Year;
        self.buttons.focused = self.focus.as_button();
    }

    pub fn dropdown_mut(&mut self, id: FocusId) -> Option<&mut DropdownState> {
        match id {
            FocusId::Month => Some(&mut self.month),
            FocusId::Day => Some(&mut self.day),
            FocusId::Year => Some(&mut self.year),
            _ => None,
        }
    }

    /// Open the overlay for the focused dropdown, seeded with its
    /// committed selection. No-op for any other focus target.
    pub fn open_overlay(&mut self) {
        let focus = self.focus;
        if let Some(dd) = self.dropdown_mut(focus) {
            let overlay = DropdownOverlayState::new(dd.label, dd.options.clone(), dd.selected);
            self.overlay = Some((focus, overlay));
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard {
    mouse_enabled: bool,
}

impl TerminalModeGuard {
    fn new(enable_mouse: bool) -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from redraws
        )?;
        if enable_mouse {
            execute!(stdout(), EnableMouseCapture)?;
        }
        info!("Terminal modes enabled (bracketed paste, steady block cursor, mouse: {enable_mouse})");
        Ok(Self {
            mouse_enabled: enable_mouse,
        })
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        if self.mouse_enabled {
            let _ = execute!(stdout(), DisableMouseCapture);
        }
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new();
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new(config.enable_mouse)?;

    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    while !should_quit {
        // Sync component props with the focus ring
        tui.sync_focus();

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(500));

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of focus
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // When a dropdown overlay is open, route all events to it
            if let Some((field, mut overlay)) = tui.overlay.take() {
                match overlay.handle_event(&event) {
                    Some(DropdownEvent::Select(index)) => {
                        debug!("Dropdown {:?} selected index {index}", field);
                        if let Some(dd) = tui.dropdown_mut(field) {
                            dd.selected = index;
                        }
                    }
                    Some(DropdownEvent::Dismiss) => {}
                    None => {
                        // Overlay stays open
                        tui.overlay = Some((field, overlay));
                    }
                }
                continue;
            }

            // Mouse click: focus whatever is under the pointer; dropdowns
            // open, buttons activate
            if let TuiEvent::MouseClick(col, row) = event {
                let frame_area = terminal.get_frame().area();
                if let Some(target) = ui::hit_test(col, row, frame_area) {
                    tui.focus = target;
                    if target.is_dropdown() {
                        tui.open_overlay();
                    } else if let Some(button) = target.as_button()
                        && update(&mut app, button.action()) == Effect::Quit
                    {
                        should_quit = true;
                    }
                }
                continue;
            }

            match event {
                TuiEvent::FocusNext | TuiEvent::CursorDown => {
                    tui.focus = tui.focus.next();
                }
                TuiEvent::FocusPrev | TuiEvent::CursorUp => {
                    tui.focus = tui.focus.prev();
                }
                // Enter: open a dropdown, press a button, or move on from
                // a text field
                TuiEvent::Submit => {
                    if tui.focus.is_dropdown() {
                        tui.open_overlay();
                    } else if let Some(button) = tui.focus.as_button() {
                        if update(&mut app, button.action()) == Effect::Quit {
                            should_quit = true;
                        }
                    } else {
                        tui.focus = tui.focus.next();
                    }
                }
                // Space activates buttons and opens dropdowns, but types
                // into text fields
                TuiEvent::InputChar(' ') if tui.focus.as_button().is_some() => {
                    if let Some(button) = tui.focus.as_button()
                        && update(&mut app, button.action()) == Effect::Quit
                    {
                        should_quit = true;
                    }
                }
                TuiEvent::InputChar(' ') if tui.focus.is_dropdown() => {
                    tui.open_overlay();
                }
                // Everything else belongs to the focused text field
                _ => match tui.focus {
                    FocusId::City => {
                        tui.city.handle_event(&event);
                    }
                    FocusId::State => {
                        tui.state.handle_event(&event);
                    }
                    _ => {}
                },
            }
        }
    }

    ratatui::restore();
    info!("Form stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_months_are_the_fixed_eleven() {
        assert_eq!(MONTHS.len(), 11);
        assert_eq!(
            MONTHS,
            [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "December",
            ]
        );
        assert!(!MONTHS.contains(&"November"));
    }

    #[test]
    fn test_day_options_are_1_through_31() {
        let days = day_options();
        assert_eq!(days.len(), 31);
        assert_eq!(days.first().map(String::as_str), Some("1"));
        assert_eq!(days.last().map(String::as_str), Some("31"));
        assert_eq!(days[14], "15");
    }

    #[test]
    fn test_year_options_are_2000_through_2025() {
        let years = year_options();
        assert_eq!(years.len(), 26);
        assert_eq!(years.first().map(String::as_str), Some("2000"));
        assert_eq!(years.last().map(String::as_str), Some("2025"));
    }

    #[test]
    fn test_focus_ring_wraps_forward() {
        let mut focus = FocusId::City;
        let ring = [
            FocusId::State,
            FocusId::Month,
            FocusId::Day,
            FocusId::Year,
            FocusId::Save,
            FocusId::Quit,
            FocusId::City,
        ];
        for expected in ring {
            focus = focus.next();
            assert_eq!(focus, expected);
        }
    }

    #[test]
    fn test_focus_ring_wraps_backward() {
        assert_eq!(FocusId::City.prev(), FocusId::Quit);
        let mut focus = FocusId::City;
        for _ in 0..7 {
            focus = focus.prev();
        }
        assert_eq!(focus, FocusId::City, "seven steps back is a full cycle");
    }

    #[test]
    fn test_tui_state_defaults() {
        let tui = TuiState::new();
        assert_eq!(tui.focus, FocusId::City);
        assert_eq!(tui.month.selected, 0);
        assert_eq!(tui.day.selected, 0);
        assert_eq!(tui.year.selected, 0);
        assert!(tui.overlay.is_none());
        assert!(tui.city.buffer.is_empty());
        assert!(tui.state.buffer.is_empty());
    }

    #[test]
    fn test_open_overlay_only_for_dropdowns() {
        let mut tui = TuiState::new();
        tui.focus = FocusId::City;
        tui.open_overlay();
        assert!(tui.overlay.is_none());

        tui.focus = FocusId::Day;
        tui.open_overlay();
        let (field, overlay) = tui.overlay.as_ref().expect("overlay should open");
        assert_eq!(*field, FocusId::Day);
        assert_eq!(overlay.options.len(), 31);
        assert_eq!(overlay.highlight, 0);
    }

    #[test]
    fn test_overlay_seeds_from_committed_selection() {
        let mut tui = TuiState::new();
        tui.year.selected = 5;
        tui.focus = FocusId::Year;
        tui.open_overlay();
        let (_, overlay) = tui.overlay.as_ref().expect("overlay should open");
        assert_eq!(overlay.highlight, 5);
    }

    #[test]
    fn test_sync_focus_marks_exactly_one_component() {
        let mut tui = TuiState::new();
        tui.focus = FocusId::State;
        tui.sync_focus();
        assert!(!tui.city.focused);
        assert!(tui.state.focused);
        assert!(!tui.month.focused);
        assert!(tui.buttons.focused.is_none());

        tui.focus = FocusId::Quit;
        tui.sync_focus();
        assert!(!tui.state.focused);
        assert_eq!(tui.buttons.focused, Some(ButtonId::Quit));
    }
}
