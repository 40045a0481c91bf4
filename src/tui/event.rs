use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// TUI-specific input events
pub enum TuiEvent {
    // Loop-level events
    /// Ctrl+C: quit regardless of focus.
    ForceQuit,
    Resize,

    // Focus traversal
    FocusNext, // Tab
    FocusPrev, // Shift+Tab

    // Widget-level events (routed to the focused component)
    Submit, // Enter
    Escape,
    InputChar(char),
    Paste(String), // Bracketed paste
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    CursorUp,
    CursorDown,
    ScrollUp,
    ScrollDown,
    MouseClick(u16, u16),
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                // REPORT_EVENT_TYPES terminals send key-release too; only act on press
                if key_event.kind == KeyEventKind::Release {
                    return None;
                }
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                    (_, KeyCode::Tab) => Some(TuiEvent::FocusNext),
                    (_, KeyCode::BackTab) => Some(TuiEvent::FocusPrev),
                    (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                    (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                    (_, KeyCode::Delete) => Some(TuiEvent::Delete),
                    (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                    (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                    (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                    (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                    (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
                    (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
                    (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                    (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                    _ => None,
                }
            }
            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
                }
                MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
                MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
                _ => None,
            },
            Event::Paste(data) => Some(TuiEvent::Paste(data)),
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
