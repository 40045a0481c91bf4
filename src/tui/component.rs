use ratatui::Frame;
use ratatui::layout::Rect;

/// A form item that can draw itself.
///
/// Every row of the form (text fields, dropdowns, the note, the button
/// row) implements this. Items receive external data as props (struct
/// fields synced by the event loop, e.g. `focused`) and may hold internal
/// state such as a text buffer or a committed selection.
///
/// # Mutability
///
/// `render` takes `&mut self` so an item can update presentation state
/// while drawing - the text fields adjust their horizontal scroll offset
/// here to keep the cursor visible. This aligns with Ratatui's
/// `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A form item that consumes terminal events.
///
/// Handlers receive the low-level `TuiEvent` the loop routed to them and
/// optionally emit a typed, component-specific event (e.g. a text field
/// reporting its content changed). The loop never inspects component
/// internals; these emitted events are the only channel back out.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
