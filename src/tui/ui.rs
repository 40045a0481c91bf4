//! Form layout and mouse hit testing.
//!
//! One function (`form_rows`) computes the row rectangles used both for
//! rendering and for translating mouse clicks back into focus targets, so
//! the two can never disagree.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Block;

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{ButtonId, DropdownOverlay, button_at};
use crate::tui::{FocusId, TuiState};

/// The screen row of every form item, in display order.
pub struct FormRows {
    pub city: Rect,
    pub state: Rect,
    pub month: Rect,
    pub day: Rect,
    pub year: Rect,
    pub note: Rect,
    pub buttons: Rect,
}

/// Content region inside the form border and its padding.
///
/// 1 cell of border plus 2 cells of horizontal / 1 cell of vertical
/// padding. Kept as explicit math (not `Block::inner`) so `hit_test` can
/// compute it without constructing a widget.
pub fn content_area(frame_area: Rect) -> Rect {
    Rect {
        x: frame_area.x.saturating_add(3),
        y: frame_area.y.saturating_add(2),
        width: frame_area.width.saturating_sub(6),
        height: frame_area.height.saturating_sub(4),
    }
}

/// Lay out the form items as single-height rows with one blank row
/// between them (the classic form item padding).
pub fn form_rows(inner: Rect) -> FormRows {
    use Constraint::{Length, Min};
    let [city, _, state, _, month, _, day, _, year, _, note, _, buttons, _] = Layout::vertical([
        Length(1),
        Length(1),
        Length(1),
        Length(1),
        Length(1),
        Length(1),
        Length(1),
        Length(1),
        Length(1),
        Length(1),
        Length(1),
        Length(1),
        Length(1),
        Min(0),
    ])
    .areas(inner);

    FormRows {
        city,
        state,
        month,
        day,
        year,
        note,
        buttons,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let area = frame.area();

    let help_text = if app.status_message.is_empty() {
        String::from(" Tab Next  Enter Open/Press  Ctrl+C Quit ")
    } else {
        format!(" {} ", app.status_message)
    };

    let block = Block::bordered()
        .title(" Convective Archive ")
        .title_alignment(Alignment::Center)
        .title_bottom(Line::from(help_text).centered());
    frame.render_widget(block, area);

    let rows = form_rows(content_area(area));
    tui.city.render(frame, rows.city);
    tui.state.render(frame, rows.state);
    tui.month.render(frame, rows.month);
    tui.day.render(frame, rows.day);
    tui.year.render(frame, rows.year);
    tui.note.render(frame, rows.note);
    tui.buttons.render(frame, rows.buttons);

    // Overlay last, over everything else
    if let Some((_, overlay)) = tui.overlay.as_mut() {
        DropdownOverlay::new(overlay).render(frame, area);
    }
}

fn row_hit(rect: Rect, col: u16, row: u16) -> bool {
    rect.height > 0 && row == rect.y && col >= rect.x && col < rect.x + rect.width
}

/// Hit test: which focusable form item (if any) sits under a click.
///
/// The note row is intentionally absent; it never takes focus.
pub fn hit_test(col: u16, row: u16, frame_area: Rect) -> Option<FocusId> {
    let rows = form_rows(content_area(frame_area));

    if row_hit(rows.city, col, row) {
        return Some(FocusId::City);
    }
    if row_hit(rows.state, col, row) {
        return Some(FocusId::State);
    }
    if row_hit(rows.month, col, row) {
        return Some(FocusId::Month);
    }
    if row_hit(rows.day, col, row) {
        return Some(FocusId::Day);
    }
    if row_hit(rows.year, col, row) {
        return Some(FocusId::Year);
    }
    if row_hit(rows.buttons, col, row) {
        return button_at(col - rows.buttons.x).map(|b| match b {
            ButtonId::Save => FocusId::Save,
            ButtonId::Quit => FocusId::Quit,
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_shows_all_items() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = App::new();
        let mut tui = TuiState::new();

        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Convective Archive"));
        assert!(text.contains("City:"));
        assert!(text.contains("State:"));
        assert!(text.contains("Month:"));
        assert!(text.contains("Day:"));
        assert!(text.contains("Year:"));
        assert!(text.contains("The threshold is optional"));
        assert!(text.contains("[ Save ]"));
        assert!(text.contains("[ Quit ]"));
    }

    #[test]
    fn test_draw_ui_shows_initial_selections() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = App::new();
        let mut tui = TuiState::new();

        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("January"));
        assert!(text.contains("2000"));
    }

    #[test]
    fn test_draw_ui_overlay_covers_form() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = App::new();
        let mut tui = TuiState::new();
        tui.focus = FocusId::Month;
        tui.open_overlay();

        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Enter Select"));
    }

    #[test]
    fn test_hit_test_rows() {
        let frame_area = Rect::new(0, 0, 80, 24);
        let rows = form_rows(content_area(frame_area));

        assert_eq!(hit_test(rows.city.x, rows.city.y, frame_area), Some(FocusId::City));
        assert_eq!(hit_test(rows.state.x + 5, rows.state.y, frame_area), Some(FocusId::State));
        assert_eq!(hit_test(rows.month.x, rows.month.y, frame_area), Some(FocusId::Month));
        assert_eq!(hit_test(rows.day.x, rows.day.y, frame_area), Some(FocusId::Day));
        assert_eq!(hit_test(rows.year.x, rows.year.y, frame_area), Some(FocusId::Year));
    }

    #[test]
    fn test_hit_test_note_row_is_not_focusable() {
        let frame_area = Rect::new(0, 0, 80, 24);
        let rows = form_rows(content_area(frame_area));
        assert_eq!(hit_test(rows.note.x, rows.note.y, frame_area), None);
    }

    #[test]
    fn test_hit_test_buttons() {
        let frame_area = Rect::new(0, 0, 80, 24);
        let rows = form_rows(content_area(frame_area));

        assert_eq!(hit_test(rows.buttons.x, rows.buttons.y, frame_area), Some(FocusId::Save));
        assert_eq!(
            hit_test(rows.buttons.x + 10, rows.buttons.y, frame_area),
            Some(FocusId::Quit)
        );
        // The gap between the buttons hits nothing
        assert_eq!(hit_test(rows.buttons.x + 9, rows.buttons.y, frame_area), None);
    }

    #[test]
    fn test_hit_test_border_misses() {
        let frame_area = Rect::new(0, 0, 80, 24);
        assert_eq!(hit_test(0, 0, frame_area), None);
        assert_eq!(hit_test(79, 23, frame_area), None);
    }
}
