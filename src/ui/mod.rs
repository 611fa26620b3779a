//! UI rendering.
//!
//! Two columns (contacts on the left, `nav_width` wide, and the details of
//! the focused contact on the right) above a one-line console.

mod panes;
mod theme;

pub use panes::detail_line;
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_LABEL, COLOR_WARNING};

use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use panes::{render_contact_details, render_contact_list};

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &App) {
    let [body, status] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());
    let [left, right] = Layout::horizontal([
        Constraint::Length(app.display.nav_width),
        Constraint::Min(0),
    ])
    .areas(body);

    render_contact_list(frame, left, app);
    render_contact_details(frame, right, app);
    render_status_line(frame, status, app);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let text = app.status_line();
    let style = if app.console.is_active() {
        Style::default()
    } else if text.starts_with("Error") {
        Style::default().fg(COLOR_ERROR)
    } else if text.starts_with("Warning") {
        Style::default().fg(COLOR_WARNING)
    } else {
        Style::default()
    };
    frame.render_widget(Paragraph::new(text).style(style), area);

    if let Some(column) = app.console.cursor_column() {
        let x = area.x.saturating_add(column).min(area.right().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, area.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::repository::ContactRepository;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &App) -> String {
        let backend = TestBackend::new(80, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_shows_both_panes() {
        let app = App::new(AppConfig::defaults(), ContactRepository::sample());
        let text = screen(&app);
        assert!(text.contains("Contacts"));
        assert!(text.contains("Alice Smith"));
        assert!(text.contains("phone: +49 30 1234567"));
        assert!(text.contains("17-03-2024"));
    }

    #[test]
    fn test_render_console_line() {
        let mut app = App::new(AppConfig::defaults(), ContactRepository::sample());
        app.press_keys(["I"]);
        let text = screen(&app);
        assert!(text.lines().last().unwrap_or("").starts_with(":add-contact"));
    }

    #[test]
    fn test_render_filter_in_title() {
        let mut app = App::new(AppConfig::defaults(), ContactRepository::sample());
        app.press_keys(["z", "z", "b", "enter"]);
        assert!(screen(&app).contains("f=b"));
    }
}
