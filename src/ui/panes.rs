//! Contact list and details panes.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
    Frame,
};

use crate::app::App;
use crate::components::{DetailEntry, Pane};

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_GIFTED, COLOR_LABEL};

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { COLOR_ACCENT } else { COLOR_BORDER };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(color))
}

fn highlight(focused: bool) -> Style {
    if focused {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::REVERSED)
    } else {
        Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD)
    }
}

pub fn render_contact_list(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.frame.focus() == Pane::List;
    let list = &app.frame.list;

    let title = match &app.filter {
        Some(filter) => format!(" Contacts (f={}) ", filter),
        None => " Contacts ".to_string(),
    };
    let items: Vec<ListItem> = list.names().map(ListItem::new).collect();
    let widget = List::new(items)
        .block(pane_block(&title, focused))
        .highlight_style(highlight(focused));

    let mut state = ListState::default();
    if !list.is_empty() {
        state.select(Some(list.position()));
    }
    frame.render_stateful_widget(widget, area, &mut state);
}

pub fn render_contact_details(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.frame.focus() == Pane::Details;
    let details = &app.frame.details;

    let title = match details.contact_name() {
        Some(name) => format!(" {} ", name),
        None => String::new(),
    };
    let items: Vec<ListItem> = details
        .entries()
        .iter()
        .map(detail_line)
        .map(ListItem::new)
        .collect();
    let widget = List::new(items)
        .block(pane_block(&title, focused))
        .highlight_style(highlight(focused));

    let mut state = ListState::default();
    if !details.is_empty() {
        state.select(Some(details.position()));
    }
    frame.render_stateful_widget(widget, area, &mut state);
}

/// One row of the details pane.
pub fn detail_line(entry: &DetailEntry) -> Line<'static> {
    let label = Style::default().fg(COLOR_LABEL);
    match entry {
        DetailEntry::Attribute(entry) => {
            let attribute = entry.attribute();
            Line::from(vec![
                Span::styled(format!("{}: ", attribute.key), label),
                Span::raw(attribute.value.clone()),
            ])
        }
        DetailEntry::Gift(entry) => {
            let gift = entry.gift();
            let mark = if gift.gifted { "[x] " } else { "[ ] " };
            let style = if gift.gifted {
                Style::default().fg(COLOR_GIFTED)
            } else {
                Style::default()
            };
            let mut spans = vec![Span::raw(mark), Span::styled(gift.name.clone(), style)];
            if gift.permanent {
                spans.push(Span::raw(" (permanent)"));
            }
            Line::from(spans)
        }
        DetailEntry::Note(entry) => {
            let note = entry.note();
            Line::from(vec![
                Span::styled(format!("{} ", note.display_date()), label),
                Span::raw(note.summary().to_string()),
            ])
        }
    }
}
