/*
[INPUT]:  Session status message and result list
[OUTPUT]: Status line and newest-first results list
[POS]:    TUI UI results panel rendering
[UPDATE]: When results presentation changes
*/

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use crate::tui::app::AppState;
use crate::tui::runtime::{border_style, placeholder_style, status_style};

const EMPTY_RESULTS: &str = "No results yet. Submit a task then fetch results.";

pub(in crate::tui) fn draw_results(frame: &mut ratatui::Frame, area: Rect, app: &mut AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let status = app.session.status();
    let status_widget = Paragraph::new(Line::from(Span::styled(
        status.to_string(),
        status_style(status),
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title("Status"),
    );
    frame.render_widget(status_widget, rows[0]);

    let results = app.session.results();
    let title = format!("Results ({})", results.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(title);

    if results.is_empty() {
        let empty = Paragraph::new(Span::styled(EMPTY_RESULTS, placeholder_style())).block(block);
        frame.render_widget(empty, rows[1]);
        return;
    }

    let items: Vec<ListItem> = results
        .iter()
        .map(|entry| ListItem::new(Line::from(entry.clone())))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, rows[1], &mut app.results_state);
}
