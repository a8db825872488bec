/*
[INPUT]:  AppState focus and the session's TaskForm
[OUTPUT]: Task form panel with cursor placement
[POS]:    TUI UI task form rendering
[UPDATE]: When form fields change
*/

use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use taskdist_adapter::TextOp;
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{AppState, Focus};
use crate::tui::runtime::{border_style, focus_style, placeholder_style};

const LABEL_WIDTH: usize = 12;

pub(in crate::tui) fn draw_task_form(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("New Task");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = app.session.form();
    let mut cursor = None;
    let lines: Vec<Line> = app
        .fields()
        .iter()
        .enumerate()
        .map(|(row, field)| {
            let focused = *field == app.focus;
            let style = if focused { focus_style() } else { Style::default() };
            match field {
                Focus::TaskType => select_line("Type", form.task_type().as_str(), style),
                Focus::Operation => {
                    select_line("Operation", &operation_choices(form.text_operation()), style)
                }
                Focus::Expression | Focus::Value => {
                    let (label, value, placeholder) = if *field == Focus::Expression {
                        ("Expression", form.math_expression(), "e.g. 2 + 3 * 4")
                    } else {
                        ("Value", form.text_value(), "text to transform")
                    };
                    if focused {
                        cursor = Some((row, value.width()));
                    }
                    input_line(label, value, placeholder, style)
                }
                Focus::Submit => Line::from(Span::styled("[ Submit ]", style)),
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);

    if let Some((row, offset)) = cursor {
        let x = inner.x + (LABEL_WIDTH + offset) as u16;
        let y = inner.y + row as u16;
        if x < inner.right() && y < inner.bottom() {
            frame.set_cursor_position(Position::new(x, y));
        }
    }
}

fn label(text: &str) -> Span<'static> {
    Span::raw(format!("{:<width$}", format!("{text}:"), width = LABEL_WIDTH))
}

fn select_line(name: &str, value: &str, style: Style) -> Line<'static> {
    Line::from(vec![label(name), Span::styled(format!("< {value} >"), style)])
}

fn input_line(name: &str, value: &str, placeholder: &str, style: Style) -> Line<'static> {
    if value.is_empty() {
        Line::from(vec![
            label(name),
            Span::styled(placeholder.to_string(), placeholder_style().patch(style)),
        ])
    } else {
        Line::from(vec![label(name), Span::styled(value.to_string(), style)])
    }
}

fn operation_choices(selected: TextOp) -> String {
    TextOp::ALL
        .iter()
        .map(|op| {
            if *op == selected {
                op.as_str().to_uppercase()
            } else {
                op.as_str().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_choices_marks_selection() {
        assert_eq!(
            operation_choices(TextOp::Upper),
            "reverse | UPPER | lower | length"
        );
    }

    #[test]
    fn test_label_is_padded() {
        assert_eq!(label("Type").content.width(), LABEL_WIDTH);
    }
}
