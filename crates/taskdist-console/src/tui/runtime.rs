/*
[INPUT]:  Session settlements, terminal input, log buffer
[OUTPUT]: Ratatui-based TUI run loop, rendering, and log buffer utilities
[POS]:    TUI runtime loop and shared helpers
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::fmt::MakeWriter;

use taskdist_console::Session;

use super::app::AppState;
use super::events::handle_key_event;
use super::terminal::TerminalGuard;
use super::ui::{draw_logs, draw_results, draw_task_form};

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);
pub const LOG_BUFFER_CAPACITY: usize = 2000;

pub type LogBufferHandle = Arc<StdMutex<LogBuffer>>;

/// Ring of the most recent log lines shown in the log panel
#[derive(Debug, Default)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity.min(256)),
            capacity,
        }
    }

    pub fn push_line(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        while self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Up to `count` newest lines, oldest first
    pub fn tail(&self, count: usize) -> Vec<String> {
        let start = self.lines.len().saturating_sub(count);
        self.lines.range(start..).cloned().collect()
    }
}

/// `MakeWriter` that routes tracing output into a [`LogBuffer`]
#[derive(Clone)]
pub struct LogWriterFactory {
    buffer: LogBufferHandle,
}

impl LogWriterFactory {
    pub fn new(buffer: LogBufferHandle) -> Self {
        Self { buffer }
    }
}

pub struct LogWriter {
    buffer: LogBufferHandle,
    partial: String,
}

impl LogWriter {
    fn push(&self, line: String) {
        if let Ok(mut guard) = self.buffer.lock() {
            guard.push_line(line);
        }
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.partial.push_str(&String::from_utf8_lossy(buf));
        while let Some(pos) = self.partial.find('\n') {
            let rest = self.partial.split_off(pos + 1);
            let line = std::mem::replace(&mut self.partial, rest);
            self.push(line.trim_end_matches(['\r', '\n']).to_string());
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.partial.is_empty() {
            let line = std::mem::take(&mut self.partial);
            self.push(line);
        }
        Ok(())
    }
}

impl Drop for LogWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            buffer: self.buffer.clone(),
            partial: String::new(),
        }
    }
}

enum UiEvent {
    Input(CrosstermEvent),
}

pub async fn run_tui(session: Session, log_buffer: LogBufferHandle) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    if event_tx.send(UiEvent::Input(event)).is_err() {
                        break;
                    }
                }
            }
        }
    });

    let mut app = AppState::new(session, log_buffer);
    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);
    tracing::info!("console ready");

    while !app.should_quit {
        tokio::select! {
            _ = tick.tick() => {}
            Some(event) = event_rx.recv() => {
                let UiEvent::Input(event) = event;
                if let CrosstermEvent::Key(key) = event {
                    if key.kind == KeyEventKind::Press {
                        handle_key_event(&mut app, key);
                    }
                }
            }
            Some(settlement) = app.session.recv_settlement() => {
                app.apply_settlement(settlement);
            }
        }

        terminal.draw(|frame| draw_ui(frame, &mut app))?;
    }

    input_shutdown.cancel();
    Ok(())
}

fn draw_ui(frame: &mut ratatui::Frame, app: &mut AppState) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(4)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(layout[0]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(3)])
        .split(columns[0]);

    draw_task_form(frame, left[0], app);
    draw_logs(frame, left[1], &app.log_buffer);
    draw_results(frame, columns[1], app);
    draw_footer(frame, layout[1], app);
}

fn draw_footer(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &AppState) {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let line1 = Line::from(vec![
        Span::styled("[Tab]", key_style),
        Span::raw(" Field  "),
        Span::styled("[Ctrl-T]", key_style),
        Span::raw(" Math/Text  "),
        Span::styled("[Left/Right]", key_style),
        Span::raw(" Operation  "),
        Span::styled("[Enter]", key_style),
        Span::raw(" Submit"),
    ]);
    let line2 = Line::from(vec![
        Span::styled("[Ctrl-F]", key_style),
        Span::raw(" Fetch  "),
        Span::styled("[Ctrl-B]", key_style),
        Span::raw(" Sample batch  "),
        Span::styled("[Up/Down]", key_style),
        Span::raw(" Scroll  "),
        Span::styled("[Esc]", key_style),
        Span::raw(" Quit  "),
        Span::raw(format!("In flight: {}", app.session.in_flight())),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Hotkeys");
    let text = Text::from(vec![line1, line2]);
    let widget = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub(crate) fn focus_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

pub(crate) fn placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Colour the status line by outcome
pub(crate) fn status_style(status: &str) -> Style {
    if status.starts_with("Error") || status.starts_with("Network error") {
        Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD)
    } else if status.ends_with("...") {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::LightGreen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_buffer_drops_oldest() {
        let mut buffer = LogBuffer::new(2);
        buffer.push_line("one".to_string());
        buffer.push_line("two".to_string());
        buffer.push_line("three".to_string());
        assert_eq!(buffer.tail(10), vec!["two".to_string(), "three".to_string()]);
        assert_eq!(buffer.tail(1), vec!["three".to_string()]);
    }

    #[test]
    fn test_log_writer_splits_lines() {
        let handle = Arc::new(StdMutex::new(LogBuffer::new(8)));
        let factory = LogWriterFactory::new(handle.clone());
        {
            let mut writer = factory.make_writer();
            writer.write_all(b"first\r\nsec").expect("write");
            writer.write_all(b"ond\npartial").expect("write");
        }
        let lines = handle.lock().expect("buffer lock").tail(8);
        assert_eq!(lines, vec!["first", "second", "partial"]);
    }

    #[test]
    fn test_status_style_by_outcome() {
        assert_eq!(status_style("Error: invalid expression").fg, Some(Color::LightRed));
        assert_eq!(status_style("Network error: refused").fg, Some(Color::LightRed));
        assert_eq!(status_style("Fetching results...").fg, Some(Color::Yellow));
        assert_eq!(status_style("Fetched 2 result(s)").fg, Some(Color::LightGreen));
    }
}
