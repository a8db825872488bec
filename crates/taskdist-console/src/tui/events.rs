/*
[INPUT]:  Crossterm key events
[OUTPUT]: AppState mutations and session actions
[POS]:    TUI key routing
[UPDATE]: When keybindings change
*/

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{AppState, Focus};

/// Handles key events for the TUI.
///
/// Sets `app.should_quit` when the operator asks to leave.
pub(super) fn handle_key_event(app: &mut AppState, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('t') => app.toggle_task_type(),
            KeyCode::Char('f') => app.fetch_results(),
            KeyCode::Char('b') => app.submit_sample_batch(),
            KeyCode::Char('u') => app.clear_input(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::F(5) => app.fetch_results(),
        KeyCode::Tab => app.move_focus(1),
        KeyCode::BackTab => app.move_focus(-1),
        KeyCode::Up => app.scroll_results(-1),
        KeyCode::Down => app.scroll_results(1),
        KeyCode::Left | KeyCode::Right => {
            let delta = if key.code == KeyCode::Left { -1 } else { 1 };
            match app.focus {
                Focus::TaskType => app.toggle_task_type(),
                Focus::Operation => app.cycle_operation(delta),
                _ => {}
            }
        }
        KeyCode::Enter => match app.focus {
            Focus::TaskType => app.toggle_task_type(),
            _ => app.submit(),
        },
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Char(' ') if app.focus == Focus::TaskType => app.toggle_task_type(),
        KeyCode::Char(ch) => app.push_char(ch),
        _ => {}
    }
}
