/*
[INPUT]:  Session, log buffer handle, key-driven edits
[OUTPUT]: AppState with form focus, result selection, and session access
[POS]:    TUI app state
[UPDATE]: When form fields or TUI actions change
*/

use ratatui::widgets::ListState;
use taskdist_adapter::{TaskType, sample_batch};
use taskdist_console::{Session, Settlement};

use crate::tui::LogBufferHandle;

/// Focusable rows of the task form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Focus {
    TaskType,
    Expression,
    Operation,
    Value,
    Submit,
}

const MATH_FIELDS: [Focus; 3] = [Focus::TaskType, Focus::Expression, Focus::Submit];
const TEXT_FIELDS: [Focus; 4] = [Focus::TaskType, Focus::Operation, Focus::Value, Focus::Submit];

pub(super) struct AppState {
    pub(super) session: Session,
    pub(super) log_buffer: LogBufferHandle,
    pub(super) focus: Focus,
    pub(super) results_state: ListState,
    pub(super) should_quit: bool,
}

impl AppState {
    pub(super) fn new(session: Session, log_buffer: LogBufferHandle) -> Self {
        Self {
            session,
            log_buffer,
            focus: Focus::Expression,
            results_state: ListState::default(),
            should_quit: false,
        }
    }

    /// Rows shown for the active task type, top to bottom
    pub(super) fn fields(&self) -> &'static [Focus] {
        match self.session.form().task_type() {
            TaskType::Math => &MATH_FIELDS,
            TaskType::Text => &TEXT_FIELDS,
        }
    }

    pub(super) fn focus_is_text_input(&self) -> bool {
        matches!(self.focus, Focus::Expression | Focus::Value)
    }

    pub(super) fn move_focus(&mut self, delta: isize) {
        let fields = self.fields();
        let len = fields.len() as isize;
        let current = fields
            .iter()
            .position(|field| *field == self.focus)
            .unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.focus = fields[next];
    }

    pub(super) fn toggle_task_type(&mut self) {
        self.session.form_mut().toggle_task_type();
        if !self.fields().contains(&self.focus) {
            self.focus = match self.session.form().task_type() {
                TaskType::Math => Focus::Expression,
                TaskType::Text => Focus::Value,
            };
        }
    }

    pub(super) fn cycle_operation(&mut self, delta: isize) {
        self.session.form_mut().cycle_text_op(delta);
    }

    pub(super) fn push_char(&mut self, ch: char) {
        if self.focus_is_text_input() {
            self.session.form_mut().active_input_mut().push(ch);
        }
    }

    pub(super) fn pop_char(&mut self) {
        if self.focus_is_text_input() {
            self.session.form_mut().active_input_mut().pop();
        }
    }

    pub(super) fn clear_input(&mut self) {
        if self.focus_is_text_input() {
            self.session.form_mut().active_input_mut().clear();
        }
    }

    pub(super) fn submit(&mut self) {
        if self.session.submit().is_none() {
            tracing::debug!("submit ignored: active field is blank");
        }
    }

    pub(super) fn fetch_results(&mut self) {
        self.session.fetch_results();
    }

    pub(super) fn submit_sample_batch(&mut self) {
        let attempts = self.session.submit_batch(sample_batch());
        tracing::info!(count = attempts.len(), "sample batch submitted");
    }

    pub(super) fn apply_settlement(&mut self, settlement: Settlement) {
        let applied = self.session.apply(settlement);
        if applied.merged == 0 {
            return;
        }
        // Keep the highlighted entry under the cursor after a prepend.
        let selected = match self.results_state.selected() {
            Some(index) => index + applied.merged,
            None => 0,
        };
        self.results_state.select(Some(selected));
    }

    pub(super) fn scroll_results(&mut self, delta: isize) {
        let len = self.session.results().len();
        if len == 0 {
            self.results_state.select(None);
            return;
        }
        let current = self.results_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, (len - 1) as isize) as usize;
        self.results_state.select(Some(next));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Arc, Mutex};

    use taskdist_adapter::{TaskQueueClient, TextOp};
    use taskdist_console::session::{AttemptId, Outcome};

    use crate::tui::LogBuffer;

    fn app() -> AppState {
        let client = TaskQueueClient::new("http://localhost:5000").expect("client init");
        let session = Session::new(Arc::new(client));
        AppState::new(session, Arc::new(Mutex::new(LogBuffer::new(16))))
    }

    #[test]
    fn test_focus_cycles_within_active_form() {
        let mut app = app();
        assert_eq!(app.focus, Focus::Expression);
        app.move_focus(1);
        assert_eq!(app.focus, Focus::Submit);
        app.move_focus(1);
        assert_eq!(app.focus, Focus::TaskType);
        app.move_focus(-1);
        assert_eq!(app.focus, Focus::Submit);
    }

    #[test]
    fn test_toggle_moves_focus_off_hidden_field() {
        let mut app = app();
        app.toggle_task_type();
        assert_eq!(app.session.form().task_type(), TaskType::Text);
        assert_eq!(app.focus, Focus::Value);

        app.focus = Focus::TaskType;
        app.toggle_task_type();
        assert_eq!(app.focus, Focus::TaskType);
    }

    #[test]
    fn test_typing_edits_only_focused_input() {
        let mut app = app();
        for ch in "2**16".chars() {
            app.push_char(ch);
        }
        app.focus = Focus::Submit;
        app.push_char('x');
        assert_eq!(app.session.form().math_expression(), "2**16");

        app.toggle_task_type();
        app.cycle_operation(1);
        app.push_char('h');
        app.push_char('i');
        app.pop_char();
        assert_eq!(app.session.form().text_value(), "h");
        assert_eq!(app.session.form().text_operation(), TextOp::Upper);
        assert_eq!(app.session.form().math_expression(), "2**16");
    }

    #[test]
    fn test_prepend_keeps_selected_entry() {
        let mut app = app();
        app.apply_settlement(fetched(&["a", "b"]));
        assert_eq!(app.results_state.selected(), Some(0));

        app.scroll_results(1);
        app.apply_settlement(fetched(&["c", "d", "e"]));
        let selected = app.results_state.selected().expect("selection");
        assert_eq!(app.session.results().as_slice()[selected], "b");
    }

    fn fetched(items: &[&str]) -> Settlement {
        Settlement {
            attempt: AttemptId::new(),
            outcome: Outcome::Fetched {
                result: Ok(items.iter().map(|s| s.to_string()).collect()),
            },
        }
    }
}
