/*
[INPUT]:  TUI app state and log buffer snapshots
[OUTPUT]: Panel render functions for the task console
[POS]:    TUI UI module root
[UPDATE]: When panels are added or removed
*/

mod form;
mod logs;
mod results;

pub(in crate::tui) use form::draw_task_form;
pub(in crate::tui) use logs::draw_logs;
pub(in crate::tui) use results::draw_results;
