/*
[INPUT]:  Session, log buffer fed by tracing, terminal key events
[OUTPUT]: Ratatui-based TUI for composing tasks and browsing results
[POS]:    TUI module for taskdist-console binary
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

mod app;
mod events;
mod runtime;
mod terminal;
mod ui;

pub use runtime::{LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory, run_tui};
