/*
[INPUT]:  Process stdout
[OUTPUT]: TerminalGuard managing raw mode and alternate screen
[POS]:    TUI terminal lifecycle guard
[UPDATE]: When terminal setup or teardown changes
*/

use anyhow::{Context, Result};
use ratatui::DefaultTerminal;

/// Owns the terminal for the lifetime of the UI; restores it on drop,
/// including when the run loop exits through `?`.
pub(super) struct TerminalGuard {
    terminal: DefaultTerminal,
}

impl TerminalGuard {
    pub(super) fn new() -> Result<Self> {
        let terminal = ratatui::try_init().context("initialize terminal")?;
        Ok(Self { terminal })
    }

    pub(super) fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f).context("draw frame")?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        ratatui::restore();
    }
}
