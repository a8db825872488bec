/*
[INPUT]:  Public API exports for taskdist-console crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod form;
pub mod session;

// Re-export main types for convenience
pub use config::ConsoleConfig;
pub use form::TaskForm;
pub use session::{Applied, AttemptId, ResultList, Session, Settlement, StatusMessage};
