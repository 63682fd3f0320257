// Re-exports from charpad-mod-history.
// Keeps session code on crate-local paths for the history types.
pub use charpad_mod_history::{EditOperation, HistoryConfig, UndoManager};
