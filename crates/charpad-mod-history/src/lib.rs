/// Undo/redo history management for a single editing session.
///
/// Provides an `UndoManager` that records every forward edit as an
/// `EditOperation` and moves records between an undo stack and a redo
/// stack. Records are never transformed; undo and redo only flip the
/// direction in which a record is replayed against the buffer.
pub mod config;
pub mod manager;
pub mod operation;

pub use config::HistoryConfig;
pub use manager::UndoManager;
pub use operation::EditOperation;
