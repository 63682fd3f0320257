//! Editing session combining the text buffer and its undo/redo history.
//!
//! An `EditorSession` owns one `TextBuffer` and one `UndoManager` and keeps
//! them consistent: forward edits are applied to the buffer and then
//! recorded, undo/redo take a record off the history and replay it against
//! the buffer in the matching direction. Both components live and die with
//! the session.

use anyhow::Result;

use crate::buffer::TextBuffer;
use crate::history::{EditOperation, HistoryConfig, UndoManager};

/// A single editing session with its buffer and history.
pub struct EditorSession {
    /// The text buffer.
    pub buffer: TextBuffer,
    /// Undo/redo history manager.
    pub history: UndoManager,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Creates a session with an empty buffer and empty history.
    pub fn new() -> Self {
        Self {
            buffer: TextBuffer::new(),
            history: UndoManager::new(),
        }
    }

    /// Creates a session with the given history configuration.
    pub fn with_config(config: &HistoryConfig) -> Self {
        Self {
            buffer: TextBuffer::new(),
            history: UndoManager::with_config(config),
        }
    }

    /// Inserts a character at `pos` and records the edit.
    ///
    /// # Errors
    ///
    /// Returns an error if `pos` is greater than the buffer length; nothing
    /// is recorded in that case.
    pub fn insert(&mut self, pos: usize, ch: char) -> Result<()> {
        self.buffer.insert(pos, ch)?;
        self.history.record_insert(pos, ch);
        Ok(())
    }

    /// Deletes the character at `pos` and records the edit.
    ///
    /// Does nothing on an empty buffer; no record is pushed for a no-op.
    /// The character is captured before removal so the record can restore
    /// it on undo.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is non-empty and `pos` is not below
    /// the buffer length; nothing is recorded in that case.
    pub fn delete(&mut self, pos: usize) -> Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let ch = self.buffer.char_at(pos)?;
        self.buffer.delete(pos)?;
        self.history.record_delete(pos, ch);
        Ok(())
    }

    /// Undoes the most recent operation by replaying its inverse.
    ///
    /// Returns `Ok(false)` when there is nothing to undo; the buffer and
    /// both stacks are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the inverse no longer applies to the buffer.
    /// The record has still moved to the redo stack when that happens.
    pub fn undo(&mut self) -> Result<bool> {
        let Some(op) = self.history.undo() else {
            return Ok(false);
        };
        match op {
            EditOperation::Insert { position, .. } => self.buffer.delete(position)?,
            EditOperation::Delete {
                position,
                character,
            } => self.buffer.insert(position, character)?,
        }
        Ok(true)
    }

    /// Redoes the most recently undone operation by replaying it forward.
    ///
    /// Returns `Ok(false)` when there is nothing to redo. Because new
    /// forward edits leave the redo stack intact, a pending record can be
    /// stale relative to the current buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the record no longer applies to the buffer.
    /// The record has still moved back to the undo stack when that happens.
    pub fn redo(&mut self) -> Result<bool> {
        let Some(op) = self.history.redo() else {
            return Ok(false);
        };
        match op {
            EditOperation::Insert {
                position,
                character,
            } => self.buffer.insert(position, character)?,
            EditOperation::Delete { position, .. } => self.buffer.delete(position)?,
        }
        Ok(true)
    }

    /// Returns the current contents, or `None` when the buffer is empty.
    pub fn render(&self) -> Option<String> {
        self.buffer.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(text: &str) -> EditorSession {
        let mut session = EditorSession::new();
        for (i, ch) in text.chars().enumerate() {
            session.insert(i, ch).unwrap();
        }
        session
    }

    #[test]
    fn test_insert_records_one_operation() {
        let mut session = EditorSession::new();
        session.insert(0, 'a').unwrap();
        assert_eq!(session.buffer.to_string(), "a");
        assert_eq!(session.history.undo_depth(), 1);
    }

    #[test]
    fn test_failed_insert_records_nothing() {
        let mut session = EditorSession::new();
        assert!(session.insert(5, 'a').is_err());
        assert_eq!(session.history.undo_depth(), 0);
    }

    #[test]
    fn test_delete_captures_character_for_undo() {
        let mut session = session_with("abc");
        session.delete(1).unwrap();
        assert_eq!(session.buffer.to_string(), "ac");

        session.undo().unwrap();
        assert_eq!(session.buffer.to_string(), "abc");
    }

    #[test]
    fn test_delete_on_empty_session_records_nothing() {
        let mut session = EditorSession::new();
        session.delete(0).unwrap();
        assert_eq!(session.buffer.len(), 0);
        assert_eq!(session.history.undo_depth(), 0);
    }

    #[test]
    fn test_undo_inverts_insert() {
        let mut session = session_with("ab");
        assert!(session.undo().unwrap());
        assert_eq!(session.buffer.to_string(), "a");
    }

    #[test]
    fn test_undo_inverts_delete() {
        let mut session = session_with("ab");
        session.delete(0).unwrap();
        assert_eq!(session.buffer.to_string(), "b");

        assert!(session.undo().unwrap());
        assert_eq!(session.buffer.to_string(), "ab");
    }

    #[test]
    fn test_undo_redo_noops_on_empty_stacks() {
        let mut session = EditorSession::new();
        assert!(!session.undo().unwrap());
        assert!(!session.redo().unwrap());
        assert_eq!(session.buffer.len(), 0);
        assert_eq!(session.history.undo_depth(), 0);
        assert_eq!(session.history.redo_depth(), 0);
    }

    #[test]
    fn test_insert_delete_undo_undo_redo_scenario() {
        let mut session = session_with("abc");
        session.delete(1).unwrap();
        assert_eq!(session.buffer.to_string(), "ac");

        session.undo().unwrap();
        assert_eq!(session.buffer.to_string(), "abc");

        session.undo().unwrap();
        assert_eq!(session.buffer.to_string(), "ab");

        session.redo().unwrap();
        assert_eq!(session.buffer.to_string(), "abc");
    }

    #[test]
    fn test_full_undo_redo_round_trip() {
        let mut session = session_with("hello");
        session.delete(4).unwrap();
        session.delete(0).unwrap();
        session.insert(0, 'y').unwrap();
        let after_forward = session.buffer.to_string();
        let recorded = session.history.undo_depth();

        for _ in 0..recorded {
            assert!(session.undo().unwrap());
        }
        assert_eq!(session.buffer.len(), 0);

        for _ in 0..recorded {
            assert!(session.redo().unwrap());
        }
        assert_eq!(session.buffer.to_string(), after_forward);
    }

    // A stale redo record can point past the end of the buffer once new
    // edits have shrunk it. The replay fails cleanly and the record still
    // makes its move back to the undo stack.
    #[test]
    fn test_stale_redo_surfaces_error() {
        let mut session = session_with("abcdef");
        session.undo().unwrap();
        session.delete(0).unwrap();
        session.delete(0).unwrap();
        assert_eq!(session.buffer.to_string(), "cde");

        assert!(session.redo().is_err());
        assert_eq!(session.history.redo_depth(), 0);
        assert_eq!(session.buffer.to_string(), "cde");
    }

    #[test]
    fn test_render_matches_buffer_state() {
        let mut session = session_with("ab");
        assert_eq!(session.render().as_deref(), Some("ab"));

        session.delete(1).unwrap();
        session.delete(0).unwrap();
        assert_eq!(session.render(), None);
    }

    #[test]
    fn test_with_config() {
        let config = HistoryConfig {
            initial_capacity: 8,
        };
        let session = EditorSession::with_config(&config);
        assert!(session.buffer.is_empty());
        assert!(!session.history.can_undo());
    }
}
