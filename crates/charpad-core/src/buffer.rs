/// Line-less text buffer with positional single-character edits.
use std::fmt;

use anyhow::Result;

/// Slot count for a fresh buffer; capacity doubles whenever a write finds
/// the buffer full.
const INITIAL_CAPACITY: usize = 10;

/// A text buffer backed by a contiguous, growable character array.
///
/// Both mutating operations shift the tail of the buffer and are O(len)
/// worst case; the doubling growth policy keeps the extra allocation cost
/// amortized O(1) across a sequence of insertions.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    chars: Vec<char>,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.chars {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl TextBuffer {
    /// Creates an empty text buffer with the initial capacity reserved.
    pub fn new() -> Self {
        Self {
            chars: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Returns the total number of characters in the buffer.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the number of character slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.chars.capacity()
    }

    /// Returns the character at a given index.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of bounds.
    pub fn char_at(&self, pos: usize) -> Result<char> {
        match self.chars.get(pos) {
            Some(ch) => Ok(*ch),
            None => anyhow::bail!(
                "char index {} out of bounds (buffer has {} chars)",
                pos,
                self.chars.len()
            ),
        }
    }

    /// Inserts a character at the given index.
    ///
    /// Doubles the allocated capacity first when the buffer is full, then
    /// shifts the characters at `[pos, len)` one slot right. Characters
    /// below `pos` are unmoved.
    ///
    /// # Errors
    ///
    /// Returns an error if `pos` is greater than the buffer length.
    pub fn insert(&mut self, pos: usize, ch: char) -> Result<()> {
        if pos > self.chars.len() {
            anyhow::bail!(
                "insert position {} out of bounds (buffer has {} chars)",
                pos,
                self.chars.len()
            );
        }
        if self.chars.len() == self.chars.capacity() {
            self.chars.reserve_exact(self.chars.capacity().max(1));
        }
        self.chars.insert(pos, ch);
        Ok(())
    }

    /// Removes the character at the given index.
    ///
    /// Silently does nothing when the buffer is empty. The removed
    /// character is not retained; callers that need it (to record an undo
    /// step, for example) must capture it with [`char_at`](Self::char_at)
    /// before deleting.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is non-empty and `pos` is not below
    /// the buffer length.
    pub fn delete(&mut self, pos: usize) -> Result<()> {
        if self.chars.is_empty() {
            return Ok(());
        }
        if pos >= self.chars.len() {
            anyhow::bail!(
                "delete position {} out of bounds (buffer has {} chars)",
                pos,
                self.chars.len()
            );
        }
        self.chars.remove(pos);
        Ok(())
    }

    /// Returns the current contents, or `None` when the buffer is empty.
    ///
    /// The empty case is distinct from an empty string so callers can
    /// print a sentinel for it.
    pub fn render(&self) -> Option<String> {
        if self.chars.is_empty() {
            return None;
        }
        Some(self.chars.iter().collect())
    }
}
