/// Core editing model: a growable character buffer plus the session object
/// that wires it to undo/redo history.
pub mod buffer;
pub mod history;
pub mod session;

pub use buffer::TextBuffer;
pub use session::EditorSession;
