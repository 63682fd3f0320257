/// Configuration for the history system.

/// Number of operation slots each stack reserves up front.
const DEFAULT_INITIAL_CAPACITY: usize = 1;

/// Configuration for the history system.
///
/// History depth is unlimited; the stacks double their storage as they
/// outgrow the initial reservation.
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Operation slots reserved up front by the undo and redo stacks.
    pub initial_capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}
