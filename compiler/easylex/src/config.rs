//! Lexer session configuration.

/// Configuration for a lexing session.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexerConfig {
    /// Initial capacity of the token queue. The queue grows if a single state
    /// step emits more tokens than this.
    pub queue_capacity: usize,
    /// Consecutive state steps allowed without consuming input or emitting a
    /// token before the session is stopped with a stall error (0 = unlimited).
    pub max_idle_steps: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            queue_capacity: 2,
            max_idle_steps: 1024,
        }
    }
}

impl LexerConfig {
    /// Create a config with no stall guard.
    pub fn unlimited() -> Self {
        LexerConfig {
            max_idle_steps: 0,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_queue_capacity(mut self, queue_capacity: usize) -> Self {
        self.queue_capacity = queue_capacity;
        self
    }

    #[must_use]
    pub fn with_max_idle_steps(mut self, max_idle_steps: usize) -> Self {
        self.max_idle_steps = max_idle_steps;
        self
    }
}
