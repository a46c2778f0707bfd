//! PIN attempt tracking

/// Number of PIN entries allowed per run
pub const MAX_PIN_ATTEMPTS: u8 = 3;

/// Remaining PIN attempts for the current run
///
/// There is no reset and no timer: once exhausted the run is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginAttempts {
    remaining: u8,
}

impl LoginAttempts {
    pub fn new() -> Self {
        Self {
            remaining: MAX_PIN_ATTEMPTS,
        }
    }

    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    /// Record a wrong PIN and return how many attempts are left
    pub fn record_failure(&mut self) -> u8 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

impl Default for LoginAttempts {
    fn default() -> Self {
        Self::new()
    }
}
