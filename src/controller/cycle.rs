//! Generation counter deciding whether a cycle's results may be applied.

use std::fmt::{Display, Formatter};

/// Identity of one debounced search cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CycleId(u64);

impl CycleId {
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for CycleId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, Default)]
pub struct CycleTracker {
    latest: u64,
}

impl CycleTracker {
    /// Starts a new cycle, superseding every earlier one.
    pub fn begin(&mut self) -> CycleId {
        self.latest += 1;
        CycleId(self.latest)
    }

    /// Supersedes every outstanding cycle without starting a new one.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, cycle: CycleId) -> bool {
        cycle.0 == self.latest
    }
}
