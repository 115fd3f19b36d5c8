//! Session stages.

use std::fmt;

/// The three mutually exclusive phases of a search session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stage {
    /// Waiting for the user to submit a query.
    #[default]
    Input,
    /// A remote search is in flight, narration running.
    Searching,
    /// Ranked results are on display.
    Results,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Input => "input",
            Stage::Searching => "searching",
            Stage::Results => "results",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
