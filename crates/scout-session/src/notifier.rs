//! Single-slot transient error display state.

/// Last-write-wins transient message slot.
///
/// No queueing and no timed dismissal: a new message replaces the current
/// one, and only an explicit `hide` (user dismissal or the start of a new
/// search attempt) clears it.
#[derive(Debug, Default)]
pub struct ErrorNotifier {
    current: Option<String>,
}

impl ErrorNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed message.
    pub fn show(&mut self, message: impl Into<String>) {
        self.current = Some(message.into());
    }

    /// Clear the displayed message.
    pub fn hide(&mut self) {
        self.current = None;
    }

    /// The currently visible message, if any.
    pub fn message(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}
