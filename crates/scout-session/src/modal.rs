//! Overlay dialog state.

use scout_core::SessionError;

/// Acknowledgment copy shown after a successful feedback submission.
pub const FEEDBACK_ACK: &str = "Thank you! Your feedback helps us improve.";

/// The two independent overlay dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Settings,
    Feedback,
}

/// A locally acknowledged feedback submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackSubmission {
    /// The item the feedback was opened for, when one was selected.
    pub item_id: Option<u64>,
    pub text: String,
}

/// Tracks which overlays are open and which item is under feedback.
///
/// The two dialogs are independent; the caller decides which one is
/// visually foregrounded. Closing the feedback dialog clears the draft
/// text but keeps the active item id until the next `open_feedback`,
/// matching the shipped behavior.
#[derive(Debug, Default)]
pub struct ModalCoordinator {
    settings_open: bool,
    feedback_open: bool,
    active_feedback_item: Option<u64>,
    feedback_draft: String,
}

impl ModalCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_settings(&mut self) {
        self.settings_open = true;
    }

    pub fn close_settings(&mut self) {
        self.settings_open = false;
    }

    pub fn settings_open(&self) -> bool {
        self.settings_open
    }

    /// Open the feedback dialog for one result item.
    pub fn open_feedback(&mut self, item_id: u64) {
        self.active_feedback_item = Some(item_id);
        self.feedback_open = true;
    }

    /// Close the feedback dialog, discarding any draft text.
    ///
    /// Covers explicit close, cancel and overlay dismissal; all three share
    /// this path.
    pub fn close_feedback(&mut self) {
        self.feedback_open = false;
        self.feedback_draft.clear();
    }

    pub fn feedback_open(&self) -> bool {
        self.feedback_open
    }

    /// The item currently under feedback. Only meaningful while the
    /// feedback dialog is open.
    pub fn active_feedback_item(&self) -> Option<u64> {
        self.active_feedback_item
    }

    pub fn set_feedback_draft(&mut self, text: impl Into<String>) {
        self.feedback_draft = text.into();
    }

    pub fn feedback_draft(&self) -> &str {
        &self.feedback_draft
    }

    /// Submit the current draft, closing the dialog on success.
    ///
    /// An empty trimmed draft is rejected and the dialog stays open.
    pub fn submit_feedback(&mut self) -> Result<FeedbackSubmission, SessionError> {
        let text = self.feedback_draft.trim();
        if text.is_empty() {
            return Err(SessionError::Validation(
                "Please enter your feedback".to_string(),
            ));
        }
        let submission = FeedbackSubmission {
            item_id: self.active_feedback_item,
            text: text.to_string(),
        };
        self.feedback_draft.clear();
        self.feedback_open = false;
        Ok(submission)
    }
}
