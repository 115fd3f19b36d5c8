//! Abstract UI surface.
//!
//! The controller drives a surface implementation instead of wiring itself
//! to a concrete rendering layer, so the whole state machine runs headless
//! in tests.

use scout_core::Stage;
use scout_render::CardFragment;

use crate::ModalKind;

/// Everything the session controller asks of the rendering layer.
///
/// Calls are cosmetic from the state machine's point of view: a surface
/// that ignores them cannot corrupt session state.
pub trait UiSurface {
    /// A stage became active.
    fn stage_changed(&mut self, stage: Stage);

    /// Scroll the viewport back to the top. Fired on every stage change.
    fn scroll_to_top(&mut self);

    /// Update the searching-stage progress text.
    fn progress(&mut self, text: &str);

    /// Display ranked result cards, in the given order.
    fn show_results(&mut self, cards: &[CardFragment]);

    /// Display a transient error message, replacing any current one.
    fn show_error(&mut self, message: &str);

    /// Clear the transient error message.
    fn hide_error(&mut self);

    /// Show or hide an overlay dialog.
    fn set_modal(&mut self, modal: ModalKind, visible: bool);

    /// Clear the feedback dialog's text input.
    fn clear_feedback_input(&mut self);

    /// Acknowledge a locally recorded feedback submission.
    fn feedback_acknowledged(&mut self, message: &str);

    /// Open an external link in a new context.
    fn open_url(&mut self, url: &str);
}
