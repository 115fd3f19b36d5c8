//! Search session orchestration.
//!
//! The controller owns the session state machine and drives an abstract
//! `UiSurface`; the remote service, the modal state, the transient error
//! slot and the preference store are each their own small component.

mod backend;
mod controller;
mod modal;
mod notifier;
mod prefs;
mod surface;

pub use backend::*;
pub use controller::*;
pub use modal::*;
pub use notifier::*;
pub use prefs::*;
pub use surface::*;
