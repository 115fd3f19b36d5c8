//! Result card rendering.
//!
//! Pure mapping from `ResultRecord` to HTML fragments plus the action
//! bindings each card exposes. All free text is escaped as plain content;
//! nothing here performs navigation or mutates session state.

mod card;
mod escape;
mod format;
mod fragments;

pub use card::*;
pub use escape::escape_html;
pub use format::{format_count, format_price};
pub use fragments::*;
