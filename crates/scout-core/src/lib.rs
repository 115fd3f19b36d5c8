//! ShopScout domain types.
//!
//! Wire-facing records for the remote search boundary plus the session
//! stage and error types shared by the renderer and the controller.

mod error;
mod query;
mod record;
mod response;
mod stage;

pub use error::*;
pub use query::*;
pub use record::*;
pub use response::*;
pub use stage::*;
