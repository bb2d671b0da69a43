//! Per-path classification: scope, change type, and display label.
//!
//! All three classifiers are pure functions over a single staged path.
//! They never fail; unrecognized paths fall through to defaults.

pub mod change_type;
pub mod label;
pub mod scope;

pub use change_type::{ChangeType, change_type_of};
pub use label::label_of;
pub use scope::scope_of;
