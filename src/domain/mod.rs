//! Domain layer - the per-session dataset and its failure modes
//!
//! No HTTP or session handling lives here; handlers reach the dataset
//! through the session store.

pub mod errors;
pub mod library;

pub use errors::{DomainError, Entity};
pub use library::{Library, Summary};
