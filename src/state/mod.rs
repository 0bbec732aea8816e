//! Application state module

mod drafts;
mod entry;
mod focus;
mod store;

pub use drafts::*;
pub use entry::*;
pub use focus::*;
pub use store::*;
