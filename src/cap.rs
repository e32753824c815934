//! Capability tiers a backing sequence may expose.
//!
//! Every backing is at least a [`Sequence`]. Richer tiers are discovered per
//! call through the `as_*` queries, which default to `None`.

pub mod collection;
pub mod erased;
pub mod impls;
pub mod sequence;
pub mod sync;

pub use collection::{Collection, List};
pub use erased::ErasedList;
pub use sequence::{IterOnly, Sequence};
pub use sync::{SyncRooted, Synchronized};
