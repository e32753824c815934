//! List semantics over any sequence.
//!
//! A [`list::SeqList`] wraps a caller-supplied [`cap::Sequence`] and serves
//! indexing, growth, removal and lookups from whatever capabilities that
//! sequence actually has, falling back to linear walks or to rebinding the
//! backing, and failing with [`error::ListError`] when nothing applies.

pub mod buf;
pub mod cap;
pub mod cmp;
pub mod copy;
pub mod derived;
pub mod error;
pub mod list;
pub mod ops;
pub mod search;

pub use error::ListError;
pub use list::{Backing, ListOptions, SeqList};
