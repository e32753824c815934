use crate::{error::ListError, ops::len::Len};

/// Growable collection tier
///
/// Structural mutations are fallible so that read-only and fixed-size
/// collections can refuse them.
pub trait Collection<T>: Len {
    #[must_use]
    fn is_read_only(&self) -> bool;
    #[must_use]
    fn contains(&self, item: &T) -> bool;
    fn add(&mut self, item: T) -> Result<(), ListError>;
    /// Returns `true` if an element was removed
    fn remove(&mut self, item: &T) -> Result<bool, ListError>;
    fn clear(&mut self) -> Result<(), ListError>;
}

/// Indexable tier
pub trait List<T>: Collection<T> {
    #[must_use]
    fn is_fixed_size(&self) -> bool;
    #[must_use]
    fn get(&self, index: usize) -> Option<&T>;
    fn set(&mut self, index: usize, item: T) -> Result<(), ListError>;
    #[must_use]
    fn index_of(&self, item: &T) -> Option<usize>;
    fn insert(&mut self, index: usize, item: T) -> Result<(), ListError>;
    fn remove_at(&mut self, index: usize) -> Result<T, ListError>;
}
