use core::any::Any;

use crate::{error::ListError, ops::len::Len};

/// Loosely-typed list tier over `dyn Any` values
///
/// Lookups return `Result` so that an implementation bound to one element
/// type can reject a probe of another type with [`ListError::InvalidCast`].
pub trait ErasedList: Len {
    #[must_use]
    fn is_read_only(&self) -> bool;
    #[must_use]
    fn is_fixed_size(&self) -> bool;
    fn iter_any(&self) -> Box<dyn Iterator<Item = &dyn Any> + '_>;
    #[must_use]
    fn get_any(&self, index: usize) -> Option<&dyn Any>;
    fn set_any(&mut self, index: usize, value: Box<dyn Any>) -> Result<(), ListError>;
    /// Returns the index the value landed at, or `None` if the backing
    /// accepted it without keeping it
    fn add_any(&mut self, value: Box<dyn Any>) -> Result<Option<usize>, ListError>;
    fn contains_any(&self, value: &dyn Any) -> Result<bool, ListError>;
    fn index_of_any(&self, value: &dyn Any) -> Result<Option<usize>, ListError>;
    fn insert_any(&mut self, index: usize, value: Box<dyn Any>) -> Result<(), ListError>;
    fn remove_any(&mut self, value: &dyn Any) -> Result<bool, ListError>;
    fn remove_at_any(&mut self, index: usize) -> Result<Box<dyn Any>, ListError>;
    fn clear_any(&mut self) -> Result<(), ListError>;
    /// `dest` must be a `Vec<T>`, a `Box<[T]>` or a `Vec<Box<dyn Any>>`
    fn copy_to_any(&self, dest: &mut dyn Any, offset: usize) -> Result<(), ListError>;
}
