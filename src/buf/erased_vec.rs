use core::{any::Any, marker::PhantomData};

use crate::{
    cap::{ErasedList, Sequence},
    copy,
    error::ListError,
    ops::len::Len,
};

/// Type-erased storage that only offers the erased list capability
///
/// Every stored value is a `T`; values of any other type are refused.
#[derive(Debug)]
pub struct ErasedVec<T> {
    items: Vec<Box<dyn Any>>,
    item: PhantomData<T>,
}
impl<T: Any> ErasedVec<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            item: PhantomData,
        }
    }
    pub fn push(&mut self, value: T) {
        self.items.push(Box::new(value));
    }

    fn check(value: Box<dyn Any>) -> Result<Box<dyn Any>, ListError> {
        if !value.is::<T>() {
            return Err(ListError::invalid_cast::<T>());
        }
        Ok(value)
    }
}
impl<T: Any> Default for ErasedVec<T> {
    fn default() -> Self {
        Self::new()
    }
}
impl<T: Any> FromIterator<T> for ErasedVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut new = Self::new();
        for item in iter {
            new.push(item);
        }
        new
    }
}
impl<T> Len for ErasedVec<T> {
    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Sequence<T> for ErasedVec<T>
where
    T: PartialEq + Clone + 'static,
{
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.items.iter().filter_map(|v| v.downcast_ref::<T>()))
    }
    fn as_erased_list(&self) -> Option<&dyn ErasedList> {
        Some(self)
    }
    fn as_erased_list_mut(&mut self) -> Option<&mut dyn ErasedList> {
        Some(self)
    }
}
impl<T> ErasedList for ErasedVec<T>
where
    T: PartialEq + Clone + 'static,
{
    fn is_read_only(&self) -> bool {
        false
    }
    fn is_fixed_size(&self) -> bool {
        false
    }
    fn iter_any(&self) -> Box<dyn Iterator<Item = &dyn Any> + '_> {
        Box::new(self.items.iter().map(|v| &**v))
    }
    fn get_any(&self, index: usize) -> Option<&dyn Any> {
        self.items.get(index).map(|v| &**v)
    }
    fn set_any(&mut self, index: usize, value: Box<dyn Any>) -> Result<(), ListError> {
        let value = Self::check(value)?;
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(ListError::index(index, len))?;
        *slot = value;
        Ok(())
    }
    fn add_any(&mut self, value: Box<dyn Any>) -> Result<Option<usize>, ListError> {
        let value = Self::check(value)?;
        self.items.push(value);
        Ok(Some(self.items.len() - 1))
    }
    fn contains_any(&self, value: &dyn Any) -> Result<bool, ListError> {
        Ok(self.index_of_any(value)?.is_some())
    }
    /// A value of another type is never contained
    fn index_of_any(&self, value: &dyn Any) -> Result<Option<usize>, ListError> {
        let Some(value) = value.downcast_ref::<T>() else {
            return Ok(None);
        };
        Ok(self
            .items
            .iter()
            .position(|v| v.downcast_ref::<T>() == Some(value)))
    }
    fn insert_any(&mut self, index: usize, value: Box<dyn Any>) -> Result<(), ListError> {
        let value = Self::check(value)?;
        let len = self.items.len();
        if len < index {
            return Err(ListError::index(index, len));
        }
        self.items.insert(index, value);
        Ok(())
    }
    fn remove_any(&mut self, value: &dyn Any) -> Result<bool, ListError> {
        let Some(index) = self.index_of_any(value)? else {
            return Ok(false);
        };
        self.items.remove(index);
        Ok(true)
    }
    fn remove_at_any(&mut self, index: usize) -> Result<Box<dyn Any>, ListError> {
        let len = self.items.len();
        if len <= index {
            return Err(ListError::index(index, len));
        }
        Ok(self.items.remove(index))
    }
    fn clear_any(&mut self) -> Result<(), ListError> {
        self.items.clear();
        Ok(())
    }
    fn copy_to_any(&self, dest: &mut dyn Any, offset: usize) -> Result<(), ListError> {
        copy::copy_to_any(self, dest, offset)
    }
}
