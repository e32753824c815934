use core::marker::PhantomData;

use crate::{
    cap::{Collection, List, Sequence, impls::set_slot},
    error::{ListError, Op},
    ops::{
        len::{Capacity, Len},
        seq::{Seq, SeqMut},
    },
};

/// A list whose length is its capacity
///
/// Elements can be overwritten in place; every structural change is refused.
#[derive(Debug, Clone)]
pub struct FixedBuf<S, T> {
    buf: S,
    item: PhantomData<T>,
}
impl<S, T> FixedBuf<S, T>
where
    S: SeqMut<T>,
{
    #[must_use]
    pub const fn new(buf: S) -> Self {
        Self {
            buf,
            item: PhantomData,
        }
    }
    #[must_use]
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        self.buf.as_slice_mut()
    }
    #[must_use]
    pub fn into_inner(self) -> S {
        self.buf
    }
}
impl<S, T> Seq<T> for FixedBuf<S, T>
where
    S: Seq<T>,
{
    fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }
}
impl<T> From<Vec<T>> for FixedBuf<Box<[T]>, T> {
    fn from(value: Vec<T>) -> Self {
        Self::new(value.into_boxed_slice())
    }
}
impl<S, T> Len for FixedBuf<S, T>
where
    S: Seq<T>,
{
    fn len(&self) -> usize {
        self.buf.as_slice().len()
    }
}
impl<S, T> Capacity for FixedBuf<S, T>
where
    S: Seq<T>,
{
    fn capacity(&self) -> usize {
        self.len()
    }
}

impl<S, T> Sequence<T> for FixedBuf<S, T>
where
    S: SeqMut<T>,
    T: PartialEq,
{
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.buf.as_slice().iter())
    }
    fn as_collection(&self) -> Option<&dyn Collection<T>> {
        Some(self)
    }
    fn as_collection_mut(&mut self) -> Option<&mut dyn Collection<T>> {
        Some(self)
    }
    fn as_list(&self) -> Option<&dyn List<T>> {
        Some(self)
    }
    fn as_list_mut(&mut self) -> Option<&mut dyn List<T>> {
        Some(self)
    }
    fn as_slice(&self) -> Option<&[T]> {
        Some(self.buf.as_slice())
    }
}
impl<S, T> Collection<T> for FixedBuf<S, T>
where
    S: SeqMut<T>,
    T: PartialEq,
{
    fn is_read_only(&self) -> bool {
        false
    }
    fn contains(&self, item: &T) -> bool {
        self.buf.as_slice().contains(item)
    }
    fn add(&mut self, _item: T) -> Result<(), ListError> {
        Err(ListError::unsupported(Op::Add))
    }
    fn remove(&mut self, _item: &T) -> Result<bool, ListError> {
        Err(ListError::unsupported(Op::Remove))
    }
    fn clear(&mut self) -> Result<(), ListError> {
        Err(ListError::unsupported(Op::Clear))
    }
}
impl<S, T> List<T> for FixedBuf<S, T>
where
    S: SeqMut<T>,
    T: PartialEq,
{
    fn is_fixed_size(&self) -> bool {
        true
    }
    fn get(&self, index: usize) -> Option<&T> {
        self.buf.as_slice().get(index)
    }
    fn set(&mut self, index: usize, item: T) -> Result<(), ListError> {
        set_slot(self.buf.as_slice_mut(), index, item)
    }
    fn index_of(&self, item: &T) -> Option<usize> {
        self.buf.as_slice().iter().position(|x| x == item)
    }
    fn insert(&mut self, _index: usize, _item: T) -> Result<(), ListError> {
        Err(ListError::unsupported(Op::Insert))
    }
    fn remove_at(&mut self, _index: usize) -> Result<T, ListError> {
        Err(ListError::unsupported(Op::RemoveAt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::len::Full;

    #[test]
    fn test_fixed_buf() {
        let mut buf = FixedBuf::new([1, 2, 3]);
        assert!(buf.is_full());
        assert_eq!(buf.capacity(), 3);
        List::set(&mut buf, 1, 7).unwrap();
        assert_eq!(List::get(&buf, 1), Some(&7));
        assert_eq!(List::set(&mut buf, 3, 0), Err(ListError::index(3, 3)));
        assert_eq!(
            List::insert(&mut buf, 0, 0),
            Err(ListError::unsupported(Op::Insert))
        );
        assert_eq!(
            Collection::add(&mut buf, 4),
            Err(ListError::unsupported(Op::Add))
        );
        assert_eq!(buf.into_inner(), [1, 7, 3]);
    }

    #[test]
    fn test_borrowed_storage() {
        let mut data = vec!['a', 'b'];
        let mut buf = FixedBuf::new(data.as_mut_slice());
        buf.as_slice_mut()[0] = 'z';
        assert_eq!(List::index_of(&buf, &'b'), Some(1));
        drop(buf);
        assert_eq!(data, ['z', 'b']);
    }
}
