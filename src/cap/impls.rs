use core::hash::{BuildHasher, Hash};
use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};

use super::{Collection, List, Sequence};
use crate::error::{ListError, Op};

pub(crate) fn set_slot<T>(slice: &mut [T], index: usize, item: T) -> Result<(), ListError> {
    let len = slice.len();
    let slot = slice.get_mut(index).ok_or(ListError::index(index, len))?;
    *slot = item;
    Ok(())
}

impl<T: PartialEq> Sequence<T> for Vec<T> {
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(<[T]>::iter(self))
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
        Some(Vec::as_slice(self))
    }
}
impl<T: PartialEq> Collection<T> for Vec<T> {
    fn is_read_only(&self) -> bool {
        false
    }
    fn contains(&self, item: &T) -> bool {
        <[T]>::contains(self, item)
    }
    fn add(&mut self, item: T) -> Result<(), ListError> {
        Vec::push(self, item);
        Ok(())
    }
    fn remove(&mut self, item: &T) -> Result<bool, ListError> {
        let Some(index) = List::index_of(self, item) else {
            return Ok(false);
        };
        Vec::remove(self, index);
        Ok(true)
    }
    fn clear(&mut self) -> Result<(), ListError> {
        Vec::clear(self);
        Ok(())
    }
}
impl<T: PartialEq> List<T> for Vec<T> {
    fn is_fixed_size(&self) -> bool {
        false
    }
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
    fn set(&mut self, index: usize, item: T) -> Result<(), ListError> {
        set_slot(self, index, item)
    }
    fn index_of(&self, item: &T) -> Option<usize> {
        <[T]>::iter(self).position(|x| x == item)
    }
    fn insert(&mut self, index: usize, item: T) -> Result<(), ListError> {
        let len = Vec::len(self);
        if len < index {
            return Err(ListError::index(index, len));
        }
        Vec::insert(self, index, item);
        Ok(())
    }
    fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        let len = Vec::len(self);
        if len <= index {
            return Err(ListError::index(index, len));
        }
        Ok(Vec::remove(self, index))
    }
}

impl<T: PartialEq> Sequence<T> for VecDeque<T> {
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(VecDeque::iter(self))
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
}
impl<T: PartialEq> Collection<T> for VecDeque<T> {
    fn is_read_only(&self) -> bool {
        false
    }
    fn contains(&self, item: &T) -> bool {
        VecDeque::contains(self, item)
    }
    fn add(&mut self, item: T) -> Result<(), ListError> {
        VecDeque::push_back(self, item);
        Ok(())
    }
    fn remove(&mut self, item: &T) -> Result<bool, ListError> {
        let Some(index) = List::index_of(self, item) else {
            return Ok(false);
        };
        VecDeque::remove(self, index);
        Ok(true)
    }
    fn clear(&mut self) -> Result<(), ListError> {
        VecDeque::clear(self);
        Ok(())
    }
}
impl<T: PartialEq> List<T> for VecDeque<T> {
    fn is_fixed_size(&self) -> bool {
        false
    }
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
    fn set(&mut self, index: usize, item: T) -> Result<(), ListError> {
        let len = VecDeque::len(self);
        let slot = VecDeque::get_mut(self, index).ok_or(ListError::index(index, len))?;
        *slot = item;
        Ok(())
    }
    fn index_of(&self, item: &T) -> Option<usize> {
        VecDeque::iter(self).position(|x| x == item)
    }
    fn insert(&mut self, index: usize, item: T) -> Result<(), ListError> {
        let len = VecDeque::len(self);
        if len < index {
            return Err(ListError::index(index, len));
        }
        VecDeque::insert(self, index, item);
        Ok(())
    }
    fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        let len = VecDeque::len(self);
        VecDeque::remove(self, index).ok_or(ListError::index(index, len))
    }
}

impl<T: PartialEq> Sequence<T> for LinkedList<T> {
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(LinkedList::iter(self))
    }
    fn as_collection(&self) -> Option<&dyn Collection<T>> {
        Some(self)
    }
    fn as_collection_mut(&mut self) -> Option<&mut dyn Collection<T>> {
        Some(self)
    }
}
impl<T: PartialEq> Collection<T> for LinkedList<T> {
    fn is_read_only(&self) -> bool {
        false
    }
    fn contains(&self, item: &T) -> bool {
        LinkedList::contains(self, item)
    }
    fn add(&mut self, item: T) -> Result<(), ListError> {
        LinkedList::push_back(self, item);
        Ok(())
    }
    fn remove(&mut self, item: &T) -> Result<bool, ListError> {
        let Some(index) = LinkedList::iter(self).position(|x| x == item) else {
            return Ok(false);
        };
        let mut tail = LinkedList::split_off(self, index);
        tail.pop_front();
        LinkedList::append(self, &mut tail);
        Ok(true)
    }
    fn clear(&mut self) -> Result<(), ListError> {
        LinkedList::clear(self);
        Ok(())
    }
}

impl<T: Eq + Hash, S: BuildHasher> Sequence<T> for HashSet<T, S> {
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(HashSet::iter(self))
    }
    fn as_collection(&self) -> Option<&dyn Collection<T>> {
        Some(self)
    }
    fn as_collection_mut(&mut self) -> Option<&mut dyn Collection<T>> {
        Some(self)
    }
}
impl<T: Eq + Hash, S: BuildHasher> Collection<T> for HashSet<T, S> {
    fn is_read_only(&self) -> bool {
        false
    }
    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }
    /// Adding a value already present leaves the set unchanged
    fn add(&mut self, item: T) -> Result<(), ListError> {
        HashSet::insert(self, item);
        Ok(())
    }
    fn remove(&mut self, item: &T) -> Result<bool, ListError> {
        Ok(HashSet::remove(self, item))
    }
    fn clear(&mut self) -> Result<(), ListError> {
        HashSet::clear(self);
        Ok(())
    }
}

impl<T: Ord> Sequence<T> for BTreeSet<T> {
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(BTreeSet::iter(self))
    }
    fn as_collection(&self) -> Option<&dyn Collection<T>> {
        Some(self)
    }
    fn as_collection_mut(&mut self) -> Option<&mut dyn Collection<T>> {
        Some(self)
    }
}
impl<T: Ord> Collection<T> for BTreeSet<T> {
    fn is_read_only(&self) -> bool {
        false
    }
    fn contains(&self, item: &T) -> bool {
        BTreeSet::contains(self, item)
    }
    fn add(&mut self, item: T) -> Result<(), ListError> {
        BTreeSet::insert(self, item);
        Ok(())
    }
    fn remove(&mut self, item: &T) -> Result<bool, ListError> {
        Ok(BTreeSet::remove(self, item))
    }
    fn clear(&mut self) -> Result<(), ListError> {
        BTreeSet::clear(self);
        Ok(())
    }
}

/// A borrowed slice is a read-only list: it never hands out mutable
/// capabilities, and its mutators refuse every call.
impl<T: PartialEq> Sequence<T> for &[T] {
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(<[T]>::iter(self))
    }
    fn as_collection(&self) -> Option<&dyn Collection<T>> {
        Some(self)
    }
    fn as_list(&self) -> Option<&dyn List<T>> {
        Some(self)
    }
    fn as_slice(&self) -> Option<&[T]> {
        Some(*self)
    }
}
impl<T: PartialEq> Collection<T> for &[T] {
    fn is_read_only(&self) -> bool {
        true
    }
    fn contains(&self, item: &T) -> bool {
        <[T]>::contains(self, item)
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
impl<T: PartialEq> List<T> for &[T] {
    fn is_fixed_size(&self) -> bool {
        true
    }
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
    fn set(&mut self, _index: usize, _item: T) -> Result<(), ListError> {
        Err(ListError::unsupported(Op::Set))
    }
    fn index_of(&self, item: &T) -> Option<usize> {
        <[T]>::iter(self).position(|x| x == item)
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
    use crate::ops::len::Len;

    #[test]
    fn test_vec() {
        let mut v = vec![1, 2, 3];
        assert_eq!(List::insert(&mut v, 4, 9), Err(ListError::index(4, 3)));
        List::insert(&mut v, 3, 4).unwrap();
        assert_eq!(List::remove_at(&mut v, 0), Ok(1));
        assert_eq!(List::remove_at(&mut v, 3), Err(ListError::index(3, 3)));
        assert_eq!(Collection::remove(&mut v, &3), Ok(true));
        assert_eq!(Collection::remove(&mut v, &3), Ok(false));
        assert_eq!(v, [2, 4]);
        List::set(&mut v, 1, 5).unwrap();
        assert_eq!(List::get(&v, 1), Some(&5));
        assert_eq!(List::set(&mut v, 2, 5), Err(ListError::index(2, 2)));
    }

    #[test]
    fn test_vec_deque() {
        let mut q = VecDeque::from([1, 2]);
        q.push_front(0);
        assert_eq!(List::index_of(&q, &2), Some(2));
        assert_eq!(List::remove_at(&mut q, 3), Err(ListError::index(3, 3)));
        assert_eq!(List::remove_at(&mut q, 0), Ok(0));
        Collection::add(&mut q, 3).unwrap();
        assert_eq!(Sequence::iter(&q).copied().collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn test_linked_list() {
        let mut l = LinkedList::from([1, 2, 3, 2]);
        assert_eq!(Collection::remove(&mut l, &2), Ok(true));
        assert_eq!(l.iter().copied().collect::<Vec<_>>(), [1, 3, 2]);
        assert_eq!(Collection::remove(&mut l, &4), Ok(false));
        assert_eq!(Len::len(&l), 3);
        assert!(l.as_list().is_none());
    }

    #[test]
    fn test_hash_set() {
        let mut s: HashSet<u8> = HashSet::new();
        Collection::add(&mut s, 1).unwrap();
        Collection::add(&mut s, 1).unwrap();
        assert_eq!(Len::len(&s), 1);
        assert!(Collection::contains(&s, &1));
        assert_eq!(Collection::remove(&mut s, &1), Ok(true));
    }

    #[test]
    fn test_slice_is_read_only() {
        let data = [1, 2, 3];
        let mut slice: &[i32] = &data;
        assert!(slice.as_collection_mut().is_none());
        assert!(slice.as_list_mut().is_none());
        let list = slice.as_list().unwrap();
        assert!(list.is_read_only());
        assert!(list.is_fixed_size());
        assert_eq!(list.get(2), Some(&3));
        assert_eq!(
            Collection::add(&mut slice, 4),
            Err(ListError::unsupported(Op::Add))
        );
    }
}
