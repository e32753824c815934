//! The adapter seen through the capability traits, typed and erased, so it
//! can stand in wherever either surface is expected.

use core::any::Any;

use super::{SeqList, cast};
use crate::{
    cap::{Collection, ErasedList, List, Sequence, Synchronized},
    cmp::Comparer,
    copy,
    error::ListError,
    ops::len::Len,
};

impl<T: 'static, C> Len for SeqList<'_, T, C> {
    fn len(&self) -> usize {
        self.count()
    }
}

impl<'a, T, C> Collection<T> for SeqList<'a, T, C>
where
    T: Clone + 'static,
    C: Comparer<T> + Clone + 'a,
{
    fn is_read_only(&self) -> bool {
        SeqList::is_read_only(self)
    }
    fn contains(&self, item: &T) -> bool {
        SeqList::contains(self, item)
    }
    fn add(&mut self, item: T) -> Result<(), ListError> {
        SeqList::add(self, item)
    }
    fn remove(&mut self, item: &T) -> Result<bool, ListError> {
        SeqList::remove(self, item)
    }
    fn clear(&mut self) -> Result<(), ListError> {
        SeqList::clear(self)
    }
}
impl<'a, T, C> List<T> for SeqList<'a, T, C>
where
    T: Clone + 'static,
    C: Comparer<T> + Clone + 'a,
{
    fn is_fixed_size(&self) -> bool {
        SeqList::is_fixed_size(self)
    }
    fn get(&self, index: usize) -> Option<&T> {
        SeqList::get(self, index).ok()
    }
    fn set(&mut self, index: usize, item: T) -> Result<(), ListError> {
        SeqList::set(self, index, item)
    }
    fn index_of(&self, item: &T) -> Option<usize> {
        SeqList::index_of(self, item)
    }
    fn insert(&mut self, index: usize, item: T) -> Result<(), ListError> {
        SeqList::insert(self, index, item)
    }
    fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        SeqList::remove_at(self, index)
    }
}

impl<'a, T, C> ErasedList for SeqList<'a, T, C>
where
    T: Clone + 'static,
    C: Comparer<T> + Clone + 'a,
{
    fn is_read_only(&self) -> bool {
        SeqList::is_read_only(self)
    }
    fn is_fixed_size(&self) -> bool {
        SeqList::is_fixed_size(self)
    }
    fn iter_any(&self) -> Box<dyn Iterator<Item = &dyn Any> + '_> {
        Box::new(SeqList::iter(self).map(|item| item as &dyn Any))
    }
    fn get_any(&self, index: usize) -> Option<&dyn Any> {
        SeqList::get(self, index).ok().map(|item| item as &dyn Any)
    }
    fn set_any(&mut self, index: usize, value: Box<dyn Any>) -> Result<(), ListError> {
        SeqList::set(self, index, cast(value)?)
    }
    fn add_any(&mut self, value: Box<dyn Any>) -> Result<Option<usize>, ListError> {
        let item: T = cast(value)?;
        let before = self.count();
        SeqList::add(self, item.clone())?;
        if self.count() > before
            && SeqList::get(self, before).is_ok_and(|x| self.comparer.equals(x, &item))
        {
            return Ok(Some(before));
        }
        // sets keep their existing copy and may place a new one anywhere
        Ok(SeqList::index_of(self, &item))
    }
    fn contains_any(&self, value: &dyn Any) -> Result<bool, ListError> {
        Ok(SeqList::contains(self, downcast(value)?))
    }
    fn index_of_any(&self, value: &dyn Any) -> Result<Option<usize>, ListError> {
        Ok(SeqList::index_of(self, downcast(value)?))
    }
    fn insert_any(&mut self, index: usize, value: Box<dyn Any>) -> Result<(), ListError> {
        SeqList::insert(self, index, cast(value)?)
    }
    fn remove_any(&mut self, value: &dyn Any) -> Result<bool, ListError> {
        SeqList::remove(self, downcast(value)?)
    }
    fn remove_at_any(&mut self, index: usize) -> Result<Box<dyn Any>, ListError> {
        let item = SeqList::remove_at(self, index)?;
        Ok(Box::new(item))
    }
    fn clear_any(&mut self) -> Result<(), ListError> {
        SeqList::clear(self)
    }
    fn copy_to_any(&self, dest: &mut dyn Any, offset: usize) -> Result<(), ListError> {
        copy::copy_to_any(self.backing.seq(), dest, offset)
    }
}

impl<'a, T, C> Sequence<T> for SeqList<'a, T, C>
where
    T: Clone + 'static,
    C: Comparer<T> + Clone + 'a,
{
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        SeqList::iter(self)
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
    fn as_erased_list(&self) -> Option<&dyn ErasedList> {
        Some(self)
    }
    fn as_erased_list_mut(&mut self) -> Option<&mut dyn ErasedList> {
        Some(self)
    }
    fn as_synchronized(&self) -> Option<&dyn Synchronized> {
        self.backing.seq().as_synchronized()
    }
    fn as_slice(&self) -> Option<&[T]> {
        self.backing.seq().as_slice()
    }
}

impl<'s, T: 'static, C> IntoIterator for &'s SeqList<'_, T, C> {
    type Item = &'s T;
    type IntoIter = Box<dyn Iterator<Item = &'s T> + 's>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn downcast<T: 'static>(value: &dyn Any) -> Result<&T, ListError> {
    value
        .downcast_ref::<T>()
        .ok_or_else(ListError::invalid_cast::<T>)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cap::IterOnly,
        error::{Op, OutOfRange},
        list::{Backing, ListOptions},
    };

    #[test]
    fn test_erased_surface() -> anyhow::Result<()> {
        let mut list = SeqList::new(vec![1_u32, 2]);
        let erased: &mut dyn ErasedList = &mut list;
        assert_eq!(erased.add_any(Box::new(3_u32))?, Some(2));
        assert_eq!(
            erased.add_any(Box::new("3")),
            Err(ListError::invalid_cast::<u32>())
        );
        assert_eq!(erased.index_of_any(&2_u32)?, Some(1));
        assert_eq!(
            erased.index_of_any(&2_i64),
            Err(ListError::invalid_cast::<u32>())
        );
        assert!(erased.contains_any(&3_u32)?);
        erased.set_any(0, Box::new(7_u32))?;
        assert_eq!(erased.get_any(0).and_then(|v| v.downcast_ref::<u32>()), Some(&7));
        erased.insert_any(0, Box::new(0_u32))?;
        let removed = erased.remove_at_any(1)?;
        assert_eq!(removed.downcast_ref::<u32>(), Some(&7));
        assert!(erased.remove_any(&3_u32)?);
        assert_eq!(erased.len(), 2);
        assert_eq!(
            erased
                .iter_any()
                .filter_map(|v| v.downcast_ref::<u32>())
                .copied()
                .collect::<Vec<_>>(),
            [0, 2]
        );
        erased.clear_any()?;
        assert_eq!(list.count(), 0);
        Ok(())
    }

    #[test]
    fn test_erased_add_on_plain_sequence() -> anyhow::Result<()> {
        let mut list = SeqList::new(IterOnly::new(vec!['a']));
        assert_eq!(list.add_any(Box::new('b'))?, Some(1));
        assert_eq!(
            list.insert_any(0, Box::new('c')),
            Err(ListError::unsupported(Op::Insert))
        );
        assert_eq!(list.get(1)?, &'b');
        Ok(())
    }

    #[test]
    fn test_erased_add_reports_landing_index() -> anyhow::Result<()> {
        use std::collections::{BTreeSet, HashSet};

        let mut list = SeqList::new(HashSet::from([1_u32]));
        assert_eq!(list.add_any(Box::new(1_u32))?, Some(0));
        assert_eq!(list.count(), 1);

        let mut list = SeqList::new(BTreeSet::from([1_u32, 3]));
        assert_eq!(list.add_any(Box::new(2_u32))?, Some(1));
        assert_eq!(list.add_any(Box::new(4_u32))?, Some(3));

        let mut list = SeqList::new(vec![7_u32]);
        assert_eq!(list.add_any(Box::new(7_u32))?, Some(1));
        Ok(())
    }

    #[test]
    fn test_erased_copy() -> anyhow::Result<()> {
        let list = SeqList::new(IterOnly::new(vec!['p', 'q']));
        let mut dest: Vec<Box<dyn Any>> = (0..3).map(|_| Box::new(()) as Box<dyn Any>).collect();
        list.copy_to_any(&mut dest, 1)?;
        assert_eq!(dest[1].downcast_ref::<char>(), Some(&'p'));
        assert_eq!(dest[2].downcast_ref::<char>(), Some(&'q'));

        let mut dest = vec!['-'; 2];
        assert_eq!(
            list.copy_to_any(&mut dest, 1),
            Err(OutOfRange::Capacity {
                needed: 2,
                remaining: 1
            }
            .into())
        );
        let mut dest = vec![0_u8; 2];
        assert_eq!(
            list.copy_to_any(&mut dest, 0),
            Err(ListError::InvalidArgument("dest"))
        );
        Ok(())
    }

    #[test]
    fn test_nested_adapter() -> anyhow::Result<()> {
        let inner = SeqList::new(IterOnly::new(vec![1, 2]));
        let mut outer = SeqList::with_options(Backing::owned(inner), ListOptions::new().fast(true));
        // the inner adapter is already indexable, so nothing was copied
        assert!(outer.backing().seq().as_list().is_some());
        outer.add(3)?;
        outer.insert(0, 0).unwrap_err();
        assert_eq!(outer.count(), 3);
        assert_eq!(outer.get(2)?, &3);
        assert_eq!(outer.index_of(&2), Some(1));
        assert!(outer.contains(&1));
        Ok(())
    }

    #[test]
    fn test_into_iter() {
        let list = SeqList::new(vec![1, 2, 3]);
        let mut sum = 0;
        for item in &list {
            sum += item;
        }
        assert_eq!(sum, 6);
    }
}
