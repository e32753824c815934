//! The sequence-to-list adapter.
//!
//! [`SeqList`] wraps any [`Sequence`] and offers full list semantics over it.
//! Every operation probes the backing's capabilities and commits to the first
//! strategy that applies, in this order:
//!
//! 1. the typed collection or list capability
//! 2. the erased list capability
//! 3. a linear walk, or for `add`/`remove` a rebind of the backing to a
//!    derived sequence
//! 4. [`ListError::Unsupported`]
//!
//! The adapter does no locking. If the backing is mutated by someone else
//! while an operation walks it, the outcome is whatever the backing's own
//! contract says.
//!
//! # Rebinding
//!
//! `add` and `remove` on a backing without native support replace the
//! backing with an [`Edited`] log over the previous one, and later fallbacks
//! append to that same log. From
//! then on the adapter no longer writes through to the caller's sequence:
//! further external changes are still read lazily, but the adapter's own
//! additions and removals exist only in the derived sequence.
//!
//! ```
//! use seqlist::{cap::IterOnly, list::SeqList};
//!
//! let mut list = SeqList::new(IterOnly::new(vec![1, 2]));
//! list.add(3).unwrap();
//! assert_eq!(list.get(2), Ok(&3));
//! assert_eq!(list.count(), 3);
//! ```

use core::any::Any;
use std::sync::Mutex;

use crate::{
    buf::FixedBuf,
    cap::Sequence,
    cmp::{Comparer, DefaultComparer},
    copy,
    derived::{Edited, Empty},
    error::{ListError, Op},
    ops::len::Len,
    search,
};

mod backing;
mod options;
mod views;

pub use backing::Backing;
pub use options::ListOptions;

#[derive(Debug)]
pub struct SeqList<'a, T, C = DefaultComparer> {
    backing: Backing<'a, T>,
    comparer: C,
}
impl<'a, T: 'static> SeqList<'a, T> {
    #[must_use]
    pub fn new<S: Sequence<T> + 'a>(seq: S) -> Self {
        Self::from_backing(Backing::owned(seq))
    }
    /// Mutations write through to `seq` until a rebind
    #[must_use]
    pub fn borrowed<S: Sequence<T> + 'a>(seq: &'a mut S) -> Self {
        Self::from_backing(Backing::borrowed(seq))
    }
    /// `seq` is never mutated; growth and removal always rebind
    #[must_use]
    pub fn shared<S: Sequence<T> + 'a>(seq: &'a S) -> Self {
        Self::from_backing(Backing::shared(seq))
    }
    #[must_use]
    pub const fn from_backing(backing: Backing<'a, T>) -> Self {
        Self {
            backing,
            comparer: DefaultComparer,
        }
    }
}
impl<'a, T> SeqList<'a, T>
where
    T: Clone + PartialEq + 'static,
{
    /// With `options.fast`, a backing that is not indexable is copied once
    /// into an owned buffer, so that every later access is O(1).
    #[must_use]
    pub fn with_options(backing: Backing<'a, T>, options: ListOptions) -> Self {
        Self::from_backing(materialize(backing, options))
    }
}
fn materialize<'a, T>(backing: Backing<'a, T>, options: ListOptions) -> Backing<'a, T>
where
    T: Clone + PartialEq + 'a,
{
    if !options.fast {
        return backing;
    }
    let seq = backing.seq();
    if seq.as_list().is_some() || seq.as_erased_list().is_some() {
        return backing;
    }
    let items: Vec<T> = seq.iter().cloned().collect();
    if options.fixed_size {
        return Backing::owned(FixedBuf::from(items));
    }
    Backing::owned(items)
}

impl<'a, T, C> SeqList<'a, T, C> {
    #[must_use]
    pub fn with_comparer<D>(self, comparer: D) -> SeqList<'a, T, D> {
        SeqList {
            backing: self.backing,
            comparer,
        }
    }
    #[must_use]
    pub const fn backing(&self) -> &Backing<'a, T> {
        &self.backing
    }
    #[must_use]
    pub fn into_backing(self) -> Backing<'a, T> {
        self.backing
    }

}

impl<'a, T, C> SeqList<'a, T, C>
where
    T: 'static,
{
    fn rebind(&mut self, edit: impl FnOnce(&mut Edited<'a, T>)) {
        let prev = core::mem::replace(&mut self.backing, Backing::owned(Empty));
        let mut edited = match prev {
            Backing::Edited(edited) => edited,
            prev => Box::new(Edited::new(prev)),
        };
        edit(&mut *edited);
        self.backing = Backing::Edited(edited);
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        self.backing.seq().iter()
    }

    /// O(n) unless the backing knows its length
    #[must_use]
    pub fn count(&self) -> usize {
        let seq = self.backing.seq();
        if let Some(collection) = seq.as_collection() {
            return collection.len();
        }
        if let Some(list) = seq.as_erased_list() {
            return list.len();
        }
        seq.iter().count()
    }

    /// O(n) unless the backing is indexable
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        let seq = self.backing.seq();
        if let Some(list) = seq.as_list() {
            return list.get(index).ok_or_else(|| ListError::index(index, list.len()));
        }
        if let Some(list) = seq.as_erased_list() {
            let value = list
                .get_any(index)
                .ok_or_else(|| ListError::index(index, list.len()))?;
            return value
                .downcast_ref::<T>()
                .ok_or_else(ListError::invalid_cast::<T>);
        }
        let mut len = 0;
        for item in seq.iter() {
            if len == index {
                return Ok(item);
            }
            len += 1;
        }
        Err(ListError::index(index, len))
    }

    pub fn set(&mut self, index: usize, item: T) -> Result<(), ListError> {
        let Some(seq) = self.backing.seq_mut() else {
            return Err(ListError::unsupported(Op::Set));
        };
        if let Some(list) = seq.as_list_mut() {
            return list.set(index, item);
        }
        if let Some(list) = seq.as_erased_list_mut() {
            return list.set_any(index, Box::new(item));
        }
        Err(ListError::unsupported(Op::Set))
    }

    /// Falls back to rebinding the backing to a copy with `item` appended
    pub fn add(&mut self, item: T) -> Result<(), ListError> {
        if let Some(seq) = self.backing.seq_mut() {
            if let Some(collection) = seq.as_collection_mut() {
                return collection.add(item);
            }
            if let Some(list) = seq.as_erased_list_mut() {
                return list.add_any(Box::new(item)).map(|_| ());
            }
        }
        self.rebind(|edited| edited.append(item));
        Ok(())
    }

    pub fn insert(&mut self, index: usize, item: T) -> Result<(), ListError> {
        let Some(seq) = self.backing.seq_mut() else {
            return Err(ListError::unsupported(Op::Insert));
        };
        if let Some(list) = seq.as_list_mut() {
            return list.insert(index, item);
        }
        if let Some(list) = seq.as_erased_list_mut() {
            return list.insert_any(index, Box::new(item));
        }
        Err(ListError::unsupported(Op::Insert))
    }

    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        let Some(seq) = self.backing.seq_mut() else {
            return Err(ListError::unsupported(Op::RemoveAt));
        };
        if let Some(list) = seq.as_list_mut() {
            return list.remove_at(index);
        }
        if let Some(list) = seq.as_erased_list_mut() {
            // nothing is removed unless the element is a `T`
            match list.get_any(index) {
                None => return Err(ListError::index(index, list.len())),
                Some(value) if !value.is::<T>() => return Err(ListError::invalid_cast::<T>()),
                Some(_) => (),
            }
            return cast(list.remove_at_any(index)?);
        }
        Err(ListError::unsupported(Op::RemoveAt))
    }

    pub fn clear(&mut self) -> Result<(), ListError> {
        let Some(seq) = self.backing.seq_mut() else {
            return Err(ListError::unsupported(Op::Clear));
        };
        if let Some(collection) = seq.as_collection_mut() {
            return collection.clear();
        }
        if let Some(list) = seq.as_erased_list_mut() {
            return list.clear_any();
        }
        Err(ListError::unsupported(Op::Clear))
    }

    #[must_use]
    pub fn is_read_only(&self) -> bool {
        if self.backing.is_shared() {
            return true;
        }
        let seq = self.backing.seq();
        if let Some(collection) = seq.as_collection() {
            return collection.is_read_only();
        }
        if let Some(list) = seq.as_erased_list() {
            return list.is_read_only();
        }
        true
    }

    #[must_use]
    pub fn is_fixed_size(&self) -> bool {
        if self.backing.is_shared() {
            return true;
        }
        let seq = self.backing.seq();
        if let Some(list) = seq.as_list() {
            return list.is_fixed_size();
        }
        if let Some(list) = seq.as_erased_list() {
            return list.is_fixed_size();
        }
        true
    }

    #[must_use]
    pub fn is_synchronized(&self) -> bool {
        self.backing
            .seq()
            .as_synchronized()
            .is_some_and(|sync| sync.is_synchronized())
    }

    pub fn sync_root(&self) -> Result<&Mutex<()>, ListError> {
        let sync = self
            .backing
            .seq()
            .as_synchronized()
            .ok_or(ListError::unsupported(Op::SyncRoot))?;
        Ok(sync.sync_root())
    }
}

impl<'a, T, C> SeqList<'a, T, C>
where
    T: 'static,
    C: Comparer<T>,
{
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        let seq = self.backing.seq();
        if let Some(collection) = seq.as_collection() {
            return collection.contains(item);
        }
        if let Some(list) = seq.as_erased_list() {
            return list.contains_any(item).unwrap_or(false);
        }
        seq.iter().any(|x| self.comparer.equals(x, item))
    }

    /// `None` if `item` is absent
    #[must_use]
    pub fn index_of(&self, item: &T) -> Option<usize> {
        search::index_of_with(self.backing.seq(), item, &self.comparer)
    }
}

impl<'a, T, C> SeqList<'a, T, C>
where
    T: Clone + 'static,
    C: Comparer<T> + Clone + 'a,
{
    /// Without native removal the backing is rebound to a copy that skips
    /// the first match, and `true` is returned whether or not `item` was
    /// present.
    pub fn remove(&mut self, item: &T) -> Result<bool, ListError> {
        if let Some(seq) = self.backing.seq_mut() {
            if let Some(collection) = seq.as_collection_mut() {
                return collection.remove(item);
            }
            if let Some(list) = seq.as_erased_list_mut() {
                return list.remove_any(item);
            }
        }
        let item = item.clone();
        let comparer = self.comparer.clone();
        self.rebind(|edited| edited.skip_one(item, comparer));
        Ok(true)
    }

    /// Clones every element into `dest[offset..]`
    pub fn copy_to(&self, dest: &mut [T], offset: usize) -> Result<(), ListError> {
        copy::copy_to_slice(self.backing.seq(), dest, offset)
    }
}

fn cast<T: 'static>(value: Box<dyn Any>) -> Result<T, ListError> {
    value
        .downcast::<T>()
        .map(|value| *value)
        .map_err(|_| ListError::invalid_cast::<T>())
}
