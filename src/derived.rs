//! Sequences the adapter rebinds to when the backing cannot grow or shrink
//! natively. They own the previous backing and re-read it on every
//! traversal.

use core::fmt;

use crate::{cap::Sequence, cmp::Comparer, list::Backing};

#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;
impl<T> Sequence<T> for Empty {
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(core::iter::empty())
    }
}

/// `base` with a log of appends and single-match removals replayed over it
///
/// Edits are numbered in the order they were made. A removal skips the first
/// match among the elements present when it was made: every element of
/// `base` and every earlier append. Repeated edits extend the log, so the
/// node never nests.
pub struct Edited<'a, T> {
    base: Backing<'a, T>,
    /// `(edit number, item)`
    appended: Vec<(usize, T)>,
    /// Sorted by `at`
    skipped: Vec<Skip<'a, T>>,
    edits: usize,
}
struct Skip<'a, T> {
    at: usize,
    item: T,
    comparer: Box<dyn Comparer<T> + 'a>,
}
impl<'a, T> Edited<'a, T> {
    #[must_use]
    pub const fn new(base: Backing<'a, T>) -> Self {
        Self {
            base,
            appended: vec![],
            skipped: vec![],
            edits: 0,
        }
    }

    #[must_use]
    pub const fn base(&self) -> &Backing<'a, T> {
        &self.base
    }

    pub fn append(&mut self, item: T) {
        self.appended.push((self.edits, item));
        self.edits += 1;
    }

    /// Hides the first element `comparer` finds equal to `item`, if any
    pub fn skip_one<C>(&mut self, item: T, comparer: C)
    where
        C: Comparer<T> + 'a,
    {
        self.skipped.push(Skip {
            at: self.edits,
            item,
            comparer: Box::new(comparer),
        });
        self.edits += 1;
    }
}
impl<'a, T: 'a> Sequence<T> for Edited<'a, T> {
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(EditedIter {
            base: self.base.seq().iter().fuse(),
            appended: self.appended.iter(),
            skipped: &self.skipped,
            fired: vec![false; self.skipped.len()],
        })
    }
}
impl<T> fmt::Debug for Edited<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Edited")
            .field("base", &self.base)
            .field("appended", &self.appended.len())
            .field("skipped", &self.skipped.len())
            .finish()
    }
}

struct EditedIter<'s, 'a, T> {
    base: core::iter::Fuse<Box<dyn Iterator<Item = &'s T> + 's>>,
    appended: core::slice::Iter<'s, (usize, T)>,
    skipped: &'s [Skip<'a, T>],
    fired: Vec<bool>,
}
impl<'s, T> EditedIter<'s, '_, T> {
    /// Consumes the first pending removal made at or after edit `from` that
    /// matches `item`
    fn take_skip(&mut self, from: usize, item: &T) -> bool {
        let skipped = self.skipped;
        let start = skipped.partition_point(|skip| skip.at < from);
        for (i, skip) in skipped.iter().enumerate().skip(start) {
            if !self.fired[i] && skip.comparer.equals(item, &skip.item) {
                self.fired[i] = true;
                return true;
            }
        }
        false
    }
}
impl<'s, T> Iterator for EditedIter<'s, '_, T> {
    type Item = &'s T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (from, item) = match self.base.next() {
                Some(item) => (0, item),
                None => {
                    let (at, item) = self.appended.next()?;
                    (at + 1, item)
                }
            };
            if !self.take_skip(from, item) {
                return Some(item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cap::IterOnly, cmp::DefaultComparer};

    fn collect(seq: &Edited<'_, i32>) -> Vec<i32> {
        seq.iter().copied().collect()
    }

    #[test]
    fn test_append() {
        let mut seq = Edited::new(Backing::owned(IterOnly::new(vec![1, 2])));
        seq.append(3);
        seq.append(4);
        assert_eq!(collect(&seq), [1, 2, 3, 4]);
        assert_eq!(seq.iter().count(), 4);
        assert!(seq.as_list().is_none());
    }

    #[test]
    fn test_skip_one() {
        let mut seq = Edited::new(Backing::owned(vec![1, 2, 1, 3]));
        seq.skip_one(1, DefaultComparer);
        assert_eq!(collect(&seq), [2, 1, 3]);
        // restartable
        assert_eq!(collect(&seq), [2, 1, 3]);

        seq.skip_one(5, DefaultComparer);
        assert_eq!(collect(&seq), [2, 1, 3]);
    }

    #[test]
    fn test_edit_order() {
        // a removal made before an append never hides it
        let mut seq = Edited::new(Backing::owned(vec![5]));
        seq.skip_one(7, DefaultComparer);
        seq.append(7);
        assert_eq!(collect(&seq), [5, 7]);

        // a removal after an append sees the base first
        let mut seq = Edited::new(Backing::owned(vec![7, 5]));
        seq.append(7);
        seq.skip_one(7, DefaultComparer);
        assert_eq!(collect(&seq), [5, 7]);

        // and the append once the base has no match
        let mut seq = Edited::new(Backing::owned(vec![5]));
        seq.append(7);
        seq.append(8);
        seq.skip_one(7, DefaultComparer);
        seq.skip_one(7, DefaultComparer);
        assert_eq!(collect(&seq), [5, 8]);
    }

    #[test]
    fn test_skip_uses_its_own_comparer() {
        let mut seq = Edited::new(Backing::owned(vec![1, 12, 3]));
        seq.skip_one(2, |a: &i32, b: &i32| a % 10 == b % 10);
        seq.skip_one(3, DefaultComparer);
        assert_eq!(collect(&seq), [1]);
    }
}
