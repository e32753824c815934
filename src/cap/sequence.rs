use super::{Collection, ErasedList, List, Synchronized};

/// A restartable forward sequence of `T`
pub trait Sequence<T> {
    /// Every call starts a fresh traversal from the first element
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_>;

    fn as_collection(&self) -> Option<&dyn Collection<T>> {
        None
    }
    fn as_collection_mut(&mut self) -> Option<&mut dyn Collection<T>> {
        None
    }
    fn as_list(&self) -> Option<&dyn List<T>> {
        None
    }
    fn as_list_mut(&mut self) -> Option<&mut dyn List<T>> {
        None
    }
    fn as_erased_list(&self) -> Option<&dyn ErasedList> {
        None
    }
    fn as_erased_list_mut(&mut self) -> Option<&mut dyn ErasedList> {
        None
    }
    fn as_synchronized(&self) -> Option<&dyn Synchronized> {
        None
    }
    /// Contiguous storage usable for bulk copies
    fn as_slice(&self) -> Option<&[T]> {
        None
    }
}

/// Exposes nothing of `S` but iteration
#[derive(Debug, Clone)]
pub struct IterOnly<S> {
    inner: S,
}
impl<S> IterOnly<S> {
    #[must_use]
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }
    #[must_use]
    pub fn into_inner(self) -> S {
        self.inner
    }
}
impl<T, S> Sequence<T> for IterOnly<S>
where
    S: Sequence<T>,
{
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        self.inner.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_only() {
        let seq = IterOnly::new(vec![1, 2, 3]);
        assert!(seq.as_collection().is_none());
        assert!(seq.as_list().is_none());
        assert!(seq.as_slice().is_none());
        assert_eq!(seq.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(seq.iter().count(), 3);
        assert_eq!(seq.into_inner(), [1, 2, 3]);
    }
}
