use std::sync::Mutex;

use super::{Collection, ErasedList, List, Sequence};

/// Synchronization metadata of a backing collection
pub trait Synchronized {
    /// Whether access to the collection is already serialized
    #[must_use]
    fn is_synchronized(&self) -> bool {
        false
    }
    /// The lock callers hold while sharing the collection across threads
    #[must_use]
    fn sync_root(&self) -> &Mutex<()>;
}

/// Attaches a synchronization root to `S` and forwards every other capability
#[derive(Debug, Default)]
pub struct SyncRooted<S> {
    inner: S,
    root: Mutex<()>,
}
impl<S> SyncRooted<S> {
    #[must_use]
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            root: Mutex::new(()),
        }
    }
    #[must_use]
    pub fn get(&self) -> &S {
        &self.inner
    }
    #[must_use]
    pub fn into_inner(self) -> S {
        self.inner
    }
}
impl<S> Synchronized for SyncRooted<S> {
    fn sync_root(&self) -> &Mutex<()> {
        &self.root
    }
}
impl<T, S> Sequence<T> for SyncRooted<S>
where
    S: Sequence<T>,
{
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        self.inner.iter()
    }
    fn as_collection(&self) -> Option<&dyn Collection<T>> {
        self.inner.as_collection()
    }
    fn as_collection_mut(&mut self) -> Option<&mut dyn Collection<T>> {
        self.inner.as_collection_mut()
    }
    fn as_list(&self) -> Option<&dyn List<T>> {
        self.inner.as_list()
    }
    fn as_list_mut(&mut self) -> Option<&mut dyn List<T>> {
        self.inner.as_list_mut()
    }
    fn as_erased_list(&self) -> Option<&dyn ErasedList> {
        self.inner.as_erased_list()
    }
    fn as_erased_list_mut(&mut self) -> Option<&mut dyn ErasedList> {
        self.inner.as_erased_list_mut()
    }
    fn as_synchronized(&self) -> Option<&dyn Synchronized> {
        Some(self)
    }
    fn as_slice(&self) -> Option<&[T]> {
        self.inner.as_slice()
    }
}
