use core::fmt;

use crate::{cap::Sequence, derived::Edited};

/// The adapter's replaceable handle to its backing sequence
///
/// A `Shared` backing never hands out mutable capabilities. `Edited` is what
/// a fallback `add`/`remove` rebinds to; later fallbacks extend it in place.
pub enum Backing<'a, T> {
    Owned(Box<dyn Sequence<T> + 'a>),
    Borrowed(&'a mut (dyn Sequence<T> + 'a)),
    Shared(&'a (dyn Sequence<T> + 'a)),
    Edited(Box<Edited<'a, T>>),
}
impl<'a, T: 'a> Backing<'a, T> {
    #[must_use]
    pub fn owned<S: Sequence<T> + 'a>(seq: S) -> Self {
        Self::Owned(Box::new(seq))
    }
    #[must_use]
    pub fn borrowed<S: Sequence<T> + 'a>(seq: &'a mut S) -> Self {
        Self::Borrowed(seq)
    }
    #[must_use]
    pub fn shared<S: Sequence<T> + 'a>(seq: &'a S) -> Self {
        Self::Shared(seq)
    }

    #[must_use]
    pub fn seq(&self) -> &(dyn Sequence<T> + 'a) {
        match self {
            Self::Owned(seq) => seq.as_ref(),
            Self::Borrowed(seq) => &**seq,
            Self::Shared(seq) => *seq,
            Self::Edited(seq) => seq.as_ref(),
        }
    }
    #[must_use]
    pub fn seq_mut(&mut self) -> Option<&mut (dyn Sequence<T> + 'a)> {
        match self {
            Self::Owned(seq) => Some(seq.as_mut()),
            Self::Borrowed(seq) => Some(&mut **seq),
            Self::Shared(_) => None,
            Self::Edited(seq) => Some(seq.as_mut()),
        }
    }
    #[must_use]
    pub const fn is_shared(&self) -> bool {
        matches!(self, Self::Shared(_))
    }
}
impl<T> fmt::Debug for Backing<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Owned(_) => "Owned",
            Self::Borrowed(_) => "Borrowed",
            Self::Shared(_) => "Shared",
            Self::Edited(_) => "Edited",
        };
        f.debug_tuple(name).finish_non_exhaustive()
    }
}
