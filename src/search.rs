use crate::{
    cap::Sequence,
    cmp::{Comparer, DefaultComparer},
};

/// Position of the first element equal to `value`, preferring the
/// backing's own lookup over a linear scan
#[must_use]
pub fn index_of<T, S>(seq: &S, value: &T) -> Option<usize>
where
    T: PartialEq + 'static,
    S: Sequence<T> + ?Sized,
{
    index_of_with(seq, value, &DefaultComparer)
}

/// [`index_of`] with `comparer` used for the linear scan
#[must_use]
pub fn index_of_with<T, S, C>(seq: &S, value: &T, comparer: &C) -> Option<usize>
where
    T: 'static,
    S: Sequence<T> + ?Sized,
    C: Comparer<T> + ?Sized,
{
    if let Some(list) = seq.as_list() {
        return list.index_of(value);
    }
    if let Some(list) = seq.as_erased_list() {
        return list.index_of_any(value).ok().flatten();
    }
    index_of_by(seq.iter(), value, comparer)
}

/// Linear scan
#[must_use]
pub fn index_of_by<'s, T, C>(
    iter: impl IntoIterator<Item = &'s T>,
    value: &T,
    comparer: &C,
) -> Option<usize>
where
    T: ?Sized + 's,
    C: Comparer<T> + ?Sized,
{
    iter.into_iter().position(|x| comparer.equals(x, value))
}
