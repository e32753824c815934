use core::any::Any;

use crate::{
    cap::Sequence,
    error::{ListError, OutOfRange},
    ops::len::Len,
};

/// O(n) unless `seq` knows its length
fn len_of<T, S: Sequence<T> + ?Sized>(seq: &S) -> usize {
    if let Some(src) = seq.as_slice() {
        return src.len();
    }
    if let Some(collection) = seq.as_collection() {
        return collection.len();
    }
    if let Some(list) = seq.as_erased_list() {
        return list.len();
    }
    seq.iter().count()
}

/// Checks that `dest_len - offset` can hold `needed` elements
pub fn check_room(needed: usize, dest_len: usize, offset: usize) -> Result<(), ListError> {
    let Some(remaining) = dest_len.checked_sub(offset) else {
        return Err(OutOfRange::Index {
            index: offset,
            len: dest_len,
        }
        .into());
    };
    if remaining < needed {
        return Err(OutOfRange::Capacity { needed, remaining }.into());
    }
    Ok(())
}

/// Clones every element of `seq` into `dest[offset..]`
///
/// Nothing is written unless all of them fit. Contiguous backings are copied
/// in bulk; anything else is walked once more after being counted.
pub fn copy_to_slice<T, S>(seq: &S, dest: &mut [T], offset: usize) -> Result<(), ListError>
where
    T: Clone,
    S: Sequence<T> + ?Sized,
{
    if let Some(src) = seq.as_slice() {
        check_room(src.len(), dest.len(), offset)?;
        dest[offset..offset + src.len()].clone_from_slice(src);
        return Ok(());
    }
    let needed = len_of(seq);
    check_room(needed, dest.len(), offset)?;
    for (slot, item) in dest[offset..offset + needed].iter_mut().zip(seq.iter()) {
        slot.clone_from(item);
    }
    Ok(())
}

/// Same as [`copy_to_slice`] for a destination only known as `dyn Any`
pub fn copy_to_any<T, S>(seq: &S, dest: &mut dyn Any, offset: usize) -> Result<(), ListError>
where
    T: Clone + 'static,
    S: Sequence<T> + ?Sized,
{
    if let Some(dest) = dest.downcast_mut::<Vec<T>>() {
        return copy_to_slice(seq, dest.as_mut_slice(), offset);
    }
    if let Some(dest) = dest.downcast_mut::<Box<[T]>>() {
        return copy_to_slice(seq, &mut dest[..], offset);
    }
    if let Some(dest) = dest.downcast_mut::<Vec<Box<dyn Any>>>() {
        let needed = len_of(seq);
        check_room(needed, dest.len(), offset)?;
        for (slot, item) in dest[offset..offset + needed].iter_mut().zip(seq.iter()) {
            *slot = Box::new(item.clone());
        }
        return Ok(());
    }
    Err(ListError::InvalidArgument("dest"))
}
