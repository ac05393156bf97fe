//! Stable reordering of admin-authored configuration lists.
//!
//! Custom fields, fee types and hotel options are all "ordered
//! collections of configuration items": the admin UI reorders them by
//! drag-and-drop and persists the whole renumbered list. The moves here
//! are pure; the input list is never mutated.

use crate::error::DomainError;

/// Implemented by list items that carry an explicit `order` attribute.
pub trait HasOrder {
    fn order(&self) -> i32;
    fn set_order(&mut self, order: i32);
}

fn check_bounds(index: usize, len: usize) -> Result<(), DomainError> {
    if index < len {
        Ok(())
    } else {
        Err(DomainError::IndexOutOfRange { index, len })
    }
}

/// Moves the element at `from` to position `to`, classic
/// remove-then-insert. All untouched elements keep their relative
/// order. Out-of-range indices are an error, never clamped.
///
/// `from == to` returns a value-equal copy of the list.
pub fn move_item<T: Clone>(list: &[T], from: usize, to: usize) -> Result<Vec<T>, DomainError> {
    check_bounds(from, list.len())?;
    check_bounds(to, list.len())?;

    let mut result = list.to_vec();
    if from != to {
        let item = result.remove(from);
        result.insert(to, item);
    }
    Ok(result)
}

/// Like [`move_item`], but also renumbers every element's `order`
/// attribute to its new 0-based position, leaving no gaps and no
/// duplicates. The admin UI persists exactly this renumbered list.
pub fn move_ordered<T: HasOrder + Clone>(
    list: &[T],
    from: usize,
    to: usize,
) -> Result<Vec<T>, DomainError> {
    let mut result = move_item(list, from, to)?;
    renumber(&mut result);
    Ok(result)
}

/// Rewrites every element's `order` to its 0-based list position.
///
/// Used after deletions to close gaps before persisting.
pub fn renumber<T: HasOrder>(list: &mut [T]) {
    for (position, item) in list.iter_mut().enumerate() {
        item.set_order(position as i32);
    }
}
