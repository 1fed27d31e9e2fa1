//! Keyboard navigation chain over flattened rows.

use super::flatten::Row;

/// Chain `rows` into a doubly linked list in display order.
///
/// Existing links are overwritten, so a chain built from an older flatten
/// can never leak through. The first row has no `previous` and the last
/// row has no `next`.
pub fn link(rows: &mut [Row]) {
    let count = rows.len();
    for (i, row) in rows.iter_mut().enumerate() {
        row.previous = i.checked_sub(1);
        row.next = if i + 1 < count { Some(i + 1) } else { None };
    }
    log::trace!("[tree] linked {} rows", count);
}
