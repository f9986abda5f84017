//! Bounded listings with a truncation marker.
//!
//! Caps bound output size only: callers build the full ordered list first,
//! then cap it here.

/// Keep the first `cap` items. When more were supplied, append one marker
/// built from the number of dropped items.
pub fn cap_with_overflow<T>(mut items: Vec<T>, cap: usize, marker: impl FnOnce(usize) -> T) -> Vec<T> {
    if items.len() <= cap {
        return items;
    }
    let dropped = items.len() - cap;
    items.truncate(cap);
    items.push(marker(dropped));
    items
}
