//! Paint order among sibling layers.
//! Spec: <https://www.w3.org/TR/CSS2/zindex.html>

/// Return keys in paint order: ascending z-index, ties kept in insertion order.
///
/// `entries` must be given in insertion (document) order. Later entries paint on top.
pub fn paint_order<K, I>(entries: I) -> Vec<K>
where
    I: IntoIterator<Item = (K, i32)>,
{
    let mut ordered: Vec<(K, i32)> = entries.into_iter().collect();
    // `sort_by_key` is stable, which is what keeps equal z-index in document order.
    ordered.sort_by_key(|&(_, z_index)| z_index);
    ordered.into_iter().map(|(key, _)| key).collect()
}
