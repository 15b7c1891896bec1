/// Turns one weighted path back into plain transactions.
///
/// Every pair of `path` carries the same weight `w`; the result holds `w`
/// copies of the path's items in their original order.
pub fn expand_pattern<T: Clone>(path: &[(T, usize)]) -> Vec<Vec<T>> {
    let Some((_, weight)) = path.first() else {
        return Vec::new();
    };
    debug_assert!(
        path.iter().all(|(_, w)| w == weight),
        "weighted path must carry a single shared weight"
    );

    let items: Vec<T> = path.iter().map(|(item, _)| item.clone()).collect();
    vec![items; *weight]
}
