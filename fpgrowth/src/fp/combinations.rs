/// Calls `callback` with every `k`-combination of the indices `0..n`, in
/// lexicographic order.
pub fn for_each_combination<F>(n: usize, k: usize, callback: &mut F)
where
    F: FnMut(&[usize]),
{
    if k == 0 || k > n {
        return;
    }

    let mut current = Vec::with_capacity(k);
    combinations_recursive(n, k, 0, &mut current, callback);
}

fn combinations_recursive<F>(
    n: usize,
    k: usize,
    start: usize,
    current: &mut Vec<usize>,
    callback: &mut F,
) where
    F: FnMut(&[usize]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    // Leave room for the elements still to be picked.
    for i in start..=n - (k - current.len()) {
        current.push(i);
        combinations_recursive(n, k, i + 1, current, callback);
        current.pop();
    }
}
