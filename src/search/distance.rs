//! Levenshtein distance over chars.

/// Minimum number of single-char insertions, deletions or substitutions
/// turning `a` into `b`.
///
/// Two rolling rows sized by the shorter string, so memory stays
/// `O(min(len(a), len(b)))`.
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Columns follow the shorter string; the metric is symmetric.
    let (long, short) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };

    if short.is_empty() {
        return long.len();
    }

    let mut previous: Vec<usize> = (0..=short.len()).collect();
    let mut current: Vec<usize> = vec![0; short.len() + 1];

    for (i, lc) in long.iter().enumerate() {
        current[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let cost = usize::from(lc != sc);
            let deletion = previous[j + 1] + 1;
            let insertion = current[j] + 1;
            let substitution = previous[j] + cost;
            current[j + 1] = deletion.min(insertion).min(substitution);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[short.len()]
}
