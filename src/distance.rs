//! Levenshtein edit distance.

/// Classic edit distance between two strings, counted over Unicode scalar
/// values: the minimum number of single-character insertions, deletions, and
/// substitutions turning one into the other.
///
/// Rolling two-row formulation of the textbook recurrence; O(|a|·|b|) time,
/// O(min(|a|,|b|)) memory. Symmetric in its arguments and never panics.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Keep the row buffers on the shorter string.
    let (outer, inner) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };

    let mut prev: Vec<usize> = (0..=inner.len()).collect();
    let mut curr = vec![0usize; inner.len() + 1];

    for (i, &outer_ch) in outer.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &inner_ch) in inner.iter().enumerate() {
            let substitution = prev[j] + usize::from(outer_ch != inner_ch);
            let insertion = curr[j] + 1;
            let deletion = prev[j + 1] + 1;
            curr[j + 1] = substitution.min(insertion).min(deletion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[inner.len()]
}
