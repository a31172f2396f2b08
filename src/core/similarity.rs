/// Levenshtein edit distance between two character sequences
///
/// Insertion, deletion and substitution each cost 1. Uses two rolling rows
/// instead of the full table.
pub fn edit_distance(a: &[char], b: &[char]) -> usize {
    let mut previous: Vec<usize> = (0..=a.len()).collect();
    let mut current = vec![0; a.len() + 1];

    for (j, cb) in b.iter().enumerate() {
        current[0] = j + 1;
        for (i, ca) in a.iter().enumerate() {
            let substitution_cost = usize::from(ca != cb);
            current[i + 1] = (current[i] + 1)
                .min(previous[i + 1] + 1)
                .min(previous[i] + substitution_cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[a.len()]
}

/// Similarity of two strings from normalized edit distance
///
/// Returns `(max_len - distance) / max_len`: 1.0 for identical strings,
/// 0.0 for strings with nothing in common. Lengths are counted in chars.
///
/// When either string is empty the result is the raw length of the other
/// string, not a value in [0, 1]. See [`empty_input_similarity`].
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() || b.is_empty() {
        return empty_input_similarity(a.len(), b.len());
    }

    let max_len = a.len().max(b.len());
    let distance = edit_distance(&a, &b);

    (max_len - distance) as f64 / max_len as f64
}

/// Degenerate similarity when at least one side is empty
///
/// Yields the length of the non-empty side (0 when both are empty). The
/// matcher never reaches this: terms and words are longer than two chars.
#[inline]
pub fn empty_input_similarity(len_a: usize, len_b: usize) -> f64 {
    if len_a == 0 {
        len_b as f64
    } else {
        len_a as f64
    }
}
