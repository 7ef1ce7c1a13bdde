/// Calculate the Levenshtein distance between two strings.
///
/// Unit cost for insertion, deletion, and substitution; no transposition.
/// Comparison is byte-exact, so callers lowercase both sides first. Uses
/// the two-row form of the classic DP table; results are identical to the
/// full `(|b|+1) x (|a|+1)` matrix.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a = a.as_bytes();
    let b = b.as_bytes();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=a.len()).collect();
    let mut curr = vec![0usize; a.len() + 1];

    for (i, &b_byte) in b.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &a_byte) in a.iter().enumerate() {
            let cost = if a_byte == b_byte { 0 } else { 1 };

            curr[j + 1] = std::cmp::min(
                std::cmp::min(
                    prev[j + 1] + 1, // deletion
                    curr[j] + 1,     // insertion
                ),
                prev[j] + cost, // substitution
            );
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[a.len()]
}
