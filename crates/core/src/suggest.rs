//! Near-match suggestion for failed searches.
//!
//! The ratio is the classic sequence-matcher measure: twice the length of
//! the longest common subsequence over the combined length. Symmetric,
//! 1.0 for identical strings, 0.0 for disjoint ones.

/// Similarity ratio between two strings, in `[0.0, 1.0]`.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let matched = lcs_len(&a, &b);
    2.0 * matched as f64 / (a.len() + b.len()) as f64
}

/// Candidates whose similarity to `target` is at or above `threshold`,
/// in input order.
pub fn similar_strings<'a>(
    target: &str,
    candidates: impl IntoIterator<Item = &'a str>,
    threshold: f64,
) -> Vec<&'a str> {
    candidates
        .into_iter()
        .filter(|candidate| similarity(target, candidate) >= threshold)
        .collect()
}

/// Longest common subsequence length, single rolling row.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        let mut prev_diag = 0;
        for (j, &cb) in b.iter().enumerate() {
            let tmp = row[j + 1];
            row[j + 1] = if ca == cb {
                prev_diag + 1
            } else {
                row[j + 1].max(row[j])
            };
            prev_diag = tmp;
        }
    }
    row[b.len()]
}
