//! Ratcliff/Obershelp "gestalt pattern matching" similarity.
//!
//! The ratio is `2 * M / T`, where `T` is the total number of characters in both
//! strings and `M` the number of characters in matching blocks. Blocks are found
//! by taking the longest common substring, then recursing into the unmatched text
//! on its left and on its right.

/// Similarity of `a` and `b` in `[0.0, 1.0]`, compared character by character.
/// Two empty strings are identical (1.0).
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched = matching_characters(&a, &b);
    2.0 * matched as f64 / total as f64
}

/// Total length of all matching blocks between `a` and `b`.
fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }
    matched
}

/// Longest common run of `a[alo..ahi]` and `b[blo..bhi]` as `(i, j, size)`.
///
/// Ties go to the run starting earliest in `a`, then earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
    // run_len[j - blo] = length of the run ending at a[i - 1], b[j]
    let mut prev = vec![0usize; bhi - blo];
    let mut cur = vec![0usize; bhi - blo];

    for i in alo..ahi {
        for j in blo..bhi {
            let k = j - blo;
            cur[k] = if a[i] == b[j] {
                let run = if k > 0 { prev[k - 1] + 1 } else { 1 };
                if run > best_size {
                    best_i = i + 1 - run;
                    best_j = j + 1 - run;
                    best_size = run;
                }
                run
            } else {
                0
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    (best_i, best_j, best_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_identical_strings() {
        assert!(approx(similarity_ratio("jane doe", "jane doe"), 1.0));
        assert!(approx(similarity_ratio("", ""), 1.0));
    }

    #[test]
    fn test_disjoint_strings() {
        assert!(approx(similarity_ratio("abc", "xyz"), 0.0));
        assert!(approx(similarity_ratio("abc", ""), 0.0));
    }

    #[test]
    fn test_name_against_file_name() {
        // "jane" + "doe" match: 2 * 7 / (8 + 11)
        let ratio = similarity_ratio("jane doe", "jane_doe_cv");
        assert!(approx(ratio, 14.0 / 19.0));
        assert!(ratio > 0.5);
    }

    #[test]
    fn test_recurses_on_both_sides() {
        // blocks "ab" and "d": 2 * 3 / 8
        assert!(approx(similarity_ratio("abcd", "abxd"), 0.75));
        // "bcd" then nothing left on the right of b, "a" unmatched on the left
        assert!(approx(similarity_ratio("abcd", "bcda"), 0.75));
    }

    #[test]
    fn test_is_symmetric_for_simple_inputs() {
        let forward = similarity_ratio("john smith", "smith john");
        let backward = similarity_ratio("smith john", "john smith");
        assert!(approx(forward, backward));
    }

    #[test]
    fn test_unicode_counts_characters() {
        assert!(approx(similarity_ratio("josé", "jose"), 0.75));
    }
}
