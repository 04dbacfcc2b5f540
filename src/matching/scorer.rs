/// Gestalt (Ratcliff/Obershelp) similarity between two strings.
///
/// Returns `2 * M / T` where `M` is the number of characters covered by the
/// recursively found longest common runs and `T` is the combined length of
/// both inputs, counted in `char`s. Two empty strings score `0.0`.
///
/// Like `difflib.SequenceMatcher`, the result can depend on argument order
/// when several longest runs compete, so callers pass the corpus key first.
pub fn score(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }

    let matched: usize = matching_blocks(&a, &b).iter().map(|block| block.len).sum();
    (2 * matched) as f64 / total as f64
}

/// A common run: `a[a_start..a_start + len] == b[b_start..b_start + len]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub a_start: usize,
    pub b_start: usize,
    pub len: usize,
}

/// Half-open fragment bounds in both sequences.
#[derive(Debug, Clone, Copy)]
struct Fragment {
    a_lo: usize,
    a_hi: usize,
    b_lo: usize,
    b_hi: usize,
}

/// Every common run found by the divide-and-conquer walk, in discovery order.
///
/// The walk keeps its own work list so deep splits never grow the call stack.
pub fn matching_blocks<T: PartialEq>(a: &[T], b: &[T]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut pending = vec![Fragment { a_lo: 0, a_hi: a.len(), b_lo: 0, b_hi: b.len() }];

    while let Some(frag) = pending.pop() {
        let block = longest_common_run(a, b, frag);
        if block.len == 0 {
            continue;
        }
        blocks.push(block);

        // Left remainder only when the run is inset in both fragments.
        if block.a_start > frag.a_lo && block.b_start > frag.b_lo {
            pending.push(Fragment {
                a_lo: frag.a_lo,
                a_hi: block.a_start,
                b_lo: frag.b_lo,
                b_hi: block.b_start,
            });
        }

        let a_end = block.a_start + block.len;
        let b_end = block.b_start + block.len;
        if a_end < frag.a_hi && b_end < frag.b_hi {
            pending.push(Fragment {
                a_lo: a_end,
                a_hi: frag.a_hi,
                b_lo: b_end,
                b_hi: frag.b_hi,
            });
        }
    }

    blocks
}

/// Brute-force longest common contiguous run inside `frag`.
///
/// Scans `a` starts in the outer loop and `b` starts in the inner loop; the
/// first run of maximal length wins.
fn longest_common_run<T: PartialEq>(a: &[T], b: &[T], frag: Fragment) -> Block {
    let mut best = Block { a_start: frag.a_lo, b_start: frag.b_lo, len: 0 };

    for i in frag.a_lo..frag.a_hi {
        // No run starting here can beat the current best.
        if frag.a_hi - i <= best.len {
            break;
        }
        for j in frag.b_lo..frag.b_hi {
            let mut k = 0;
            while i + k < frag.a_hi && j + k < frag.b_hi && a[i + k] == b[j + k] {
                k += 1;
            }
            if k > best.len {
                best = Block { a_start: i, b_start: j, len: k };
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_identical_strings_score_one() {
        assert_eq!(score("La Tierra es redonda", "La Tierra es redonda"), 1.0);
        assert_eq!(score("x", "x"), 1.0);
    }

    #[test]
    fn test_both_empty_is_zero_not_nan() {
        let r = score("", "");
        assert!(!r.is_nan());
        assert_eq!(r, 0.0);
    }

    #[test]
    fn test_one_side_empty_is_zero() {
        assert_eq!(score("abc", ""), 0.0);
        assert_eq!(score("", "abc"), 0.0);
    }

    #[test]
    fn test_disjoint_strings_score_zero() {
        assert_eq!(score("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_prefix_match() {
        // "ab" shared: 2 * 2 / (3 + 2)
        assert!((score("abc", "ab") - 0.8).abs() < 1e-12);
        assert!((score("abd", "ab") - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_classic_gestalt_example() {
        // WIKIMEDIA vs WIKIMANIA: "WIKIM" + "IA" -> 2 * 7 / 18
        let r = score("WIKIMEDIA", "WIKIMANIA");
        assert!((r - 14.0 / 18.0).abs() < 1e-12);
    }

    #[test]
    fn test_recursion_collects_both_sides() {
        // "abXcd" vs "abYcd": "ab" then right fragment "Xcd"/"Ycd" yields "cd"
        let r = score("abXcd", "abYcd");
        assert!((r - 8.0 / 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_swapped_arguments_agree_on_sample_pairs() {
        let pairs = [
            ("abc", "ab"),
            ("WIKIMEDIA", "WIKIMANIA"),
            ("La Tierra es redonda", "Planeta Tierra"),
            ("kitten", "sitting"),
            ("", "abc"),
        ];
        for (a, b) in pairs {
            assert_eq!(score(a, b), score(b, a), "asymmetric for {:?} / {:?}", a, b);
        }
    }

    #[test]
    fn test_argument_order_can_change_score() {
        // "baba" / "abbba": first longest run "ba" reaches the end of b, no remainders.
        assert!((score("baba", "abbba") - 4.0 / 9.0).abs() < 1e-12);
        // "abbba" / "baba": run "ab" leaves "bba" / "a", which adds "a".
        assert!((score("abbba", "baba") - 6.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_planeta_tierra_is_far_below_ninety() {
        // " Tierra" (7) and "a" (1): 2 * 8 / 34
        let r = score("La Tierra es redonda", "Planeta Tierra");
        assert!((r - 16.0 / 34.0).abs() < 1e-12);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(score("ñandú", "ñandú"), 1.0);
        // "ñ" is two bytes but one char: 2 * 1 / 2
        assert_eq!(score("ñ", "ñ"), 1.0);
        assert!((score("ñu", "ña") - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_score_bounds() {
        let samples = ["", "a", "abc", "¿Es verdad?", "The quick brown fox", "xyz xyz"];
        for a in samples {
            for b in samples {
                let r = score(a, b);
                assert!((0.0..=1.0).contains(&r), "{} out of bounds for {:?}/{:?}", r, a, b);
            }
        }
    }

    #[test]
    fn test_first_found_run_wins_ties() {
        // "ab" and "cd" are both length 2; the scan starts in `a` order.
        let blocks = matching_blocks(&chars("abcd"), &chars("cdab"));
        assert_eq!(blocks[0], Block { a_start: 0, b_start: 2, len: 2 });
    }

    #[test]
    fn test_left_remainder_skipped_when_run_starts_one_fragment() {
        // Run "bc" starts at a[0]; the b-side prefix "x" has no partner, so
        // only the right remainder ("d" / "y") is explored, which is disjoint.
        let blocks = matching_blocks(&chars("bcd"), &chars("xbcy"));
        assert_eq!(blocks, vec![Block { a_start: 0, b_start: 1, len: 2 }]);
    }

    #[test]
    fn test_right_remainder_skipped_when_run_reaches_one_end() {
        let blocks = matching_blocks(&chars("abc"), &chars("zab"));
        assert_eq!(blocks, vec![Block { a_start: 0, b_start: 1, len: 2 }]);
    }

    #[test]
    fn test_blocks_in_discovery_order() {
        // Left pushed before right, so the right fragment is popped first.
        let blocks = matching_blocks(&chars("aXbcdYe"), &chars("aZbcdWe"));
        assert_eq!(
            blocks,
            vec![
                Block { a_start: 2, b_start: 2, len: 3 },
                Block { a_start: 6, b_start: 6, len: 1 },
                Block { a_start: 0, b_start: 0, len: 1 },
            ]
        );
    }

    #[test]
    fn test_long_shifted_inputs() {
        let a: String = "ab".repeat(2_000);
        let b: String = "ba".repeat(2_000);
        let r = score(&a, &b);
        assert!(r > 0.99 && r < 1.0);
    }
}
