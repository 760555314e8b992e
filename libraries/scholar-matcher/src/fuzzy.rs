//! Partial-ratio similarity scoring

use scholar_core::SimilarityScorer;
use std::collections::HashMap;

/// Texts at least this long drop their most frequent characters from the
/// block index
const POPULAR_CHAR_MIN_LEN: usize = 200;

/// Window scores above this count as a perfect match
const PERFECT_RATIO: f64 = 0.995;

/// Partial-ratio scorer
///
/// Finds the blocks the shorter string shares with the longer one, anchors a
/// window of the shorter string's length at each block and keeps the best
/// indel ratio (`2·M / T`) among those windows. A strong match anywhere inside
/// the longer text scores high even when the rest of it is unrelated, and a
/// phrase whose parts appear in a different order still lines up.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialRatio;

impl PartialRatio {
    pub fn new() -> Self {
        Self
    }
}

impl SimilarityScorer for PartialRatio {
    fn score(&self, a: &str, b: &str) -> u8 {
        partial_ratio(a, b)
    }
}

/// Partial-ratio similarity of `a` and `b` in `0..=100`
///
/// Empty input on either side scores 0 and containment scores 100.
/// Comparison is case-sensitive; callers normalize first. When both inputs
/// have the same length the result may depend on argument order.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a.len() <= b.len() {
        (a.as_slice(), b.as_slice())
    } else {
        (b.as_slice(), a.as_slice())
    };

    if longer.windows(shorter.len()).any(|window| window == shorter) {
        return 100;
    }

    let mut best = 0.0_f64;
    for block in BlockMatcher::new(shorter, longer).matching_blocks() {
        let start = block.b.saturating_sub(block.a);
        let end = (start + shorter.len()).min(longer.len());

        let ratio = indel_ratio(shorter, &longer[start..end]);
        if ratio > PERFECT_RATIO {
            return 100;
        }
        best = best.max(ratio);
    }

    round_half_even(100.0 * best)
}

/// `2·M / T` where `M` is the total length of the matching blocks
fn indel_ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let matched: usize = BlockMatcher::new(a, b)
        .matching_blocks()
        .iter()
        .map(|block| block.len)
        .sum();

    2.0 * matched as f64 / total as f64
}

// Ties round to even
fn round_half_even(x: f64) -> u8 {
    let floor = x.floor();
    let rounded = match (x - floor).partial_cmp(&0.5) {
        Some(std::cmp::Ordering::Greater) => floor + 1.0,
        Some(std::cmp::Ordering::Less) | None => floor,
        Some(std::cmp::Ordering::Equal) if floor % 2.0 == 0.0 => floor,
        Some(std::cmp::Ordering::Equal) => floor + 1.0,
    };
    rounded.clamp(0.0, 100.0) as u8
}

/// `a[a..a + len] == b[b..b + len]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    a: usize,
    b: usize,
    len: usize,
}

/// Recursive longest-common-block search over two char slices
struct BlockMatcher<'s> {
    a: &'s [char],
    b: &'s [char],
    /// Positions of each character in `b`, ascending
    b_index: HashMap<char, Vec<usize>>,
}

impl<'s> BlockMatcher<'s> {
    fn new(a: &'s [char], b: &'s [char]) -> Self {
        let mut b_index: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, c) in b.iter().enumerate() {
            b_index.entry(*c).or_default().push(j);
        }

        if b.len() >= POPULAR_CHAR_MIN_LEN {
            let limit = b.len() / 100 + 1;
            b_index.retain(|_, positions| positions.len() <= limit);
        }

        Self { a, b, b_index }
    }

    /// Longest block inside `a[alo..ahi]` × `b[blo..bhi]`, earliest on ties
    fn longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Block {
        let (mut best_a, mut best_b, mut best_len) = (alo, blo, 0);

        // run length of the match ending at each b position, for the previous a
        let mut runs: HashMap<usize, usize> = HashMap::new();
        let mut next_runs: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            next_runs.clear();

            if let Some(positions) = self.b_index.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }

                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| runs.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_runs.insert(j, k);

                    if k > best_len {
                        best_a = i + 1 - k;
                        best_b = j + 1 - k;
                        best_len = k;
                    }
                }
            }

            std::mem::swap(&mut runs, &mut next_runs);
        }

        // Popular characters are not indexed; grow across them
        while best_a > alo && best_b > blo && self.a[best_a - 1] == self.b[best_b - 1] {
            best_a -= 1;
            best_b -= 1;
            best_len += 1;
        }
        while best_a + best_len < ahi
            && best_b + best_len < bhi
            && self.a[best_a + best_len] == self.b[best_b + best_len]
        {
            best_len += 1;
        }

        Block {
            a: best_a,
            b: best_b,
            len: best_len,
        }
    }

    /// Non-overlapping matching blocks in order, adjacent blocks merged,
    /// ending with the zero-length block `(a.len(), b.len(), 0)`
    fn matching_blocks(&self) -> Vec<Block> {
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];
        let mut found = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let block = self.longest_match(alo, ahi, blo, bhi);
            if block.len == 0 {
                continue;
            }

            found.push(block);
            if alo < block.a && blo < block.b {
                pending.push((alo, block.a, blo, block.b));
            }
            if block.a + block.len < ahi && block.b + block.len < bhi {
                pending.push((block.a + block.len, ahi, block.b + block.len, bhi));
            }
        }

        found.sort_unstable_by_key(|block| (block.a, block.b, block.len));

        let mut merged: Vec<Block> = Vec::with_capacity(found.len() + 1);
        for block in found {
            if let Some(last) = merged.last_mut() {
                if last.a + last.len == block.a && last.b + last.len == block.b {
                    last.len += block.len;
                    continue;
                }
            }
            merged.push(block);
        }

        merged.push(Block {
            a: self.a.len(),
            b: self.b.len(),
            len: 0,
        });
        merged
    }
}
