use log::{debug, trace};
use std::cmp::Ordering;

use crate::error::{BwtError, Result};

/// Ranges at or below this size are finished with insertion sort.
const INSERTION_CUTOFF: usize = 15;

/// Returned by `char_at` once the depth reaches the text length. Sorts below every byte.
const SENTINEL: i32 = -1;

/// Sorted order of all circular suffixes (rotations) of a text.
#[derive(Debug, Clone)]
pub struct CircularSuffixArray {
    order: Vec<u32>,
}

impl CircularSuffixArray {
    /// Sort the rotations of `text`. The text must not be empty.
    pub fn new(text: &[u8]) -> Result<Self> {
        if text.is_empty() {
            return Err(BwtError::InvalidArgument(
                "cannot sort the suffixes of an empty text".to_string(),
            ));
        }
        if text.len() > u32::MAX as usize {
            return Err(BwtError::InvalidArgument(format!(
                "text of {} bytes is too long to index with u32",
                text.len()
            )));
        }

        let now = std::time::Instant::now();
        let mut order = (0..text.len() as u32).collect::<Vec<u32>>();
        sort_suffixes(text, &mut order);
        debug!("Sorted {} circular suffixes in {:?}", text.len(), now.elapsed());

        Ok(Self { order })
    }

    /// Number of suffixes, equal to the text length.
    pub fn length(&self) -> usize {
        self.order.len()
    }

    /// Start of the suffix ranked `i`.
    pub fn index_of(&self, i: usize) -> Result<usize> {
        self.order
            .get(i)
            .map(|&idx| idx as usize)
            .ok_or_else(|| {
                BwtError::InvalidArgument(format!(
                    "suffix rank {} is outside 0..{}",
                    i,
                    self.order.len()
                ))
            })
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.order
    }
}

/// Character of the rotation starting at `suffix`, `depth` places in. Wraps around the end.
fn char_at(text: &[u8], suffix: u32, depth: usize) -> i32 {
    let end = text.len();
    if depth == end {
        return SENTINEL;
    }
    let pos = suffix as usize + depth;
    if pos >= end {
        text[pos - end] as i32
    } else {
        text[pos] as i32
    }
}

/// Three-way radix quicksort of `order` by the rotations of `text`.
/// Uses a work stack of (lo, hi, depth) ranges instead of recursion. `hi` is exclusive.
fn sort_suffixes(text: &[u8], order: &mut [u32]) {
    let mut stack: Vec<(usize, usize, usize)> = Vec::with_capacity(64);
    stack.push((0, order.len(), 0));

    let mut max_stack = 0;
    while let Some((lo, hi, depth)) = stack.pop() {
        if hi - lo < 2 {
            continue;
        }

        if hi - lo <= INSERTION_CUTOFF {
            insertion_sort(text, &mut order[lo..hi], depth);
            continue;
        }

        let pivot = char_at(text, order[lo], depth);
        let mut lt = lo;
        let mut gt = hi - 1;
        let mut i = lo + 1;
        while i <= gt {
            match char_at(text, order[i], depth).cmp(&pivot) {
                Ordering::Less => {
                    order.swap(lt, i);
                    lt += 1;
                    i += 1;
                }
                Ordering::Greater => {
                    order.swap(i, gt);
                    gt -= 1;
                }
                Ordering::Equal => i += 1,
            }
        }

        // order[lo..lt] < pivot == order[lt..=gt] < order[gt+1..hi]
        stack.push((gt + 1, hi, depth));
        if pivot == SENTINEL {
            // Rotations equal over the whole text. Rank them by starting index.
            order[lt..=gt].sort_unstable();
        } else {
            stack.push((lt, gt + 1, depth + 1));
        }
        stack.push((lo, lt, depth));

        max_stack = max_stack.max(stack.len());
    }
    trace!("Suffix sort work stack peaked at {} ranges", max_stack);
}

/// Insertion sort for small ranges whose rotations already agree on the first `depth` characters.
fn insertion_sort(text: &[u8], slice: &mut [u32], depth: usize) {
    for i in 1..slice.len() {
        let mut j = i;
        while j > 0 && suffix_less(text, slice[j], slice[j - 1], depth) {
            slice.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Full cyclic comparison from `depth` onward. Identical rotations fall back to the start index.
fn suffix_less(text: &[u8], a: u32, b: u32, depth: usize) -> bool {
    for d in depth..text.len() {
        let (ca, cb) = (char_at(text, a, d), char_at(text, b, d));
        if ca != cb {
            return ca < cb;
        }
    }
    a < b
}
