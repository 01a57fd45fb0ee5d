//! Counting and enumeration primitives
//!
//! Sequence counts for accounting, and the order-sensitive "choose then arrange"
//! enumerator candidate generation is built on.

use itertools::Itertools;

/// Number of ordered, distinct-symbol sequences of `sequence_length` symbols drawn
/// from `alphabet_size` symbols
///
/// This is the falling factorial `n × (n-1) × … × (n-k+1)`. It saturates at
/// `u128::MAX` (36 symbols of 36 overflows), and is zero when the sequence is
/// longer than the alphabet.
///
/// # Examples
/// ```
/// use bulls_cows::core::combinatorics::count;
///
/// assert_eq!(count(9, 4), 3024);
/// assert_eq!(count(3, 2), 6);
/// assert_eq!(count(3, 4), 0);
/// ```
#[must_use]
pub fn count(alphabet_size: usize, sequence_length: usize) -> u128 {
    if sequence_length > alphabet_size {
        return 0;
    }

    (alphabet_size - sequence_length + 1..=alphabet_size)
        .map(|n| n as u128)
        .fold(1, u128::saturating_mul)
}

/// Every ordered arrangement of every `r`-element subset of `pool`
///
/// Equivalent to enumerating all combinations and, for each, all of its
/// permutations. Lazy: nothing past the consumed prefix is computed.
///
/// `r == 0` yields one empty arrangement; `r` larger than the pool yields none.
///
/// # Examples
/// ```
/// use bulls_cows::core::combinatorics::arrangements;
///
/// let all: Vec<Vec<char>> = arrangements(['a', 'b', 'c'], 2).collect();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[0], vec!['a', 'b']);
/// assert_eq!(all[1], vec!['b', 'a']);
/// ```
pub fn arrangements<I>(pool: I, r: usize) -> impl Iterator<Item = Vec<I::Item>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    pool.into_iter()
        .combinations(r)
        .flat_map(move |chosen| chosen.into_iter().permutations(r))
}
