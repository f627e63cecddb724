use std::{
    fmt,
    hash::{Hash, Hasher},
    iter::FromIterator,
    marker::PhantomData,
    ops::BitOrAssign,
};

use num_traits::{NumCast, PrimInt};

type Word = u64;
const WORD_BITS: usize = Word::BITS as usize;

#[inline]
fn word_index_and_mask(index: usize) -> (usize, Word) {
    (index / WORD_BITS, 1 << (index % WORD_BITS))
}

/// Counts set bits by clearing the lowest one until the word is empty,
/// so the cost is proportional to the number of members, not the word width.
#[inline]
fn popcount(mut word: Word) -> usize {
    let mut count = 0;
    while word != 0 {
        word &= word - 1; // clear the lowest set bit
        count += 1;
    }
    count
}

/// Converts a value into its bit index, panicking on values no set can hold.
fn checked_index<T: PrimInt>(value: T) -> usize {
    match value.to_usize() {
        Some(index) => index,
        None if value < T::zero() => panic!("IntSet cannot hold negative values"),
        None => panic!("value does not fit in a usize bit index"),
    }
}

fn from_index<T: PrimInt>(index: usize) -> T {
    // every set bit was written by `insert` from a value of type T
    <T as NumCast>::from(index).expect("bit index out of range for the element type")
}

/// A set of small non-negative integers stored as a growable bit-vector.
///
/// Value `x` is a member when bit `x % 64` of word `x / 64` is set. The word
/// vector grows on `insert` to fit the largest value seen so far and never
/// shrinks on its own; trailing zero words left behind by `remove` don't
/// affect membership, length or equality.
///
/// `T` is the element type and can be any primitive integer. Signed types
/// are accepted, but inserting or removing a negative value panics.
pub struct IntSet<T = usize> {
    words: Vec<Word>,
    marker: PhantomData<T>,
}

impl<T> IntSet<T> {
    /// Creates an empty set. No storage is allocated until the first insert.
    pub fn new() -> Self {
        Self {
            words: Vec::new(),
            marker: PhantomData,
        }
    }

    /// Creates an empty set with room reserved for values below `max_value`.
    ///
    /// Only storage is reserved: the set still starts out with no words, so
    /// `remove` panics until a value in the same 64-value block is inserted.
    pub fn with_capacity(max_value: usize) -> Self {
        let num_words = (max_value + WORD_BITS - 1) / WORD_BITS;
        Self {
            words: Vec::with_capacity(num_words),
            marker: PhantomData,
        }
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.words.iter().map(|&word| popcount(word)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    /// Removes every member, releasing the backing storage.
    pub fn clear(&mut self) {
        self.words = Vec::new();
    }

    /// Returns an independent copy of the set. Same as `clone`.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Adds every member of `other` to `self`. `other` is left untouched.
    pub fn union_with(&mut self, other: &Self) {
        let shared = self.words.len().min(other.words.len());
        for (word, &other_word) in self.words.iter_mut().zip(&other.words) {
            *word |= other_word;
        }
        self.words.extend_from_slice(&other.words[shared..]);
    }

    /// Exclusive upper bound of the values the set currently has words for.
    ///
    /// `contains` is false and `remove` panics for any value at or above it.
    pub fn upper_bound(&self) -> usize {
        self.words.len() * WORD_BITS
    }

    /// Drops trailing empty words and releases unused storage.
    pub fn shrink_to_fit(&mut self) {
        let len = self.trimmed_words().len();
        self.words.truncate(len);
        self.words.shrink_to_fit();
    }

    fn trimmed_words(&self) -> &[Word] {
        let end = self
            .words
            .iter()
            .rposition(|&word| word != 0)
            .map_or(0, |last| last + 1);
        &self.words[..end]
    }

    fn indices(&self) -> Indices<'_> {
        Indices {
            words: &self.words,
            word_index: 0,
            current_word: self.words.first().copied().unwrap_or(0),
        }
    }
}

impl<T: PrimInt> IntSet<T> {
    /// Returns `true` if `value` is a member. Negative values never are.
    pub fn contains(&self, value: T) -> bool {
        match value.to_usize() {
            Some(index) => {
                let (word_index, mask) = word_index_and_mask(index);
                word_index < self.words.len() && (self.words[word_index] & mask) != 0
            }
            None => false,
        }
    }

    /// Adds `value`, growing the storage as needed.
    /// Returns `true` if it wasn't already a member.
    ///
    /// # Panics
    ///
    /// Panics if `value` is negative.
    pub fn insert(&mut self, value: T) -> bool {
        let (word_index, mask) = word_index_and_mask(checked_index(value));
        if word_index >= self.words.len() {
            self.words.resize(word_index + 1, 0);
        }
        let word = &mut self.words[word_index];
        let inserted = (*word & mask) == 0;
        *word |= mask;
        inserted
    }

    /// Removes `value`. Returns `true` if it was a member; removing a
    /// non-member within the allocated range does nothing.
    ///
    /// # Panics
    ///
    /// Panics if `value` is negative or at or above [`upper_bound`]. Removal
    /// never grows the set.
    ///
    /// [`upper_bound`]: IntSet::upper_bound
    pub fn remove(&mut self, value: T) -> bool {
        let index = checked_index(value);
        let (word_index, mask) = word_index_and_mask(index);
        assert!(
            word_index < self.words.len(),
            "removing {} but the set only has room for values below {}",
            index,
            self.upper_bound(),
        );
        let word = &mut self.words[word_index];
        let removed = (*word & mask) != 0;
        *word &= !mask;
        removed
    }

    /// Iterates over the members in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            indices: self.indices(),
            marker: PhantomData,
        }
    }
}

impl<T> Default for IntSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for IntSet<T> {
    fn clone(&self) -> Self {
        Self {
            words: self.words.clone(),
            marker: PhantomData,
        }
    }
}

impl<T> PartialEq for IntSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.trimmed_words() == other.trimmed_words()
    }
}

impl<T> Eq for IntSet<T> {}

impl<T> Hash for IntSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.trimmed_words().hash(state);
    }
}

/// Renders the set as `{1 9 144}`, or `{}` when empty.
impl<T> fmt::Display for IntSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, index) in self.indices().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", index)?;
        }
        f.write_str("}")
    }
}

impl<T> fmt::Debug for IntSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.indices()).finish()
    }
}

impl<T> BitOrAssign<&IntSet<T>> for IntSet<T> {
    fn bitor_assign(&mut self, other: &IntSet<T>) {
        self.union_with(other);
    }
}

impl<T: PrimInt> Extend<T> for IntSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: PrimInt> FromIterator<T> for IntSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, T: PrimInt> IntoIterator for &'a IntSet<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Set bit positions in ascending order: word by word, lowest bit first.
struct Indices<'a> {
    words: &'a [Word],
    word_index: usize,
    current_word: Word,
}

impl<'a> Iterator for Indices<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current_word != 0 {
                let bit = self.current_word.trailing_zeros() as usize;
                self.current_word &= self.current_word - 1;
                return Some(self.word_index * WORD_BITS + bit);
            }
            if self.word_index + 1 >= self.words.len() {
                return None;
            }
            self.word_index += 1;
            self.current_word = self.words[self.word_index];
        }
    }
}

/// Ascending iterator over the members of an [`IntSet`].
pub struct Iter<'a, T> {
    indices: Indices<'a>,
    marker: PhantomData<T>,
}

impl<'a, T: PrimInt> Iterator for Iter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.indices.next().map(from_index)
    }
}
