//! A set of small non-negative integers backed by a growable bit-vector.
//!
//! ```
//! use intset::IntSet;
//!
//! let mut x: IntSet = IntSet::new();
//! x.insert(1);
//! x.insert(144);
//! x.insert(9);
//! assert_eq!(x.to_string(), "{1 9 144}");
//!
//! let y = intset::intset![9usize, 42];
//! x.union_with(&y);
//! assert_eq!(x.to_string(), "{1 9 42 144}");
//! assert_eq!(x.len(), 4);
//! ```

mod int_set;

pub use int_set::{IntSet, Iter};

/// Builds an [`IntSet`] from a list of values.
///
/// ```
/// use intset::{intset, IntSet};
///
/// let set: IntSet<u32> = intset![4, 32, 16, 24, 63];
/// assert!(set.contains(32));
/// assert_eq!(set.len(), 5);
/// ```
#[macro_export]
macro_rules! intset {
    ($($value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut set = $crate::IntSet::new();
        $(
            set.insert($value);
        )*
        set
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intset_macro() {
        let set: IntSet = intset![144, 1, 9];
        assert_eq!(set.to_string(), "{1 9 144}");

        let empty: IntSet<u16> = intset![];
        assert!(empty.is_empty());
    }

    #[test]
    fn intset_macro_trailing_comma() {
        let set: IntSet<u8> = intset![3, 3, 7,];
        assert_eq!(set.len(), 2);
    }
}
