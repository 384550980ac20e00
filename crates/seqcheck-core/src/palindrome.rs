// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Palindrome Check
//!
//! Symmetry test for bidirectionally-traversable sequences: a sequence is a
//! palindrome when, for every valid index `i`, the element at position `i`
//! from the start is equivalent to the element at position `i` from the end.
//!
//! The check consumes a single `DoubleEndedIterator` from both ends at once,
//! comparing each front/back pair under the equivalence relation. The first
//! inequivalent pair terminates the scan with `false`; once the two cursors
//! meet or cross (either end of the iterator is exhausted) the scan succeeds.
//! A sequence of length `n` costs exactly ⌊n/2⌋ comparisons; lengths 0 and 1
//! succeed immediately without touching any element.
//!
//! The default equivalence is `PartialEq`; [`is_palindrome_by`] accepts any
//! binary relation, which must be used consistently over the whole sequence.
//!
//! ## Usage
//!
//! ```rust
//! use seqcheck_core::palindrome::{is_palindrome, is_palindrome_by, Palindromic};
//!
//! assert!(is_palindrome("racecar".chars()));
//! assert!(!is_palindrome("hello".chars()));
//! assert!(is_palindrome_by("RaceCar".chars(), |a, b| a.eq_ignore_ascii_case(b)));
//! assert!([1, 2, 2, 1].iter().is_palindrome());
//! ```

/// Returns `true` if the sequence is symmetric under the given equivalence
/// relation.
///
/// The relation receives the front element as its first argument and the
/// back element as its second. It is invoked exactly ⌊n/2⌋ times for a
/// sequence that is a palindrome, and a panic inside it propagates to the
/// caller unmodified.
///
/// # Examples
///
/// ```rust
/// # use seqcheck_core::palindrome::is_palindrome_by;
/// assert!(is_palindrome_by("Level".chars(), |a, b| a.eq_ignore_ascii_case(b)));
/// assert!(!is_palindrome_by("Lever".chars(), |a, b| a.eq_ignore_ascii_case(b)));
/// ```
pub fn is_palindrome_by<C, F>(seq: C, mut eq: F) -> bool
where
    C: IntoIterator,
    C::IntoIter: DoubleEndedIterator,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let mut iter = seq.into_iter();
    // The front cursor advances with `next`, the back cursor with
    // `next_back`; exhaustion of either means the cursors met or crossed.
    while let (Some(front), Some(back)) = (iter.next(), iter.next_back()) {
        if !eq(&front, &back) {
            return false;
        }
    }
    true
}

/// Returns `true` if the sequence is equal to its own reverse.
///
/// Equality counterpart of [`is_palindrome_by`]. Sequences of length 0 and 1
/// are palindromes.
///
/// # Examples
///
/// ```rust
/// # use seqcheck_core::palindrome::is_palindrome;
/// assert!(is_palindrome("racecar".chars()));
/// assert!(!is_palindrome("hello".chars()));
/// assert!(is_palindrome("".chars()));
/// assert!(is_palindrome(&[1, 2, 3, 2, 1]));
/// ```
#[inline]
pub fn is_palindrome<C>(seq: C) -> bool
where
    C: IntoIterator,
    C::IntoIter: DoubleEndedIterator,
    C::Item: PartialEq,
{
    is_palindrome_by(seq, |front, back| front == back)
}

/// Method-call syntax for the palindrome check on any bidirectional
/// iterator.
///
/// Both provided methods forward to the corresponding free function.
/// Blanket-implemented for all `DoubleEndedIterator`s.
///
/// # Examples
///
/// ```rust
/// use seqcheck_core::palindrome::Palindromic;
///
/// assert!("otto".chars().is_palindrome());
/// assert!([1.0, 2.5, 1.0].iter().is_palindrome());
/// ```
pub trait Palindromic: DoubleEndedIterator {
    /// See [`is_palindrome`].
    #[inline]
    fn is_palindrome(self) -> bool
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        is_palindrome(self)
    }

    /// See [`is_palindrome_by`].
    #[inline]
    fn is_palindrome_by<F>(self, eq: F) -> bool
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        is_palindrome_by(self, eq)
    }
}

impl<I: DoubleEndedIterator> Palindromic for I {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_palindrome_odd_length() {
        assert!(is_palindrome(&[1, 2, 3, 2, 1]));
        assert!(!is_palindrome(&[1, 2, 3, 4, 1]));
    }

    #[test]
    fn test_is_palindrome_even_length() {
        assert!(is_palindrome(&[1, 2, 2, 1]));
        assert!(!is_palindrome(&[1, 2, 3, 1]));
    }

    #[test]
    fn test_is_palindrome_empty() {
        assert!(is_palindrome("".chars()));
        let empty: [i32; 0] = [];
        assert!(is_palindrome(&empty));
    }

    #[test]
    fn test_is_palindrome_single_element() {
        assert!(is_palindrome(&[42]));
        assert!(is_palindrome("x".chars()));
    }

    #[test]
    fn test_is_palindrome_strings() {
        assert!(is_palindrome("racecar".chars()));
        assert!(!is_palindrome("hello".chars()));
        assert!(is_palindrome("abba".chars()));
    }

    #[test]
    fn test_agrees_with_reverse() {
        let seqs: [&[i32]; 6] = [
            &[],
            &[1],
            &[1, 2],
            &[1, 2, 1],
            &[1, 2, 3, 2, 1],
            &[1, 2, 3, 4],
        ];
        for seq in seqs {
            assert_eq!(
                is_palindrome(seq.iter()),
                is_palindrome(seq.iter().rev()),
                "seq={seq:?}"
            );
        }
    }

    #[test]
    fn test_custom_equivalence() {
        assert!(is_palindrome_by("RaceCar".chars(), |a, b| {
            a.eq_ignore_ascii_case(b)
        }));
        // Case-sensitive default rejects the same input.
        assert!(!is_palindrome("RaceCar".chars()));
    }

    #[test]
    fn test_comparison_count_is_half_length() {
        for (seq, expected) in [
            (vec![], 0),
            (vec![1], 0),
            (vec![1, 1], 1),
            (vec![1, 2, 1], 1),
            (vec![1, 2, 2, 1], 2),
            (vec![1, 2, 3, 2, 1], 2),
        ] {
            let mut calls = 0;
            assert!(is_palindrome_by(&seq, |a, b| {
                calls += 1;
                a == b
            }));
            assert_eq!(calls, expected, "seq={seq:?}");
        }
    }

    #[test]
    fn test_stops_at_first_mismatch() {
        let mut calls = 0;
        assert!(!is_palindrome_by(&[9, 2, 3, 2, 1], |a, b| {
            calls += 1;
            a == b
        }));
        // Outermost pair already differs.
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_extension_trait_agrees_with_free_functions() {
        assert!("otto".chars().is_palindrome());
        assert!(![1, 2, 3].iter().is_palindrome());
        assert!([1, 2, 1].iter().is_palindrome_by(|a, b| a == b));
    }
}
