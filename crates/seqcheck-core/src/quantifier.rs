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

//! # Quantifier Algorithms
//!
//! Boolean quantification over finite sequences: does a probe hold for all,
//! no, at least one, or exactly one element. Each quantifier exists in a
//! value-equality form (`all_of`, `none_of`, `any_of`, `one_of`) and a
//! predicate form (`all_of_if`, `none_of_if`, `any_of_if`, `one_of_if`).
//!
//! ## Semantics
//!
//! - `all_of`: true when every element matches; stops at the first
//!   non-matching element.
//! - `none_of`: true when no element matches; stops at the first matching
//!   element.
//! - `any_of`: true when at least one element matches; stops at the first
//!   matching element.
//! - `one_of`: true when exactly one element matches; stops at the second
//!   matching element.
//!
//! The empty sequence is vacuously universal: `all_of` and `none_of` return
//! `true`, `any_of` and `one_of` return `false`.
//!
//! There is exactly one control-flow implementation per quantifier kind. The
//! value forms wrap equality into a predicate and delegate to the `*_if`
//! forms; the [`Quantify`] extension trait delegates to the free functions.
//!
//! ## Preconditions
//!
//! The sequence must be finite; none of these functions terminate on an
//! endless iterator whose answer is not decided early. A panicking probe
//! propagates to the caller unmodified.
//!
//! ## Usage
//!
//! ```rust
//! use seqcheck_core::quantifier::{any_of, one_of_if, Quantify};
//!
//! assert!(any_of(&[1, 3, 5, 7], &3));
//! assert!(!one_of_if(&[1, 2, 4, 3], |&x| x % 2 == 0)); // 2 and 4 both match
//! assert!("rustacean".chars().any_of(&'c'));
//! ```

use std::borrow::Borrow;

/// Returns `true` if the predicate holds for every element of the sequence.
///
/// Stops at the first element for which the predicate returns `false`.
/// Returns `true` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// # use seqcheck_core::quantifier::all_of_if;
/// assert!(all_of_if(&[4, 8, 12], |&x| x % 2 == 0));
/// assert!(!all_of_if(&[4, 8, 13], |&x| x % 2 == 0));
/// assert!(all_of_if(&[] as &[i32], |&x| x > 0));
/// ```
#[inline]
pub fn all_of_if<C, P>(seq: C, pred: P) -> bool
where
    C: IntoIterator,
    P: FnMut(C::Item) -> bool,
{
    seq.into_iter().all(pred)
}

/// Returns `true` if every element of the sequence is equal to `value`.
///
/// Equality-probe counterpart of [`all_of_if`]; the comparison happens
/// through [`Borrow`], so slices of `T` and owning iterators over `T` both
/// accept a plain `&T` probe.
///
/// # Examples
///
/// ```rust
/// # use seqcheck_core::quantifier::all_of;
/// assert!(all_of(&[2, 2, 2, 2], &2));
/// assert!(!all_of(&[2, 2, 3, 2], &2));
/// ```
#[inline]
pub fn all_of<C, Q>(seq: C, value: &Q) -> bool
where
    C: IntoIterator,
    C::Item: Borrow<Q>,
    Q: PartialEq,
{
    all_of_if(seq, |item| item.borrow() == value)
}

/// Returns `true` if the predicate holds for no element of the sequence.
///
/// Stops at the first element for which the predicate returns `true`.
/// Returns `true` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// # use seqcheck_core::quantifier::none_of_if;
/// assert!(none_of_if(&[1, 3, 5, 7], |&x| x % 2 == 0));
/// assert!(!none_of_if(&[1, 3, 6, 7], |&x| x % 2 == 0));
/// ```
#[inline]
pub fn none_of_if<C, P>(seq: C, pred: P) -> bool
where
    C: IntoIterator,
    P: FnMut(C::Item) -> bool,
{
    !seq.into_iter().any(pred)
}

/// Returns `true` if no element of the sequence is equal to `value`.
///
/// # Examples
///
/// ```rust
/// # use seqcheck_core::quantifier::none_of;
/// assert!(none_of(&[1, 3, 5, 7], &2));
/// assert!(!none_of(&[1, 3, 5, 7], &5));
/// ```
#[inline]
pub fn none_of<C, Q>(seq: C, value: &Q) -> bool
where
    C: IntoIterator,
    C::Item: Borrow<Q>,
    Q: PartialEq,
{
    none_of_if(seq, |item| item.borrow() == value)
}

/// Returns `true` if the predicate holds for at least one element of the
/// sequence.
///
/// Stops at the first element for which the predicate returns `true`.
/// Returns `false` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// # use seqcheck_core::quantifier::any_of_if;
/// assert!(any_of_if(&[1, 3, 6, 7], |&x| x % 2 == 0));
/// assert!(!any_of_if(&[1, 3, 5, 7], |&x| x % 2 == 0));
/// ```
#[inline]
pub fn any_of_if<C, P>(seq: C, pred: P) -> bool
where
    C: IntoIterator,
    P: FnMut(C::Item) -> bool,
{
    seq.into_iter().any(pred)
}

/// Returns `true` if at least one element of the sequence is equal to
/// `value`.
///
/// # Examples
///
/// ```rust
/// # use seqcheck_core::quantifier::any_of;
/// assert!(any_of(&[1, 3, 5, 7], &3));
/// assert!(!any_of(&[1, 3, 5, 7], &2));
/// ```
#[inline]
pub fn any_of<C, Q>(seq: C, value: &Q) -> bool
where
    C: IntoIterator,
    C::Item: Borrow<Q>,
    Q: PartialEq,
{
    any_of_if(seq, |item| item.borrow() == value)
}

/// Returns `true` if the predicate holds for exactly one element of the
/// sequence.
///
/// Scans forward to the first matching element; if none exists the answer is
/// `false`, otherwise the answer is `true` exactly when no further element of
/// the remainder matches ([`none_of_if`] on the rest of the iterator). Stops
/// at the second matching element. Returns `false` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// # use seqcheck_core::quantifier::one_of_if;
/// assert!(one_of_if(&[1, 2, 3, 4], |&x| x == 3));
/// assert!(!one_of_if(&[1, 2, 4, 3], |&x| x % 2 == 0)); // 2 and 4 both match
/// assert!(!one_of_if(&[1, 3, 5], |&x| x % 2 == 0));
/// ```
pub fn one_of_if<C, P>(seq: C, mut pred: P) -> bool
where
    C: IntoIterator,
    P: FnMut(C::Item) -> bool,
{
    let mut iter = seq.into_iter();
    while let Some(item) = iter.next() {
        if pred(item) {
            // Exactly one match iff the remainder holds none.
            return none_of_if(iter, pred);
        }
    }
    false
}

/// Returns `true` if exactly one element of the sequence is equal to
/// `value`.
///
/// # Examples
///
/// ```rust
/// # use seqcheck_core::quantifier::one_of;
/// assert!(one_of(&[1, 2, 3, 2, 1], &3));
/// assert!(!one_of(&[1, 2, 3, 2, 1], &2)); // appears twice
/// assert!(!one_of(&[1, 2, 3, 2, 1], &9)); // absent
/// ```
#[inline]
pub fn one_of<C, Q>(seq: C, value: &Q) -> bool
where
    C: IntoIterator,
    C::Item: Borrow<Q>,
    Q: PartialEq,
{
    one_of_if(seq, |item| item.borrow() == value)
}

/// Method-call syntax for the quantifier algorithms on any iterator.
///
/// Every provided method forwards to the corresponding free function, so the
/// two surfaces always agree. Blanket-implemented for all iterators.
///
/// # Examples
///
/// ```rust
/// use seqcheck_core::quantifier::Quantify;
///
/// assert!([2, 2, 2].iter().all_of(&2));
/// assert!([1, 2, 3].iter().one_of_if(|&x| x % 2 == 0));
/// assert!("hello".chars().none_of(&'z'));
/// ```
pub trait Quantify: Iterator {
    /// See [`all_of`].
    #[inline]
    fn all_of<Q>(self, value: &Q) -> bool
    where
        Self: Sized,
        Self::Item: Borrow<Q>,
        Q: PartialEq,
    {
        all_of(self, value)
    }

    /// See [`all_of_if`].
    #[inline]
    fn all_of_if<P>(self, pred: P) -> bool
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        all_of_if(self, pred)
    }

    /// See [`none_of`].
    #[inline]
    fn none_of<Q>(self, value: &Q) -> bool
    where
        Self: Sized,
        Self::Item: Borrow<Q>,
        Q: PartialEq,
    {
        none_of(self, value)
    }

    /// See [`none_of_if`].
    #[inline]
    fn none_of_if<P>(self, pred: P) -> bool
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        none_of_if(self, pred)
    }

    /// See [`any_of`].
    #[inline]
    fn any_of<Q>(self, value: &Q) -> bool
    where
        Self: Sized,
        Self::Item: Borrow<Q>,
        Q: PartialEq,
    {
        any_of(self, value)
    }

    /// See [`any_of_if`].
    #[inline]
    fn any_of_if<P>(self, pred: P) -> bool
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        any_of_if(self, pred)
    }

    /// See [`one_of`].
    #[inline]
    fn one_of<Q>(self, value: &Q) -> bool
    where
        Self: Sized,
        Self::Item: Borrow<Q>,
        Q: PartialEq,
    {
        one_of(self, value)
    }

    /// See [`one_of_if`].
    #[inline]
    fn one_of_if<P>(self, pred: P) -> bool
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        one_of_if(self, pred)
    }
}

impl<I: Iterator> Quantify for I {}
