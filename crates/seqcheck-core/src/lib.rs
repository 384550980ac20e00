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

//! # Seqcheck Core
//!
//! Generic, single-pass sequence-predicate algorithms. This crate answers
//! boolean questions about finite sequences without counting, buffering, or
//! mutating anything: does a probe hold for all, no, at least one, or exactly
//! one element, and does a sequence read the same forwards and backwards.
//!
//! ## Modules
//!
//! - `quantifier`: `all_of`, `none_of`, `any_of`, and `one_of` over any
//!   `IntoIterator`, each in a value-equality and a predicate (`*_if`) form,
//!   plus the `Quantify` extension trait for method-call syntax on any
//!   iterator. Every variant short-circuits as soon as its answer is
//!   decidable.
//! - `palindrome`: `is_palindrome` and `is_palindrome_by` over any
//!   bidirectional traversal, comparing front and back cursors under a
//!   configurable equivalence relation, plus the `Palindromic` extension
//!   trait for `DoubleEndedIterator`.
//!
//! ## Purpose
//!
//! These primitives replace hand-rolled scan loops in validation-heavy code.
//! They are pure functions: zero allocation, zero mutation of the input, and
//! no observable effect beyond the returned boolean. Probes and equivalence
//! relations are invoked exactly as many times as the short-circuit rules
//! require, in sequence order, and are never cached.
//!
//! Refer to each module for detailed APIs and examples.

pub mod palindrome;
pub mod quantifier;
