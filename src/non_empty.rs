// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A sequence that cannot be empty because its first element is a field.
//!
//! This is the structural alternative to checking `len >= 1` on every call:
//! there is no constructor that doesn't take a head, so `len()` is at least one
//! by construction and `minimum`/`maximum` need no error path.

use std::slice;

use serde::{Deserialize, Serialize};

use crate::verify::{Result, Violation};

/// `head` followed by zero or more `tail` elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<T>", into = "Vec<T>")]
#[serde(bound(serialize = "T: Clone + Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct NonEmpty<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmpty<T> {
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// A one-element sequence.
    pub fn singleton(head: T) -> Self {
        Self::new(head, Vec::new())
    }

    /// Copy a non-empty slice. Fails with `Contract` on an empty one.
    pub fn from_slice(v: &[T]) -> Result<Self>
    where
        T: Clone,
    {
        match v.split_first() {
            Some((head, tail)) => Ok(Self::new(head.clone(), tail.to_vec())),
            None => Err(empty_input()),
        }
    }

    pub fn head(&self) -> &T {
        &self.head
    }

    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// Last element (the head when the tail is empty).
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// `1 + tail.len()`. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// `[head] ++ tail`, copied.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// `[head] ++ tail`, moved.
    pub fn into_vec(self) -> Vec<T> {
        let mut v = Vec::with_capacity(self.len());
        v.push(self.head);
        v.extend(self.tail);
        v
    }

    /// Apply `f` elementwise. The result is non-empty for the same reason.
    pub fn map<B, F: FnMut(&T) -> B>(&self, mut f: F) -> NonEmpty<B> {
        NonEmpty {
            head: f(&self.head),
            tail: self.tail.iter().map(f).collect(),
        }
    }

    /// Least element; ties return the first occurrence.
    pub fn minimum(&self) -> &T
    where
        T: Ord,
    {
        self.iter()
            .fold(&self.head, |best, x| if x < best { x } else { best })
    }

    /// Greatest element; ties return the first occurrence.
    pub fn maximum(&self) -> &T
    where
        T: Ord,
    {
        self.iter()
            .fold(&self.head, |best, x| if x > best { x } else { best })
    }
}

fn empty_input() -> Violation {
    Violation::contract("from_sequence", "requires non-empty sequence (len >= 1)")
}

/// `from_sequence(v)`: wrap a non-empty slice.
pub fn from_sequence<T: Clone>(v: &[T]) -> Result<NonEmpty<T>> {
    NonEmpty::from_slice(v)
}

/// `to_sequence(w)`: unwrap into `[head] ++ tail`.
pub fn to_sequence<T: Clone>(w: &NonEmpty<T>) -> Vec<T> {
    w.to_vec()
}

impl<T> TryFrom<Vec<T>> for NonEmpty<T> {
    type Error = Violation;

    fn try_from(v: Vec<T>) -> Result<Self> {
        let mut items = v.into_iter();
        match items.next() {
            Some(head) => Ok(Self::new(head, items.collect())),
            None => Err(empty_input()),
        }
    }
}

impl<T> From<NonEmpty<T>> for Vec<T> {
    fn from(w: NonEmpty<T>) -> Self {
        w.into_vec()
    }
}

impl<'a, T> IntoIterator for &'a NonEmpty<T> {
    type Item = &'a T;
    type IntoIter = std::iter::Chain<std::iter::Once<&'a T>, slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}
