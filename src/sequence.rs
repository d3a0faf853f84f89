//! The pull protocol shared by every source, view and producer.
//!
//! A [`Sequence`] is anything that can hand out fresh [`Cursor`]s. A cursor is the
//! only thing that carries a traversal position; the sequence itself is never
//! advanced. Operators are provided as default methods on [`Sequence`] and return
//! views that do no work until one of their cursors is advanced.
//!
//! # Examples
//!
//! ```rust
//! use seqflow::prelude::*;
//!
//! let numbers = vec![1, 2, 3, 4, 5, 6];
//! let view = numbers.by_ref().filter(|n| n % 2 == 0).map(|n| n * 10);
//!
//! assert_eq!(view.gather::<Vec<_>>().unwrap(), vec![20, 40, 60]);
//! assert_eq!(view.first().unwrap(), Some(20));
//! ```
//!
//! # Sharing a source
//!
//! Views own whatever they wrap. Wrapping a reference (`numbers.by_ref()`) shares
//! the source; every cursor then borrows it, so the source cannot be mutated while
//! a traversal is in flight. Gathered containers never share storage with their
//! source.

use std::{
    collections::{LinkedList, VecDeque},
    rc::Rc,
};

use either::Either;

use crate::{
    Error,
    Result,
    error::BoxError,
    gather::Gather,
    iter::Iter,
    lazy::{Chain, Filter, Find, Inspect, Map, Rest, Take, TryFilter, TryMap, Until, Zip},
    stateful::{StatefulMap, TryStatefulMap},
    step::Step,
};

/// A traversal position over some sequence.
///
/// Once `advance` returns `Step::Complete`, every later call on the same cursor
/// must return `Step::Complete` again. A failure returned from `advance` consumes
/// whatever element triggered it; the next call moves on (or reports
/// completion), it never retries that element.
pub trait Cursor {
    type Item;

    /// Pull the next value.
    fn advance(&mut self) -> Result<Step<Self::Item>>;

    /// Adapt into a std iterator of `Result`s.
    fn iter(self) -> Iter<Self>
    where
        Self: Sized,
    {
        Iter::new(self)
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    fn advance(&mut self) -> Result<Step<Self::Item>> {
        (**self).advance()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn advance(&mut self) -> Result<Step<Self::Item>> {
        (**self).advance()
    }
}

impl<L, R> Cursor for Either<L, R>
where
    L: Cursor,
    R: Cursor<Item = L::Item>,
{
    type Item = L::Item;

    fn advance(&mut self) -> Result<Step<Self::Item>> {
        match self {
            Either::Left(l) => l.advance(),
            Either::Right(r) => r.advance(),
        }
    }
}

/// Anything that can produce independent cursors.
///
/// Finite and infinite sequences are both allowed. Terminal operations that
/// drain a sequence (`gather`, `reduce`, `count`) never return on an infinite
/// one; bound it with `take` or `until` first.
pub trait Sequence {
    type Item;
    type Cursor<'a>: Cursor<Item = Self::Item>
    where
        Self: 'a;

    /// Obtain a fresh cursor positioned before the first element.
    fn cursor(&self) -> Self::Cursor<'_>;

    /// Borrow this sequence so views can share it instead of owning it.
    fn by_ref(&self) -> &Self {
        self
    }

    /// Apply `f` to every element.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
    {
        crate::lazy::map(f, self)
    }

    /// Apply a fallible `f` to every element; an `Err` surfaces from `advance`.
    fn try_map<U, E, F>(self, f: F) -> TryMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> std::result::Result<U, E>,
        E: Into<BoxError>,
    {
        crate::lazy::try_map(f, self)
    }

    /// Observe every element as it is pulled.
    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Item),
    {
        crate::lazy::inspect(f, self)
    }

    /// Keep only the elements matching `pred`.
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        crate::lazy::filter(pred, self)
    }

    /// Keep only the elements matching a fallible `pred`.
    fn try_filter<E, P>(self, pred: P) -> TryFilter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> std::result::Result<bool, E>,
        E: Into<BoxError>,
    {
        crate::lazy::try_filter(pred, self)
    }

    /// At most one element: the first matching `pred`.
    fn find<P>(self, pred: P) -> Find<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        crate::lazy::find(pred, self)
    }

    /// Elements up to, not including, the first one matching `pred`.
    fn until<P>(self, pred: P) -> Until<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        crate::lazy::until(pred, self)
    }

    /// At most the first `n` elements.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        crate::lazy::take(n, self)
    }

    /// Every element but the first.
    fn rest(self) -> Rest<Self>
    where
        Self: Sized,
    {
        crate::lazy::rest(self)
    }

    /// This sequence followed by `other`.
    fn chain<R>(self, other: R) -> Chain<Self, R>
    where
        Self: Sized,
        R: Sequence<Item = Self::Item>,
    {
        crate::lazy::chain(self, other)
    }

    /// Pairs of elements, ending with the shorter side.
    fn zip<R>(self, other: R) -> Zip<Self, R>
    where
        Self: Sized,
        R: Sequence,
    {
        crate::lazy::zip(self, other)
    }

    /// Map with an explicitly threaded state, seeded from `seed` on every traversal.
    fn stateful_map<St, U, F>(self, seed: St, f: F) -> StatefulMap<Self, St, F>
    where
        Self: Sized,
        St: Clone,
        F: Fn(St, Self::Item) -> (St, U),
    {
        crate::stateful::stateful_map(f, seed, self)
    }

    /// [`stateful_map`](Sequence::stateful_map) with a fallible transform.
    fn try_stateful_map<St, U, E, F>(self, seed: St, f: F) -> TryStatefulMap<Self, St, F>
    where
        Self: Sized,
        St: Clone,
        F: Fn(St, Self::Item) -> std::result::Result<(St, U), E>,
        E: Into<BoxError>,
    {
        crate::stateful::try_stateful_map(f, seed, self)
    }

    /// The first element, pulling exactly once.
    fn first(&self) -> Result<Option<Self::Item>> {
        self.cursor().advance().map(Option::from)
    }

    /// Fold every element into `seed`.
    fn reduce<A, F>(&self, seed: A, mut f: F) -> Result<A>
    where
        F: FnMut(A, Self::Item) -> A,
    {
        let mut cursor = self.cursor();
        let mut acc = seed;
        while let Step::Yielded(item) = cursor.advance()? {
            acc = f(acc, item);
        }
        Ok(acc)
    }

    /// Fold every element into `seed`, stopping at the first failure.
    fn try_reduce<A, E, F>(&self, seed: A, mut f: F) -> Result<A>
    where
        F: FnMut(A, Self::Item) -> std::result::Result<A, E>,
        E: Into<BoxError>,
    {
        let mut cursor = self.cursor();
        let mut acc = seed;
        while let Step::Yielded(item) = cursor.advance()? {
            acc = f(acc, item).map_err(Error::transform)?;
        }
        Ok(acc)
    }

    /// Number of elements.
    fn count(&self) -> Result<usize> {
        self.reduce(0, |n, _| n + 1)
    }

    /// Drain a fresh cursor into a new container.
    fn gather<G>(&self) -> Result<G>
    where
        G: Gather<Self::Item>,
    {
        G::from_cursor(self.cursor())
    }

    /// Traverse with a std iterator of `Result`s.
    fn traverse(&self) -> Iter<Self::Cursor<'_>> {
        Iter::new(self.cursor())
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }
}

impl<S: Sequence + ?Sized> Sequence for Rc<S> {
    type Item = S::Item;
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }
}

impl<L, R> Sequence for Either<L, R>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
{
    type Item = L::Item;
    type Cursor<'a>
        = Either<L::Cursor<'a>, R::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        match self {
            Either::Left(l) => Either::Left(l.cursor()),
            Either::Right(r) => Either::Right(r.cursor()),
        }
    }
}

/// Cursor over any std iterator. Fused, so completion is sticky.
#[derive(Debug, Clone)]
pub struct IterCursor<I> {
    iter: std::iter::Fuse<I>,
}

impl<I: Iterator> IterCursor<I> {
    pub fn new(iter: I) -> Self {
        Self { iter: iter.fuse() }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    fn advance(&mut self) -> Result<Step<Self::Item>> {
        Ok(self.iter.next().into())
    }
}

impl<T: Clone> Sequence for [T] {
    type Item = T;
    type Cursor<'a>
        = IterCursor<std::iter::Cloned<std::slice::Iter<'a, T>>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        IterCursor::new(self.iter().cloned())
    }
}

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;
    type Cursor<'a>
        = IterCursor<std::iter::Cloned<std::slice::Iter<'a, T>>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        IterCursor::new(self.iter().cloned())
    }
}

impl<T: Clone> Sequence for VecDeque<T> {
    type Item = T;
    type Cursor<'a>
        = IterCursor<std::iter::Cloned<std::collections::vec_deque::Iter<'a, T>>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        IterCursor::new(self.iter().cloned())
    }
}

impl<T: Clone> Sequence for LinkedList<T> {
    type Item = T;
    type Cursor<'a>
        = IterCursor<std::iter::Cloned<std::collections::linked_list::Iter<'a, T>>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        IterCursor::new(self.iter().cloned())
    }
}

impl Sequence for str {
    type Item = char;
    type Cursor<'a>
        = IterCursor<std::str::Chars<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        IterCursor::new(self.chars())
    }
}
