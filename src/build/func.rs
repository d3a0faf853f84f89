use std::marker::PhantomData;

use crate::{Cursor, Result, Sequence, sequence::IterCursor, step::Step};

/// A sequence with no elements.
#[derive(Debug)]
pub struct Empty<T>(PhantomData<fn() -> T>);

/// Create a sequence with no elements.
pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        empty()
    }
}

impl<T> Sequence for Empty<T> {
    type Item = T;
    type Cursor<'a>
        = Empty<T>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        empty()
    }
}

impl<T> Cursor for Empty<T> {
    type Item = T;

    fn advance(&mut self) -> Result<Step<T>> {
        Ok(Step::Complete(()))
    }
}

/// A sequence of exactly one element.
#[derive(Debug, Clone)]
pub struct Once<T>(T);

/// Create a sequence holding only `value`.
///
/// ```rust
/// use seqflow::prelude::*;
///
/// let single = once("only");
/// assert_eq!(single.gather::<Vec<_>>().unwrap(), vec!["only"]);
/// ```
pub fn once<T: Clone>(value: T) -> Once<T> {
    Once(value)
}

impl<T: Clone> Sequence for Once<T> {
    type Item = T;
    type Cursor<'a>
        = IterCursor<std::option::IntoIter<T>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        IterCursor::new(Some(self.0.clone()).into_iter())
    }
}

/// An infinite sequence repeating one element.
#[derive(Debug, Clone)]
pub struct Repeat<T>(T);

pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat(value)
}

pub struct RepeatCursor<'a, T>(&'a T);

impl<T: Clone> Sequence for Repeat<T> {
    type Item = T;
    type Cursor<'a>
        = RepeatCursor<'a, T>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        RepeatCursor(&self.0)
    }
}

impl<T: Clone> Cursor for RepeatCursor<'_, T> {
    type Item = T;

    fn advance(&mut self) -> Result<Step<T>> {
        Ok(Step::Yielded(self.0.clone()))
    }
}

/// An infinite sequence `seed, f(seed), f(f(seed)), ...`.
#[derive(Debug, Clone)]
pub struct Iterate<T, F> {
    seed: T,
    f: F,
}

/// Create the infinite unfold of `f` starting at `seed`.
///
/// ```rust
/// use seqflow::prelude::*;
///
/// let powers = iterate(1u32, |n| n * 2);
/// assert_eq!(powers.take(5).gather::<Vec<_>>().unwrap(), vec![1, 2, 4, 8, 16]);
/// ```
pub fn iterate<T, F>(seed: T, f: F) -> Iterate<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    Iterate { seed, f }
}

/// Holds the last value handed out; `f` runs only when the next one is pulled.
pub struct IterateCursor<'a, T, F> {
    seed: &'a T,
    f: F,
    last: Option<T>,
}

impl<T, F> Sequence for Iterate<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    type Item = T;
    type Cursor<'a>
        = IterateCursor<'a, T, &'a F>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        IterateCursor {
            seed: &self.seed,
            f: &self.f,
            last: None,
        }
    }
}

impl<T, F> Cursor for IterateCursor<'_, T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    type Item = T;

    fn advance(&mut self) -> Result<Step<T>> {
        let next = match &self.last {
            Some(last) => (self.f)(last),
            None => self.seed.clone(),
        };
        self.last = Some(next.clone());
        Ok(Step::Yielded(next))
    }
}

/// A sequence backed by a factory of std iterators.
#[derive(Debug, Clone)]
pub struct IterFn<F>(F);

/// Bridge a std iterator into a sequence by calling `f` for every new cursor.
///
/// ```rust
/// use seqflow::prelude::*;
///
/// let evens = iter_fn(|| (0..).step_by(2));
/// assert_eq!(evens.by_ref().take(3).gather::<Vec<_>>().unwrap(), vec![0, 2, 4]);
/// assert_eq!(evens.first().unwrap(), Some(0));
/// ```
pub fn iter_fn<I, F>(f: F) -> IterFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    IterFn(f)
}

impl<I, F> Sequence for IterFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type Item = I::Item;
    type Cursor<'a>
        = IterCursor<I::IntoIter>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        IterCursor::new((self.0)().into_iter())
    }
}

/// A sequence whose cursors are built from closures.
///
/// `f` is called once per cursor and returns the pull function for that
/// traversal, which owns whatever position it needs.
#[derive(Debug, Clone)]
pub struct FromFn<F>(F);

/// Create a sequence from a factory of pull functions.
///
/// ```rust
/// use seqflow::prelude::*;
///
/// let countdown = from_fn(|| {
///     let mut n = 3;
///     move || {
///         n -= 1;
///         Ok(if n >= 0 { Step::Yielded(n) } else { Step::Complete(()) })
///     }
/// });
/// assert_eq!(countdown.gather::<Vec<_>>().unwrap(), vec![2, 1, 0]);
/// ```
pub fn from_fn<T, F, G>(f: F) -> FromFn<F>
where
    F: Fn() -> G,
    G: FnMut() -> Result<Step<T>>,
{
    FromFn(f)
}

/// Fuses the wrapped pull function: once it reports completion it is dropped.
pub struct FromFnCursor<G>(Option<G>);

impl<T, F, G> Sequence for FromFn<F>
where
    F: Fn() -> G,
    G: FnMut() -> Result<Step<T>>,
{
    type Item = T;
    type Cursor<'a>
        = FromFnCursor<G>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        FromFnCursor(Some((self.0)()))
    }
}

impl<T, G> Cursor for FromFnCursor<G>
where
    G: FnMut() -> Result<Step<T>>,
{
    type Item = T;

    fn advance(&mut self) -> Result<Step<T>> {
        let Some(pull) = self.0.as_mut() else {
            return Ok(Step::Complete(()));
        };
        let step = pull()?;
        if step.is_complete() {
            self.0 = None;
        }
        Ok(step)
    }
}
