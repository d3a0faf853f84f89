//! Element-wise transforms: [`Map`], [`TryMap`] and [`Inspect`].

use crate::{Cursor, Error, Result, Sequence, error::BoxError, step::Step};

/// Applies a function to every element of the source.
#[derive(Debug, Clone)]
pub struct Map<S, F> {
    f: F,
    source: S,
}

/// Create a view applying `f` to every element of `source`.
///
/// # Examples
///
/// ```
/// use seqflow::prelude::*;
/// use seqflow::lazy::map;
///
/// let squares = map(|n: i32| n * n, vec![1, 2, 3]);
/// assert_eq!(squares.gather::<Vec<_>>().unwrap(), vec![1, 4, 9]);
/// ```
pub fn map<S, F>(f: F, source: S) -> Map<S, F> {
    Map { f, source }
}

pub struct MapCursor<C, F> {
    f: F,
    inner: C,
}

impl<U, S, F> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    type Item = U;
    type Cursor<'a>
        = MapCursor<S::Cursor<'a>, &'a F>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        MapCursor {
            f: &self.f,
            inner: self.source.cursor(),
        }
    }
}

impl<U, C, F> Cursor for MapCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> U,
{
    type Item = U;

    fn advance(&mut self) -> Result<Step<U>> {
        Ok(self.inner.advance()?.map_yielded(&self.f))
    }
}

/// Applies a fallible function to every element of the source.
///
/// An `Err` is returned from the `advance` that pulled the offending element;
/// the following `advance` continues with the next element.
#[derive(Debug, Clone)]
pub struct TryMap<S, F> {
    f: F,
    source: S,
}

/// Create a view applying a fallible `f` to every element of `source`.
///
/// ```
/// use seqflow::prelude::*;
/// use seqflow::lazy::try_map;
///
/// let parsed = try_map(|s: &str| s.parse::<u8>(), vec!["1", "2", "x"]);
/// let mut cursor = parsed.cursor();
/// assert_eq!(cursor.advance().unwrap(), Step::Yielded(1));
/// assert_eq!(cursor.advance().unwrap(), Step::Yielded(2));
/// assert!(cursor.advance().is_err());
/// assert_eq!(cursor.advance().unwrap(), Step::Complete(()));
/// ```
pub fn try_map<S, F>(f: F, source: S) -> TryMap<S, F> {
    TryMap { f, source }
}

pub struct TryMapCursor<C, F> {
    f: F,
    inner: C,
}

impl<U, E, S, F> Sequence for TryMap<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> std::result::Result<U, E>,
    E: Into<BoxError>,
{
    type Item = U;
    type Cursor<'a>
        = TryMapCursor<S::Cursor<'a>, &'a F>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        TryMapCursor {
            f: &self.f,
            inner: self.source.cursor(),
        }
    }
}

impl<U, E, C, F> Cursor for TryMapCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> std::result::Result<U, E>,
    E: Into<BoxError>,
{
    type Item = U;

    fn advance(&mut self) -> Result<Step<U>> {
        match self.inner.advance()? {
            Step::Yielded(item) => (self.f)(item).map(Step::Yielded).map_err(Error::transform),
            Step::Complete(()) => Ok(Step::Complete(())),
        }
    }
}

/// Calls a function on a reference to every element as it passes through.
#[derive(Debug, Clone)]
pub struct Inspect<S, F> {
    f: F,
    source: S,
}

/// Create a view that observes every element of `source` without changing it.
pub fn inspect<S, F>(f: F, source: S) -> Inspect<S, F> {
    Inspect { f, source }
}

pub struct InspectCursor<C, F> {
    f: F,
    inner: C,
}

impl<S, F> Sequence for Inspect<S, F>
where
    S: Sequence,
    F: Fn(&S::Item),
{
    type Item = S::Item;
    type Cursor<'a>
        = InspectCursor<S::Cursor<'a>, &'a F>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        InspectCursor {
            f: &self.f,
            inner: self.source.cursor(),
        }
    }
}

impl<C, F> Cursor for InspectCursor<C, F>
where
    C: Cursor,
    F: Fn(&C::Item),
{
    type Item = C::Item;

    fn advance(&mut self) -> Result<Step<C::Item>> {
        let step = self.inner.advance()?;
        if let Step::Yielded(item) = &step {
            (self.f)(item);
        }
        Ok(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::iterate;
    use std::cell::Cell;

    #[test]
    fn test_map_is_lazy() {
        let calls = Cell::new(0);
        let source = vec![1, 2, 3];
        let view = source.by_ref().map(|n| {
            calls.set(calls.get() + 1);
            n + 1
        });

        assert_eq!(calls.get(), 0);
        let mut cursor = view.cursor();
        assert_eq!(cursor.advance().unwrap(), Step::Yielded(2));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_map_over_infinite_source() {
        let evens = iterate(0u32, |n| n + 1).map(|n| n * 2);
        assert_eq!(evens.take(3).gather::<Vec<_>>().unwrap(), vec![0, 2, 4]);
    }

    #[test]
    fn test_map_chains_associatively() {
        let source = vec![1, 2, 3];
        let nested = source.by_ref().map(|n| n + 1).map(|n| n * 3);
        let fused = source.by_ref().map(|n| (n + 1) * 3);

        assert_eq!(
            nested.gather::<Vec<_>>().unwrap(),
            fused.gather::<Vec<_>>().unwrap()
        );
    }

    #[test]
    fn test_try_map_does_not_rerun_failed_element() {
        let calls = Cell::new(0);
        let source = vec![1, 2, 3];
        let view = source.by_ref().try_map(|n| {
            calls.set(calls.get() + 1);
            if n == 2 { Err("even") } else { Ok(n) }
        });

        let mut cursor = view.cursor();
        assert_eq!(cursor.advance().unwrap(), Step::Yielded(1));
        assert!(matches!(cursor.advance(), Err(Error::Transform(_))));
        assert_eq!(cursor.advance().unwrap(), Step::Yielded(3));
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_inspect_sees_every_pulled_element() {
        let seen = Cell::new(0);
        let source = vec![5, 6, 7, 8];
        let view = source.by_ref().inspect(|_| seen.set(seen.get() + 1)).take(2);

        assert_eq!(view.gather::<Vec<_>>().unwrap(), vec![5, 6]);
        assert_eq!(seen.get(), 2);
    }
}
