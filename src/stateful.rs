//! Mapping with explicitly threaded state.
//!
//! A [`StatefulMap`] owns a seed. Every cursor starts from its own clone of that
//! seed and replaces it with the state returned by each call of the transform, so
//! two traversals of the same view, or two views built from the same seed, never
//! observe each other's state.
//!
//! The transform must keep no hidden state of its own; all memory between steps
//! belongs in the threaded state value.
//!
//! ```rust
//! use seqflow::prelude::*;
//!
//! let odds = vec![1, 3, 5, 7, 9, 11, 13];
//! let squares = odds.stateful_map(0, |sum, n| (sum + n, sum + n));
//! assert_eq!(squares.gather::<Vec<_>>().unwrap(), vec![1, 4, 9, 16, 25, 36, 49]);
//! ```

use crate::{Cursor, Error, Result, Sequence, error::BoxError, step::Step};

/// Map view threading a state value through every step.
#[derive(Debug, Clone)]
pub struct StatefulMap<S, St, F> {
    f: F,
    seed: St,
    source: S,
}

/// Create a view calling `f(state, element) -> (state, output)` for every element
/// of `source`, starting each traversal from `seed`.
pub fn stateful_map<S, St, F>(f: F, seed: St, source: S) -> StatefulMap<S, St, F> {
    StatefulMap { f, seed, source }
}

pub struct StatefulMapCursor<C, St, F> {
    f: F,
    state: Option<St>,
    inner: C,
}

impl<St, U, S, F> Sequence for StatefulMap<S, St, F>
where
    S: Sequence,
    St: Clone,
    F: Fn(St, S::Item) -> (St, U),
{
    type Item = U;
    type Cursor<'a>
        = StatefulMapCursor<S::Cursor<'a>, St, &'a F>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        StatefulMapCursor {
            f: &self.f,
            state: Some(self.seed.clone()),
            inner: self.source.cursor(),
        }
    }
}

impl<St, U, C, F> Cursor for StatefulMapCursor<C, St, F>
where
    C: Cursor,
    F: Fn(St, C::Item) -> (St, U),
{
    type Item = U;

    fn advance(&mut self) -> Result<Step<U>> {
        if self.state.is_none() {
            return Ok(Step::Complete(()));
        }
        let Step::Yielded(item) = self.inner.advance()? else {
            return Ok(Step::Complete(()));
        };
        let Some(state) = self.state.take() else {
            return Ok(Step::Complete(()));
        };
        let (next, output) = (self.f)(state, item);
        self.state = Some(next);
        Ok(Step::Yielded(output))
    }
}

/// [`StatefulMap`] with a fallible transform.
///
/// A failure consumes the held state, so the cursor that hit it completes on
/// every later `advance`.
#[derive(Debug, Clone)]
pub struct TryStatefulMap<S, St, F> {
    f: F,
    seed: St,
    source: S,
}

pub fn try_stateful_map<S, St, F>(f: F, seed: St, source: S) -> TryStatefulMap<S, St, F> {
    TryStatefulMap { f, seed, source }
}

pub struct TryStatefulMapCursor<C, St, F> {
    f: F,
    state: Option<St>,
    inner: C,
}

impl<St, U, E, S, F> Sequence for TryStatefulMap<S, St, F>
where
    S: Sequence,
    St: Clone,
    F: Fn(St, S::Item) -> std::result::Result<(St, U), E>,
    E: Into<BoxError>,
{
    type Item = U;
    type Cursor<'a>
        = TryStatefulMapCursor<S::Cursor<'a>, St, &'a F>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        TryStatefulMapCursor {
            f: &self.f,
            state: Some(self.seed.clone()),
            inner: self.source.cursor(),
        }
    }
}

impl<St, U, E, C, F> Cursor for TryStatefulMapCursor<C, St, F>
where
    C: Cursor,
    F: Fn(St, C::Item) -> std::result::Result<(St, U), E>,
    E: Into<BoxError>,
{
    type Item = U;

    fn advance(&mut self) -> Result<Step<U>> {
        if self.state.is_none() {
            return Ok(Step::Complete(()));
        }
        let Step::Yielded(item) = self.inner.advance()? else {
            return Ok(Step::Complete(()));
        };
        let Some(state) = self.state.take() else {
            return Ok(Step::Complete(()));
        };
        let (next, output) = (self.f)(state, item).map_err(Error::transform)?;
        self.state = Some(next);
        Ok(Step::Yielded(output))
    }
}
