//! Views that cut a sequence short or skip into it: [`Take`], [`Until`] and [`Rest`].

use crate::{Cursor, Result, Sequence, step::Step};

/// At most the first `n` elements of the source.
#[derive(Debug, Clone)]
pub struct Take<S> {
    n: usize,
    source: S,
}

/// Create a view of at most the first `n` elements of `source`.
///
/// Exactly `min(n, len)` elements are pulled; the element after the last one
/// taken is never requested.
///
/// ```
/// use seqflow::prelude::*;
/// use seqflow::lazy::take;
///
/// let naturals = iterate(0u32, |n| n + 1);
/// assert_eq!(take(3, naturals).gather::<Vec<_>>().unwrap(), vec![0, 1, 2]);
/// ```
pub fn take<S>(n: usize, source: S) -> Take<S> {
    Take { n, source }
}

pub struct TakeCursor<C> {
    remaining: usize,
    inner: C,
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;
    type Cursor<'a>
        = TakeCursor<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        TakeCursor {
            remaining: self.n,
            inner: self.source.cursor(),
        }
    }
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;

    fn advance(&mut self) -> Result<Step<C::Item>> {
        if self.remaining == 0 {
            return Ok(Step::Complete(()));
        }
        match self.inner.advance()? {
            Step::Yielded(item) => {
                self.remaining -= 1;
                Ok(Step::Yielded(item))
            }
            Step::Complete(()) => {
                self.remaining = 0;
                Ok(Step::Complete(()))
            }
        }
    }
}

/// The elements of the source up to the first one matching a predicate.
///
/// The matching element itself is consumed from the source but not emitted.
#[derive(Debug, Clone)]
pub struct Until<S, P> {
    pred: P,
    source: S,
}

pub fn until<S, P>(pred: P, source: S) -> Until<S, P> {
    Until { pred, source }
}

pub struct UntilCursor<C, P> {
    pred: P,
    inner: C,
    stopped: bool,
}

impl<S, P> Sequence for Until<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a>
        = UntilCursor<S::Cursor<'a>, &'a P>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        UntilCursor {
            pred: &self.pred,
            inner: self.source.cursor(),
            stopped: false,
        }
    }
}

impl<C, P> Cursor for UntilCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn advance(&mut self) -> Result<Step<C::Item>> {
        if self.stopped {
            return Ok(Step::Complete(()));
        }
        match self.inner.advance()? {
            Step::Yielded(item) if !(self.pred)(&item) => Ok(Step::Yielded(item)),
            _ => {
                self.stopped = true;
                Ok(Step::Complete(()))
            }
        }
    }
}

/// Every element of the source after the first.
#[derive(Debug, Clone)]
pub struct Rest<S> {
    source: S,
}

pub fn rest<S>(source: S) -> Rest<S> {
    Rest { source }
}

pub struct RestCursor<C> {
    skipped: bool,
    inner: C,
}

impl<S: Sequence> Sequence for Rest<S> {
    type Item = S::Item;
    type Cursor<'a>
        = RestCursor<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        RestCursor {
            skipped: false,
            inner: self.source.cursor(),
        }
    }
}

impl<C: Cursor> Cursor for RestCursor<C> {
    type Item = C::Item;

    fn advance(&mut self) -> Result<Step<C::Item>> {
        if !self.skipped {
            // mark first so a failing first pull is not retried
            self.skipped = true;
            if self.inner.advance()?.is_complete() {
                return Ok(Step::Complete(()));
            }
        }
        self.inner.advance()
    }
}
