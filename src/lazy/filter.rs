//! Selection views: [`Filter`], [`TryFilter`] and [`Find`].

use crate::{Cursor, Error, Result, Sequence, error::BoxError, step::Step};

/// Passes through only the elements matching a predicate, in source order.
#[derive(Debug, Clone)]
pub struct Filter<S, P> {
    pred: P,
    source: S,
}

/// Create a view keeping the elements of `source` for which `pred` holds.
///
/// ```
/// use seqflow::prelude::*;
/// use seqflow::lazy::filter;
///
/// let odd = filter(|n: &i32| n % 2 == 1, vec![1, 2, 3, 4, 5]);
/// assert_eq!(odd.gather::<Vec<_>>().unwrap(), vec![1, 3, 5]);
/// ```
pub fn filter<S, P>(pred: P, source: S) -> Filter<S, P> {
    Filter { pred, source }
}

pub struct FilterCursor<C, P> {
    pred: P,
    inner: C,
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a>
        = FilterCursor<S::Cursor<'a>, &'a P>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        FilterCursor {
            pred: &self.pred,
            inner: self.source.cursor(),
        }
    }
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn advance(&mut self) -> Result<Step<C::Item>> {
        loop {
            match self.inner.advance()? {
                Step::Yielded(item) if (self.pred)(&item) => return Ok(Step::Yielded(item)),
                Step::Yielded(_) => continue,
                Step::Complete(()) => return Ok(Step::Complete(())),
            }
        }
    }
}

/// [`Filter`] with a fallible predicate.
#[derive(Debug, Clone)]
pub struct TryFilter<S, P> {
    pred: P,
    source: S,
}

pub fn try_filter<S, P>(pred: P, source: S) -> TryFilter<S, P> {
    TryFilter { pred, source }
}

pub struct TryFilterCursor<C, P> {
    pred: P,
    inner: C,
}

impl<E, S, P> Sequence for TryFilter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> std::result::Result<bool, E>,
    E: Into<BoxError>,
{
    type Item = S::Item;
    type Cursor<'a>
        = TryFilterCursor<S::Cursor<'a>, &'a P>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        TryFilterCursor {
            pred: &self.pred,
            inner: self.source.cursor(),
        }
    }
}

impl<E, C, P> Cursor for TryFilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> std::result::Result<bool, E>,
    E: Into<BoxError>,
{
    type Item = C::Item;

    fn advance(&mut self) -> Result<Step<C::Item>> {
        loop {
            match self.inner.advance()? {
                Step::Yielded(item) => {
                    if (self.pred)(&item).map_err(Error::transform)? {
                        return Ok(Step::Yielded(item));
                    }
                }
                Step::Complete(()) => return Ok(Step::Complete(())),
            }
        }
    }
}

/// A sequence of at most one element: the first source element matching a predicate.
#[derive(Debug, Clone)]
pub struct Find<S, P> {
    pred: P,
    source: S,
}

/// Create a view holding the first element of `source` for which `pred` holds.
///
/// Pulling stops at the matching element; nothing after it is ever requested
/// from the source.
pub fn find<S, P>(pred: P, source: S) -> Find<S, P> {
    Find { pred, source }
}

pub struct FindCursor<C, P> {
    pred: P,
    inner: Option<C>,
}

impl<S, P> Sequence for Find<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a>
        = FindCursor<S::Cursor<'a>, &'a P>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        FindCursor {
            pred: &self.pred,
            inner: Some(self.source.cursor()),
        }
    }
}

impl<C, P> Cursor for FindCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn advance(&mut self) -> Result<Step<C::Item>> {
        let Some(inner) = self.inner.as_mut() else {
            return Ok(Step::Complete(()));
        };
        loop {
            match inner.advance()? {
                Step::Yielded(item) if (self.pred)(&item) => {
                    self.inner = None; // release the source once matched
                    return Ok(Step::Yielded(item));
                }
                Step::Yielded(_) => continue,
                Step::Complete(()) => {
                    self.inner = None;
                    return Ok(Step::Complete(()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::iterate;
    use crate::testing::Counted;

    #[test]
    fn test_filter_preserves_order() {
        let source = vec![5, 8, 1, 6, 3, 4];
        let even = source.by_ref().filter(|n| n % 2 == 0);
        assert_eq!(even.gather::<Vec<_>>().unwrap(), vec![8, 6, 4]);
    }

    #[test]
    fn test_filter_with_no_matches_completes() {
        let source = vec![1, 3, 5];
        let even = source.by_ref().filter(|n| n % 2 == 0);
        let mut cursor = even.cursor();
        assert_eq!(cursor.advance().unwrap(), Step::Complete(()));
        assert_eq!(cursor.advance().unwrap(), Step::Complete(()));
    }

    #[test]
    fn test_first_of_filter_pulls_only_to_match() {
        let source = Counted::new(vec![1, 3, 4, 5, 6, 8]);
        let first_even = source.by_ref().filter(|n| n % 2 == 0).first().unwrap();

        assert_eq!(first_even, Some(4));
        assert_eq!(source.pulls(), 3);
    }

    #[test]
    fn test_find_on_infinite_source() {
        let naturals = iterate(1u64, |n| n + 1);
        let found = naturals.find(|n| n * n > 50);
        assert_eq!(found.gather::<Vec<_>>().unwrap(), vec![8]);
    }

    #[test]
    fn test_find_stops_pulling_after_match() {
        let source = Counted::new(vec![2, 4, 7, 9, 11]);
        let view = source.by_ref().find(|n| n % 2 == 1);
        let mut cursor = view.cursor();

        assert_eq!(cursor.advance().unwrap(), Step::Yielded(7));
        assert_eq!(cursor.advance().unwrap(), Step::Complete(()));
        assert_eq!(cursor.advance().unwrap(), Step::Complete(()));
        assert_eq!(source.pulls(), 3);
    }

    #[test]
    fn test_find_without_match_is_empty() {
        let source = vec!["a", "b"];
        assert_eq!(source.by_ref().find(|s| s.is_empty()).first().unwrap(), None);
    }

    #[test]
    fn test_try_filter_surfaces_predicate_failure() {
        let source = vec![1, -1, 2];
        let positive = source
            .by_ref()
            .try_filter(|n| if *n < 0 { Err("negative") } else { Ok(*n > 1) });
        let mut cursor = positive.cursor();

        assert!(matches!(cursor.advance(), Err(Error::Transform(_))));
        assert_eq!(cursor.advance().unwrap(), Step::Yielded(2));
        assert_eq!(cursor.advance().unwrap(), Step::Complete(()));
    }
}
