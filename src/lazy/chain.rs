//! Views combining two sequences: [`Chain`] and [`Zip`].

use crate::{Cursor, Result, Sequence, step::Step};

/// Run through the first sequence, then the second.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

/// Create a view of every element of `first` followed by every element of `second`.
///
/// ```
/// use seqflow::prelude::*;
/// use seqflow::lazy::chain;
///
/// let both = chain(vec![1, 2], once(3));
/// assert_eq!(both.gather::<Vec<_>>().unwrap(), vec![1, 2, 3]);
/// ```
pub fn chain<A, B>(first: A, second: B) -> Chain<A, B> {
    Chain { first, second }
}

/// The first cursor is dropped once it completes.
pub struct ChainCursor<A, B>(Option<A>, B);

impl<A, B> Sequence for Chain<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    type Cursor<'a>
        = ChainCursor<A::Cursor<'a>, B::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        ChainCursor(Some(self.first.cursor()), self.second.cursor())
    }
}

impl<A, B> Cursor for ChainCursor<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    fn advance(&mut self) -> Result<Step<A::Item>> {
        if let Some(first) = self.0.as_mut() {
            match first.advance()? {
                Step::Yielded(item) => return Ok(Step::Yielded(item)),
                Step::Complete(()) => self.0 = None,
            }
        }
        self.1.advance()
    }
}

/// Pairs elements of two sequences, ending with the shorter one.
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    left: A,
    right: B,
}

pub fn zip<A, B>(left: A, right: B) -> Zip<A, B> {
    Zip { left, right }
}

pub struct ZipCursor<A, B> {
    left: A,
    right: B,
    done: bool,
}

impl<A, B> Sequence for Zip<A, B>
where
    A: Sequence,
    B: Sequence,
{
    type Item = (A::Item, B::Item);
    type Cursor<'a>
        = ZipCursor<A::Cursor<'a>, B::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        ZipCursor {
            left: self.left.cursor(),
            right: self.right.cursor(),
            done: false,
        }
    }
}

impl<A: Cursor, B: Cursor> Cursor for ZipCursor<A, B> {
    type Item = (A::Item, B::Item);

    fn advance(&mut self) -> Result<Step<Self::Item>> {
        if self.done {
            return Ok(Step::Complete(()));
        }
        let Step::Yielded(l) = self.left.advance()? else {
            self.done = true;
            return Ok(Step::Complete(()));
        };
        let Step::Yielded(r) = self.right.advance()? else {
            self.done = true;
            return Ok(Step::Complete(()));
        };
        Ok(Step::Yielded((l, r)))
    }
}
