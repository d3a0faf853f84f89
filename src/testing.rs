//! Helpers for testing code built on sequences.
//!
//! Available to this crate's own tests and, with the `test-api` feature, to
//! downstream test suites.

use std::{cell::Cell, rc::Rc, sync::Once};

use tracing_subscriber::EnvFilter;

use crate::{Cursor, Result, Sequence, step::Step};

/// Install a `fmt` subscriber honouring `RUST_LOG`, once per process.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A source that counts every `advance` made on any of its cursors.
///
/// Pulls that report completion are counted too.
///
/// ```rust
/// use seqflow::prelude::*;
/// use seqflow::testing::Counted;
///
/// let source = Counted::new(vec![1, 2, 3, 4]);
/// assert_eq!(source.by_ref().filter(|n| n % 2 == 0).first().unwrap(), Some(2));
/// assert_eq!(source.pulls(), 2);
/// ```
#[derive(Debug)]
pub struct Counted<S> {
    source: S,
    pulls: Rc<Cell<usize>>,
}

impl<S> Counted<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            pulls: Rc::new(Cell::new(0)),
        }
    }

    pub fn pulls(&self) -> usize {
        self.pulls.get()
    }

    pub fn reset(&self) {
        self.pulls.set(0);
    }
}

pub struct CountedCursor<C> {
    inner: C,
    pulls: Rc<Cell<usize>>,
}

impl<S: Sequence> Sequence for Counted<S> {
    type Item = S::Item;
    type Cursor<'a>
        = CountedCursor<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        CountedCursor {
            inner: self.source.cursor(),
            pulls: Rc::clone(&self.pulls),
        }
    }
}

impl<C: Cursor> Cursor for CountedCursor<C> {
    type Item = C::Item;

    fn advance(&mut self) -> Result<Step<C::Item>> {
        self.pulls.set(self.pulls.get() + 1);
        self.inner.advance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_across_cursors() {
        let source = Counted::new(vec!['a', 'b']);
        let mut a = source.cursor();
        let mut b = source.cursor();

        a.advance().unwrap();
        b.advance().unwrap();
        b.advance().unwrap();
        b.advance().unwrap();
        assert_eq!(source.pulls(), 4);

        source.reset();
        assert_eq!(source.pulls(), 0);
    }

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
        tracing::info!("subscriber installed");
    }
}
