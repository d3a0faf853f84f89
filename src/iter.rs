//! Std iterator adapter for cursors.
//!
//! [`Iter`] yields `Result<T>` so failures raised while pulling are not lost. After
//! a failure or completion it is fused: every later `next` returns `None`.
//!
//! ```rust
//! use seqflow::prelude::*;
//!
//! let letters = vec!['a', 'b', 'c'];
//! let upper: Result<String, _> = letters.traverse().map(|c| c.map(|c| c.to_ascii_uppercase())).collect();
//! assert_eq!(upper.unwrap(), "ABC");
//! ```

use crate::{Cursor, Error, Result, Step};

pub struct Iter<C> {
    state: IterState<C>,
}

enum IterState<C> {
    Active(C),
    Complete,
    Failed,
}

impl<C: Cursor> Iter<C> {
    pub fn new(cursor: C) -> Self {
        Self {
            state: IterState::Active(cursor),
        }
    }

    /// Check whether the underlying cursor reported completion.
    pub fn is_complete(&self) -> bool {
        matches!(self.state, IterState::Complete)
    }

    /// Check whether a failure was yielded.
    pub fn is_failed(&self) -> bool {
        matches!(self.state, IterState::Failed)
    }
}

impl<C: Cursor> Iterator for Iter<C> {
    type Item = Result<C::Item, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let IterState::Active(cursor) = &mut self.state else {
            return None;
        };
        match cursor.advance() {
            Ok(Step::Yielded(item)) => Some(Ok(item)),
            Ok(Step::Complete(())) => {
                self.state = IterState::Complete;
                None
            }
            Err(e) => {
                self.state = IterState::Failed;
                Some(Err(e))
            }
        }
    }
}

impl<C: Cursor> std::iter::FusedIterator for Iter<C> {}
