//! # Seqflow: Pull-Based Sequences
//!
//! Describe a pipeline over a source once, then pull values through it on
//! demand.
//!
//! ## Core Traits
//!
//! - **[`Sequence`]**: anything that can hand out fresh, independent cursors
//! - **[`Cursor`]**: a traversal position; [`advance`](Cursor::advance) returns
//!   the next value as [`Step::Yielded`] or reports [`Step::Complete`] for good
//! - **[`Gather`]**: containers that can be built by draining a cursor
//!
//! ## Key Features
//!
//! - **Lazy**: `map`, `filter`, `find`, `until`, `take` and `rest` build views
//!   that do no work until pulled, and never pull more than they need
//! - **Eager**: [`Gatherable::eager`] offers the same vocabulary, draining into a
//!   new container of the same family at every step
//! - **Producers**: write a sequence as an `async` body that emits values, with
//!   nested delegation, instead of a hand-rolled state machine
//! - **Stateful mapping**: thread an explicit state through a map with
//!   [`Sequence::stateful_map`]
//!
//! ## Example
//!
//! ```
//! use seqflow::prelude::*;
//!
//! let naturals = iterate(1u64, |n| n + 1);
//! let first_big_square = naturals.map(|n| n * n).find(|sq| *sq > 200).first().unwrap();
//! assert_eq!(first_big_square, Some(225));
//!
//! let odds = vec![1, 3, 5, 7];
//! let squares = odds.stateful_map(0, |sum, n| (sum + n, sum + n));
//! assert_eq!(squares.gather::<Vec<_>>().unwrap(), vec![1, 4, 9, 16]);
//! ```
//!
//! ## Sharing and mutation
//!
//! Cursors borrow the sequence they came from. A source cannot be mutated while
//! a view over it is still being traversed; gather a copy first if you need to.
//! Terminal operations that drain (`gather`, `reduce`, `count`) must only be used
//! on finite sequences.

pub mod build;
mod error;
mod gather;
mod iter;
pub mod lazy;
mod nested;
pub mod prelude;
pub mod producer;
mod sequence;
pub mod stateful;
mod step;
#[cfg(any(test, feature = "test-api"))]
pub mod testing;

pub use error::{BoxError, Error, Result};
pub use gather::{Eager, Gather, Gatherable};
pub use iter::Iter;
pub use nested::{Nested, Walk};
pub use producer::{Emitter, Generator, Producer, generator, producer};
pub use sequence::{Cursor, IterCursor, Sequence};
pub use step::Step;
