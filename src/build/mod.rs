//! Building sequences from scratch
//!
//! Sources that are not backed by a container: constants, unfolds, closures and
//! bridges from std iterators. Producers written as straight-line code live in
//! [`producer`](crate::producer).

mod func;

pub use func::{
    Empty, FromFn, FromFnCursor, Iterate, IterateCursor, IterFn, Once, Repeat, RepeatCursor, empty,
    from_fn, iter_fn, iterate, once, repeat,
};
