//! Arbitrarily nested lists flattened to their leaves.
//!
//! [`Nested`] tags every node as a leaf or a list up front, so flattening never
//! has to probe whether a value is itself iterable. Its cursor is a producer
//! that walks the tree recursively, delegating into each child list.
//!
//! ```rust
//! use seqflow::prelude::*;
//! use seqflow::Nested::{Leaf, List};
//!
//! let tree = List(vec![Leaf(1), List(vec![Leaf(2), List(vec![Leaf(3), Leaf(4)]), Leaf(5)])]);
//! assert_eq!(tree.gather::<Vec<_>>().unwrap(), vec![1, 2, 3, 4, 5]);
//! ```

use futures::future::LocalBoxFuture;

use crate::{
    Result, Sequence,
    producer::{Body, Emitter, Producer},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T> {
    Leaf(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Nested::Leaf(_))
    }

    /// Longest path from this node to a leaf; a leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Nested::Leaf(_) => 0,
            Nested::List(children) => 1 + children.iter().map(Nested::depth).max().unwrap_or(0),
        }
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Nested::Leaf(value)
    }
}

impl<T> FromIterator<Nested<T>> for Nested<T> {
    fn from_iter<I: IntoIterator<Item = Nested<T>>>(iter: I) -> Self {
        Nested::List(iter.into_iter().collect())
    }
}

/// Producer body flattening one node.
pub struct Walk<'a, T>(&'a Nested<T>);

impl<'a, T: Clone + 'a> Body<T> for Walk<'a, T> {
    type Return = ();
    type Future = LocalBoxFuture<'a, Result<()>>;

    fn start(self, co: Emitter<T>) -> Self::Future {
        walk(self.0, co)
    }
}

fn walk<'a, T: Clone + 'a>(node: &'a Nested<T>, co: Emitter<T>) -> LocalBoxFuture<'a, Result<()>> {
    Box::pin(async move {
        match node {
            Nested::Leaf(value) => co.emit(value.clone()).await,
            Nested::List(children) => {
                for child in children {
                    co.delegate(Walk(child)).await?;
                }
            }
        }
        Ok(())
    })
}

impl<T: Clone> Sequence for Nested<T> {
    type Item = T;
    type Cursor<'a>
        = Producer<T, Walk<'a, T>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        Producer::new(Walk(self))
    }
}
