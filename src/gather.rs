//! Eager materialization
//!
//! [`Gather`] is the "build a new container from any sequence" capability. It
//! drains a cursor completely and owns the result, so the gathered container
//! never shares storage with what it was built from.
//!
//! [`Gatherable`] marks container families that are sequences themselves and can
//! be rebuilt at another element type. Their [`eager`](Gatherable::eager) handle
//! offers the lazy vocabulary in draining form: each operator returns a new
//! container of the same family right away.
//!
//! ```rust
//! use std::collections::VecDeque;
//! use seqflow::prelude::*;
//!
//! let queue = VecDeque::from([3, 1, 4, 1, 5]);
//! let doubled: VecDeque<i32> = queue.eager().map(|n| n * 2).unwrap();
//! assert_eq!(doubled, VecDeque::from([6, 2, 8, 2, 10]));
//! assert_eq!(queue.eager().find(|n| *n > 3).unwrap(), Some(4));
//! ```

use std::collections::{LinkedList, VecDeque};

use tracing::trace;

use crate::{Cursor, Result, Sequence, step::Step};

/// Containers that can be built by draining a cursor.
///
/// Every `Default + Extend<T>` collection qualifies: `Vec`, `VecDeque`,
/// `LinkedList`, `String` (from `char`s), the sets, and maps (from pairs).
pub trait Gather<T>: Sized {
    /// Drain `cursor` into a new container. Never returns on an infinite cursor.
    fn from_cursor<C>(cursor: C) -> Result<Self>
    where
        C: Cursor<Item = T>;

    /// Drain a fresh cursor of `source`.
    fn from_sequence<S>(source: &S) -> Result<Self>
    where
        S: Sequence<Item = T> + ?Sized,
    {
        Self::from_cursor(source.cursor())
    }
}

impl<T, G> Gather<T> for G
where
    G: Default + Extend<T>,
{
    fn from_cursor<C>(mut cursor: C) -> Result<Self>
    where
        C: Cursor<Item = T>,
    {
        let mut gathered = G::default();
        let mut count = 0usize;
        while let Step::Yielded(item) = cursor.advance()? {
            gathered.extend(Some(item));
            count += 1;
        }
        trace!(count, into = std::any::type_name::<G>(), "gathered");
        Ok(gathered)
    }
}

/// A container family that is both a sequence and buildable from one.
pub trait Gatherable: Sequence + Gather<<Self as Sequence>::Item> {
    /// The same family holding `U`s.
    type Rebind<U>: Gather<U>;

    /// Eager operators over this container.
    fn eager(&self) -> Eager<'_, Self> {
        Eager { source: self }
    }
}

impl<T: Clone> Gatherable for Vec<T> {
    type Rebind<U> = Vec<U>;
}

impl<T: Clone> Gatherable for VecDeque<T> {
    type Rebind<U> = VecDeque<U>;
}

impl<T: Clone> Gatherable for LinkedList<T> {
    type Rebind<U> = LinkedList<U>;
}

/// Eager operator vocabulary of a [`Gatherable`] container.
///
/// Container-producing operators drain their whole output before returning and
/// run their transform on every element, even if the caller only looks at the
/// front of the result. Use the lazy views on [`Sequence`] to short-circuit.
pub struct Eager<'a, G: ?Sized> {
    source: &'a G,
}

impl<G: ?Sized> Clone for Eager<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: ?Sized> Copy for Eager<'_, G> {}

impl<G: Gatherable> Eager<'_, G> {
    pub fn map<U, F>(self, f: F) -> Result<G::Rebind<U>>
    where
        F: Fn(G::Item) -> U,
    {
        self.source.map(f).gather()
    }

    pub fn filter<P>(self, pred: P) -> Result<G>
    where
        P: Fn(&G::Item) -> bool,
    {
        self.source.filter(pred).gather()
    }

    pub fn until<P>(self, pred: P) -> Result<G>
    where
        P: Fn(&G::Item) -> bool,
    {
        self.source.until(pred).gather()
    }

    pub fn take(self, n: usize) -> Result<G> {
        self.source.take(n).gather()
    }

    pub fn rest(self) -> Result<G> {
        self.source.rest().gather()
    }

    pub fn stateful_map<St, U, F>(self, seed: St, f: F) -> Result<G::Rebind<U>>
    where
        St: Clone,
        F: Fn(St, G::Item) -> (St, U),
    {
        self.source.stateful_map(seed, f).gather()
    }

    /// Fold every element; identical to [`Sequence::reduce`].
    pub fn reduce<A, F>(self, seed: A, f: F) -> Result<A>
    where
        F: FnMut(A, G::Item) -> A,
    {
        self.source.reduce(seed, f)
    }

    /// The first matching element, pulling no further than the match.
    pub fn find<P>(self, pred: P) -> Result<Option<G::Item>>
    where
        P: Fn(&G::Item) -> bool,
    {
        self.source.find(pred).first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::init_tracing;
    use pretty_assertions::assert_eq;
    use std::{
        cell::Cell,
        collections::{BTreeSet, HashMap, HashSet},
    };

    #[test]
    fn test_gathered_copy_is_independent_of_source() {
        init_tracing();
        let mut source = vec![1, 2, 3, 4];
        let snapshot: Vec<i32> = source.by_ref().filter(|n| n % 2 == 0).map(|n| n * 10).gather().unwrap();

        source.push(6);
        source[1] = 100;

        assert_eq!(snapshot, vec![20, 40]);
    }

    #[test]
    fn test_eager_keeps_the_family() {
        let list: LinkedList<&str> = ["a", "bb", "ccc"].into_iter().collect();
        let lengths: LinkedList<usize> = list.eager().map(str::len).unwrap();
        let long: LinkedList<&str> = list.eager().filter(|s| s.len() > 1).unwrap();

        assert_eq!(lengths.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(long.into_iter().collect::<Vec<_>>(), vec!["bb", "ccc"]);
    }

    #[test]
    fn test_eager_vocabulary_on_vec() {
        let source = vec![5, 4, 3, 2, 1];
        let eager = source.eager();

        assert_eq!(eager.take(2).unwrap(), vec![5, 4]);
        assert_eq!(eager.rest().unwrap(), vec![4, 3, 2, 1]);
        assert_eq!(eager.until(|n| *n < 3).unwrap(), vec![5, 4, 3]);
        assert_eq!(eager.stateful_map(0, |max: i32, n: i32| (max.max(n), max.max(n) - n)).unwrap(), vec![0, 1, 2, 3, 4]);
        assert_eq!(eager.reduce(0, |a, n| a + n).unwrap(), 15);
        assert_eq!(eager.find(|n| n % 2 == 0).unwrap(), Some(4));
        assert_eq!(eager.find(|n| *n > 9).unwrap(), None);
    }

    #[test]
    fn test_eager_map_touches_every_element() {
        let calls = Cell::new(0);
        let source = vec![1, 2, 3, 4, 5];

        let mapped = source.eager().map(|n| {
            calls.set(calls.get() + 1);
            n + 1
        });
        assert_eq!(mapped.unwrap()[0], 2);
        assert_eq!(calls.get(), 5);

        calls.set(0);
        let lazy = source.by_ref().map(|n| {
            calls.set(calls.get() + 1);
            n + 1
        });
        assert_eq!(lazy.first().unwrap(), Some(2));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_gather_into_sets_strings_and_maps() {
        let letters = vec!['b', 'a', 'b', 'c'];

        let ordered: BTreeSet<char> = letters.gather().unwrap();
        assert_eq!(ordered.into_iter().collect::<String>(), "abc");

        let unique: HashSet<char> = letters.gather().unwrap();
        assert_eq!(unique.len(), 3);

        let text: String = letters.by_ref().rest().gather().unwrap();
        assert_eq!(text, "abc");

        let positions: HashMap<char, usize> = letters.by_ref().zip(crate::build::iterate(0, |i| i + 1)).gather().unwrap();
        assert_eq!(positions[&'b'], 2);
        assert_eq!(positions[&'a'], 1);
    }

    #[test]
    fn test_gather_stops_at_first_failure() {
        let source = vec![1, 2, 3];
        let failing = source.by_ref().try_map(|n| if n == 2 { Err("two") } else { Ok(n) });

        assert!(failing.gather::<Vec<_>>().is_err());
        assert!(Vec::<i32>::from_sequence(&failing).is_err());
        assert_eq!(Vec::<i32>::from_sequence(&source).unwrap(), vec![1, 2, 3]);
    }
}
