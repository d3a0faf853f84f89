use std::{future::Future, marker::PhantomData};

use crate::{
    Result, Sequence,
    producer::{Emitter, Producer},
};

/// A reusable producer definition.
///
/// Every cursor is a fresh [`Producer`] running the body from the top, so no
/// state is shared between traversals.
pub struct Generator<T, F> {
    body: F,
    _emits: PhantomData<fn() -> T>,
}

/// Create a generator from a body that can be started any number of times.
///
/// ```rust
/// use seqflow::prelude::*;
///
/// async fn fibonacci(co: Emitter<u64>) -> seqflow::Result<()> {
///     let (mut a, mut b) = (0, 1);
///     loop {
///         co.emit(a).await;
///         (a, b) = (b, a + b);
///     }
/// }
///
/// let fib = generator(fibonacci);
/// let evens = fib.filter(|n| n % 2 == 0).take(4);
/// assert_eq!(evens.gather::<Vec<_>>().unwrap(), vec![0, 2, 8, 34]);
/// ```
pub fn generator<T, F, Fut, R>(body: F) -> Generator<T, F>
where
    F: Fn(Emitter<T>) -> Fut,
    Fut: Future<Output = Result<R>>,
{
    Generator {
        body,
        _emits: PhantomData,
    }
}

impl<T, F, Fut, R> Generator<T, F>
where
    F: Fn(Emitter<T>) -> Fut,
    Fut: Future<Output = Result<R>>,
{
    /// Start a new instance, keeping access to its return value.
    pub fn start(&self) -> Producer<T, &F> {
        Producer::new(&self.body)
    }
}

impl<T, F: Clone> Clone for Generator<T, F> {
    fn clone(&self) -> Self {
        Self {
            body: self.body.clone(),
            _emits: PhantomData,
        }
    }
}

impl<T, F, Fut, R> Sequence for Generator<T, F>
where
    F: Fn(Emitter<T>) -> Fut,
    Fut: Future<Output = Result<R>>,
{
    type Item = T;
    type Cursor<'a>
        = Producer<T, &'a F>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cursor, step::Step};
    use std::cell::Cell;

    #[test]
    fn test_instances_are_independent() {
        let squares = generator(|co| async move {
            for n in 1..=3 {
                co.emit(n * n).await;
            }
            Ok(())
        });
        let mut a = squares.cursor();
        let mut b = squares.cursor();

        assert_eq!(a.advance().unwrap(), Step::Yielded(1));
        assert_eq!(a.advance().unwrap(), Step::Yielded(4));
        assert_eq!(b.advance().unwrap(), Step::Yielded(1));
        assert_eq!(a.advance().unwrap(), Step::Yielded(9));
        assert_eq!(a.advance().unwrap(), Step::Complete(()));
        assert_eq!(b.advance().unwrap(), Step::Yielded(4));
    }

    #[test]
    fn test_body_runs_only_as_far_as_pulled() {
        let steps = Cell::new(0);
        let counter = &steps;
        let naturals = generator(|co| async move {
            for n in 0u32.. {
                counter.set(counter.get() + 1);
                co.emit(n).await;
            }
            Ok(())
        });

        assert_eq!(naturals.by_ref().take(3).gather::<Vec<_>>().unwrap(), vec![0, 1, 2]);
        assert_eq!(steps.get(), 3);

        assert_eq!(naturals.find(|n| *n == 10).first().unwrap(), Some(10));
        assert_eq!(steps.get(), 3 + 11);
    }

    #[test]
    fn test_borrowed_input() {
        let words = &vec!["seq", "flow", ""];
        let lengths = generator(|co| async move {
            for w in words.iter().filter(|w| !w.is_empty()) {
                co.emit(w.len()).await;
            }
            Ok(())
        });

        assert_eq!(lengths.gather::<Vec<_>>().unwrap(), vec![3, 4]);
    }

    #[test]
    fn test_start_exposes_return_value() {
        let tally = generator(|co| async move {
            co.emit('a').await;
            co.emit('b').await;
            Ok(2usize)
        });
        let mut instance = tally.start();
        while instance.resume().unwrap().is_yielded() {}

        assert_eq!(instance.return_value(), Some(&2));
    }
}
