use std::{
    cell::Cell,
    future::Future,
    pin::Pin,
    rc::Rc,
    task::{Context, Poll},
};

use crate::{Cursor, Result, producer::Body, step::Step};

/// Handle a producer body uses to hand values to its consumer.
///
/// Clones share one slot, which is how a delegated body emits on behalf of the
/// body that delegated to it.
pub struct Emitter<T> {
    slot: Rc<Cell<Option<T>>>,
}

impl<T> Clone for Emitter<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T> Emitter<T> {
    pub(crate) fn new() -> Self {
        Self {
            slot: Rc::new(Cell::new(None)),
        }
    }

    pub(crate) fn take(&self) -> Option<T> {
        self.slot.take()
    }

    /// Emit `value` and suspend until the consumer pulls again.
    pub fn emit(&self, value: T) -> Emit<'_, T> {
        Emit {
            slot: &self.slot,
            value: Some(value),
        }
    }

    /// Run `body` in place, forwarding every value it emits, and return its result.
    ///
    /// ```rust
    /// use seqflow::prelude::*;
    ///
    /// async fn digits(co: Emitter<u8>) -> seqflow::Result<usize> {
    ///     co.emit(1).await;
    ///     co.emit(2).await;
    ///     Ok(2)
    /// }
    ///
    /// async fn framed(co: Emitter<u8>) -> seqflow::Result<()> {
    ///     co.emit(0).await;
    ///     let inner = co.delegate(digits).await?;
    ///     co.emit(inner as u8 * 10).await;
    ///     Ok(())
    /// }
    ///
    /// assert_eq!(generator(framed).gather::<Vec<_>>().unwrap(), vec![0, 1, 2, 20]);
    /// ```
    pub async fn delegate<B: Body<T>>(&self, body: B) -> Result<B::Return> {
        body.start(self.clone()).await
    }

    /// Forward every value of `cursor`, stopping at its first failure.
    pub async fn emit_all<C>(&self, mut cursor: C) -> Result<()>
    where
        C: Cursor<Item = T>,
    {
        while let Step::Yielded(value) = cursor.advance()? {
            self.emit(value).await;
        }
        Ok(())
    }
}

/// Future returned by [`Emitter::emit`].
///
/// The first poll that finds the slot free stores the value and parks; the next
/// poll resumes. While another emission still occupies the slot the value is
/// kept back, so emissions awaited together come out one per pull, in the
/// order they were first polled.
#[must_use = "an emission does nothing unless awaited"]
pub struct Emit<'a, T> {
    slot: &'a Cell<Option<T>>,
    value: Option<T>,
}

impl<T> Unpin for Emit<'_, T> {}

impl<T> Future for Emit<'_, T> {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<()> {
        let Some(value) = self.value.take() else {
            return Poll::Ready(());
        };
        match self.slot.take() {
            Some(pending) => {
                self.slot.set(Some(pending));
                self.value = Some(value);
            }
            None => self.slot.set(Some(value)),
        }
        Poll::Pending
    }
}
