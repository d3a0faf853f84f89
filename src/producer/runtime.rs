use std::{
    fmt,
    future::Future,
    mem,
    pin::Pin,
    task::{Context, Poll},
};

use futures::task::noop_waker_ref;
use tracing::{debug, trace, warn};

use crate::{Cursor, Error, Result, producer::Emitter, step::Step};

/// A producer definition that can be started once.
///
/// Implemented for every `FnOnce(Emitter<T>) -> impl Future<Output = Result<R>>`,
/// which covers `async fn`s taking an emitter and closures returning `async`
/// blocks. References to `Fn` closures are bodies too, which is how a
/// [`Generator`](crate::producer::Generator) starts many instances of one
/// definition.
pub trait Body<T> {
    /// Value the body finishes with.
    type Return;
    type Future: Future<Output = Result<Self::Return>>;

    fn start(self, co: Emitter<T>) -> Self::Future;
}

impl<T, R, F, Fut> Body<T> for F
where
    F: FnOnce(Emitter<T>) -> Fut,
    Fut: Future<Output = Result<R>>,
{
    type Return = R;
    type Future = Fut;

    fn start(self, co: Emitter<T>) -> Fut {
        self(co)
    }
}

enum ProducerState<T, B: Body<T>> {
    NotStarted(B),
    Suspended(Pin<Box<B::Future>>),
    Returned(B::Return),
    Exhausted,
}

/// A running instance of a producer body.
///
/// Starts out not started; the first [`resume`](Producer::resume) runs the body
/// up to its first emission. Once the body returns or fails the instance is
/// complete for good. A successful return is kept and can be read with
/// [`return_value`](Producer::return_value).
pub struct Producer<T, B: Body<T>> {
    emitter: Emitter<T>,
    state: ProducerState<T, B>,
}

/// Create a single producer instance from `body`.
///
/// ```rust
/// use seqflow::prelude::*;
///
/// let mut instance = producer(|co| async move {
///     co.emit("ready").await;
///     Ok(42)
/// });
///
/// assert_eq!(instance.resume().unwrap(), Step::Yielded("ready"));
/// assert_eq!(instance.resume().unwrap(), Step::Complete(()));
/// assert_eq!(instance.into_return(), Some(42));
/// ```
pub fn producer<T, F, Fut, R>(body: F) -> Producer<T, F>
where
    F: FnOnce(Emitter<T>) -> Fut,
    Fut: Future<Output = Result<R>>,
{
    Producer::new(body)
}

impl<T, B: Body<T>> Producer<T, B> {
    pub fn new(body: B) -> Self {
        Self {
            emitter: Emitter::new(),
            state: ProducerState::NotStarted(body),
        }
    }

    /// Run the body until its next emission.
    ///
    /// A failure raised by the body is returned here and leaves the instance
    /// exhausted; it is never re-run.
    pub fn resume(&mut self) -> Result<Step<T>> {
        let mut future = match mem::replace(&mut self.state, ProducerState::Exhausted) {
            ProducerState::NotStarted(body) => {
                trace!("starting producer");
                Box::pin(body.start(self.emitter.clone()))
            }
            ProducerState::Suspended(future) => future,
            done @ (ProducerState::Returned(_) | ProducerState::Exhausted) => {
                self.state = done;
                return Ok(Step::Complete(()));
            }
        };

        let mut cx = Context::from_waker(noop_waker_ref());
        match future.as_mut().poll(&mut cx) {
            Poll::Ready(Ok(value)) => {
                trace!("producer returned");
                self.state = ProducerState::Returned(value);
                Ok(Step::Complete(()))
            }
            Poll::Ready(Err(err)) => {
                debug!(error = %err, "producer failed");
                Err(err)
            }
            Poll::Pending => match self.emitter.take() {
                Some(value) => {
                    self.state = ProducerState::Suspended(future);
                    Ok(Step::Yielded(value))
                }
                None => {
                    warn!("producer suspended without emitting a value");
                    Err(Error::Stalled)
                }
            },
        }
    }

    pub fn is_started(&self) -> bool {
        !matches!(self.state, ProducerState::NotStarted(_))
    }

    /// Check whether the body has returned or failed.
    pub fn is_complete(&self) -> bool {
        matches!(
            self.state,
            ProducerState::Returned(_) | ProducerState::Exhausted
        )
    }

    /// The value the body returned, if it has returned successfully.
    pub fn return_value(&self) -> Option<&B::Return> {
        match &self.state {
            ProducerState::Returned(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_return(self) -> Option<B::Return> {
        match self.state {
            ProducerState::Returned(value) => Some(value),
            _ => None,
        }
    }
}

impl<T, B: Body<T>> Cursor for Producer<T, B> {
    type Item = T;

    fn advance(&mut self) -> Result<Step<T>> {
        self.resume()
    }
}

impl<T, B: Body<T>> fmt::Debug for Producer<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            ProducerState::NotStarted(_) => "not started",
            ProducerState::Suspended(_) => "suspended",
            ProducerState::Returned(_) => "returned",
            ProducerState::Exhausted => "exhausted",
        };
        f.debug_struct("Producer").field("state", &state).finish()
    }
}
