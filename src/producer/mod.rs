//! Producers written as straight-line code
//!
//! A producer body is an `async` block or function that receives an [`Emitter`]
//! and awaits [`Emitter::emit`] for every value it wants to hand out. The
//! [`Producer`] runtime polls the body exactly once per `advance`: the body runs
//! until its next emission and is parked there, with every local binding intact,
//! until the consumer pulls again. No executor is involved; the body is driven
//! with a no-op waker.
//!
//! ```rust
//! use seqflow::prelude::*;
//!
//! async fn countdown(co: Emitter<u32>) -> seqflow::Result<()> {
//!     for n in (1..=3).rev() {
//!         co.emit(n).await;
//!     }
//!     Ok(())
//! }
//!
//! let launch = generator(countdown);
//! assert_eq!(launch.gather::<Vec<_>>().unwrap(), vec![3, 2, 1]);
//! // every traversal starts a fresh instance
//! assert_eq!(launch.first().unwrap(), Some(3));
//! ```
//!
//! Bodies must only await emissions, delegations and other futures that
//! complete without waiting. Anything else parks the body without a value,
//! which is reported as [`Error::Stalled`](crate::Error::Stalled).

mod emitter;
mod generator;
mod runtime;

pub use emitter::{Emit, Emitter};
pub use generator::{Generator, generator};
pub use runtime::{Body, Producer, producer};
