//! Commonly used imports
//!
//! Use `use seqflow::prelude::*;` for quick access to the traits and the most
//! common constructors.

// Core types
pub use crate::{Cursor, Sequence, Step};

// Eager layer
pub use crate::{Gather, Gatherable};

// Sources
pub use crate::build::{empty, from_fn, iter_fn, iterate, once, repeat};
pub use crate::Nested;

// Producers
pub use crate::producer::{Emitter, generator, producer};
