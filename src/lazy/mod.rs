//! Lazy views over sequences
//!
//! Every view stores its source and its transform and does nothing until one of
//! its cursors is advanced. Views are sequences themselves, so they chain freely.

mod bound;
mod chain;
mod filter;
mod map;

pub use bound::{Rest, RestCursor, Take, TakeCursor, Until, UntilCursor, rest, take, until};
pub use chain::{Chain, ChainCursor, Zip, ZipCursor, chain, zip};
pub use filter::{Filter, FilterCursor, Find, FindCursor, TryFilter, TryFilterCursor, filter, find, try_filter};
pub use map::{Inspect, InspectCursor, Map, MapCursor, TryMap, TryMapCursor, inspect, map, try_map};
