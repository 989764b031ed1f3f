//! A static interval tree ([`interval_tree::IntervalTree`]) built once from a batch of
//! closed intervals and never modified afterwards.
//!
//! Construction happens in four steps:
//!
//! 1. the distinct endpoints of all intervals are collected in ascending order
//!    ([`endpoints`]);
//! 2. a binary tree is built bottom-up over those endpoints, pairing nodes
//!    through a FIFO queue, each internal node splitting halfway between its two
//!    subtrees ([`skeleton`]);
//! 3. every interval is attached to the highest node whose split value it spans,
//!    in one list ordered by left endpoint and one ordered by right endpoint;
//! 4. queries walk the finished tree.
//!
//! Any endpoint type converting losslessly into `f64` can be used: integers up to
//! 32 bits, `f32` and `f64`.
#![forbid(unsafe_code)]

pub mod endpoints;
mod error;
mod interval;
/// The tree itself and its queries.
pub mod interval_tree;
mod mapper;
mod node;
pub mod skeleton;

pub use error::{Error, Result};
pub use interval::{Endpoint, Interval};
pub use interval_tree::IntervalTree;
pub use node::NodeRef;
