#![no_std]
#![doc = include_str!("../README.md")]
//!
//! # Quick Start
//!
//! ```rust
//! use range_views::{view, BidirectionalIterable, Iterable};
//!
//! let data = [1, 2, 3, 4, 5];
//! let reversed = view::reverse(&data);
//!
//! // Views are sequences themselves.
//! let mut pos = reversed.begin();
//! assert_eq!(*reversed.current(&pos), 5);
//! reversed.next(&mut pos);
//! assert_eq!(*reversed.current(&pos), 4);
//! reversed.prev(&mut pos);
//! assert_eq!(*reversed.current(&pos), 5);
//!
//! // And plain iterators.
//! assert_eq!(reversed.iter().copied().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
//! ```
//!
//! # Capabilities
//!
//! Every sequence carries its capabilities as a constant, and the view
//! adaptors compute theirs from their base:
//!
//! ```rust
//! use range_views::{capabilities, view, Capabilities, Iota};
//!
//! type Numbers = Iota<u32>;
//! type Reversed = view::ReverseView<Numbers>;
//! type Doubled = view::TransformView<Numbers, fn(u32) -> u32>;
//!
//! assert_eq!(capabilities::<Numbers>(), Capabilities::INDEXED);
//! assert_eq!(capabilities::<Reversed>(), Capabilities::INDEXED);
//! assert_eq!(
//!     capabilities::<Doubled>(),
//!     Capabilities::SINGLE_PASS | Capabilities::SIZED
//! );
//! ```
//!
//! # Pipelines
//!
//! ```rust
//! use range_views::pipe::{self, Pipe};
//!
//! let data = [3, 1, 2];
//! let out: Vec<i32> = (&data)
//!     .pipe(pipe::reverse())
//!     .pipe(pipe::transform(|x: &i32| x + 1))
//!     .into_iter()
//!     .collect();
//! assert_eq!(out, [3, 2, 4]);
//!
//! let mut runs = [2, 4, 6, 1, 3, 5];
//! let merged = runs.as_mut_slice() | pipe::inplace_merge(3);
//! assert_eq!(merged, [1, 2, 3, 4, 5, 6]);
//! ```

mod adaptor;
mod capability;
mod cursor;
mod error;
mod input;
mod iota;
mod iter;
mod iterable;
mod slice;

pub mod algorithm;
pub mod pipe;
pub mod view;

pub use adaptor::View;
pub use capability::{
    capabilities, is_bidirectional, is_bounded, is_random_access, is_single_pass, is_sized,
    Capabilities,
};
pub use cursor::{
    BidirectionalCursor, BoundedCursor, Cursor, ForwardCursor, MultiPass, Passthrough,
    RandomAccessCursor, SinglePass, SizedCursor, Traversal,
};
pub use error::Error;
pub use input::{Input, InputPosition};
pub use iota::{Iota, Step};
pub use iter::{DoubleEndedIter, Iter, IterableExt};
pub use iterable::{
    BidirectionalIterable, BoundedIterable, ForwardIterable, Iterable, RandomAccessIterable,
    SizedIterable,
};
pub use pipe::Pipe;

#[cfg(test)]
#[path = "tests/capability_tests.rs"]
mod capability_tests;

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod source_tests;

#[cfg(test)]
#[path = "tests/reverse_tests.rs"]
mod reverse_tests;

#[cfg(test)]
#[path = "tests/bidirectional_tests.rs"]
mod bidirectional_tests;

#[cfg(test)]
#[path = "tests/transform_tests.rs"]
mod transform_tests;

#[cfg(test)]
#[path = "tests/inplace_merge_tests.rs"]
mod inplace_merge_tests;
