//! Lazy views over sequences.
//!
//! | View          | Requires                                         | Provides                                                  |
//! |---------------|--------------------------------------------------|-----------------------------------------------------------|
//! | [`reverse`]   | bidirectional, bounded                           | forward, bounded, bidirectional; random access and size if the base has them |
//! | [`transform`] | any sequence, `Fn(Item) -> O`                    | single-pass with a sentinel end; size if the base has it  |
//! | [`project`]   | any sequence, `Fn(Item) -> &U`                   | exactly the capabilities of the base                      |
//!
//! A view never copies the elements of its base. Adapting a borrowed
//! sequence (`&[T]`, `&View<A>`) ties the view to the borrow.
//!
//! Adapting a sequence that lacks a required capability does not compile:
//!
//! ```compile_fail
//! use range_views::{view, Input};
//!
//! // A single-pass source cannot be traversed backward.
//! let _ = view::reverse(Input::new(0..3u8));
//! ```
//!
//! ```compile_fail
//! use range_views::view;
//!
//! // `transform` yields fresh values, so the view is single-pass.
//! let data = [1, 2, 3];
//! let _ = view::reverse(view::transform(&data, |x: &i32| x * 2));
//! ```

mod reverse;
mod transform;

pub use reverse::{reverse, RevPosition, ReverseView, Reversed};
pub use transform::{project, transform, ProjectView, TransformView, Transformed};
