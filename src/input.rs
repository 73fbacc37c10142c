use core::cell::{Cell, RefCell};
use core::fmt;
use core::ops::BitOr;

use crate::pipe::Pipeable;
use crate::{Capabilities, Iterable};

/// A single-pass sequence reading from an [`Iterator`].
///
/// The first element is pulled when [`begin`](Iterable::begin) is first
/// called, and every [`next`](Iterable::next) pulls one more. All positions
/// of an `Input` denote the same, most recently pulled element, so it
/// implements neither [`ForwardIterable`](crate::ForwardIterable) nor
/// [`BoundedIterable`](crate::BoundedIterable): its end is only the
/// sentinel test [`is_end`](Iterable::is_end).
///
/// ```
/// use range_views::{view, Input};
///
/// let lengths = view::transform(Input::new("a bb ccc".split(' ')), str::len);
/// assert_eq!(lengths.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub struct Input<I: Iterator> {
    iter: RefCell<I>,
    current: RefCell<Option<I::Item>>,
    primed: Cell<bool>,
}

/// The position of an [`Input`]: a token for "the element most recently
/// pulled".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InputPosition {
    _private: (),
}

impl<I: Iterator> Input<I> {
    pub fn new(iter: I) -> Self {
        Self {
            iter: RefCell::new(iter),
            current: RefCell::new(None),
            primed: Cell::new(false),
        }
    }

    /// Returns the underlying iterator, dropping any buffered element.
    pub fn into_inner(self) -> I {
        self.iter.into_inner()
    }
}

impl<I> fmt::Debug for Input<I>
where
    I: Iterator,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input")
            .field("current", &self.current)
            .field("primed", &self.primed.get())
            .finish_non_exhaustive()
    }
}

impl<I> Iterable for Input<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Position = InputPosition;
    type Item = I::Item;

    const CAPABILITIES: Capabilities = Capabilities::SINGLE_PASS;

    fn begin(&self) -> InputPosition {
        if !self.primed.replace(true) {
            *self.current.borrow_mut() = self.iter.borrow_mut().next();
        }
        InputPosition { _private: () }
    }

    fn is_end(&self, _pos: &InputPosition) -> bool {
        debug_assert!(self.primed.get(), "position used before begin");
        self.current.borrow().is_none()
    }

    fn current(&self, _pos: &InputPosition) -> I::Item {
        match self.current.borrow().as_ref() {
            Some(item) => item.clone(),
            None => panic!("dereferenced an exhausted input"),
        }
    }

    fn next(&self, _pos: &mut InputPosition) {
        debug_assert!(
            self.current.borrow().is_some(),
            "advanced past the end of an input"
        );
        *self.current.borrow_mut() = self.iter.borrow_mut().next();
    }

    // The buffered element plus whatever the iterator still holds.
    fn remaining_hint(&self, _pos: &InputPosition) -> (usize, Option<usize>) {
        if self.current.borrow().is_none() {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.borrow().size_hint();
        (lower.saturating_add(1), upper.and_then(|upper| upper.checked_add(1)))
    }
}

impl<I, P> BitOr<P> for Input<I>
where
    I: Iterator,
    P: Pipeable<Self>,
{
    type Output = P::Output;

    #[inline]
    fn bitor(self, adaptor: P) -> P::Output {
        adaptor.apply(self)
    }
}
