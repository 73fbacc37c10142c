//! The cursor protocol: what a view implements to describe its positions.
//!
//! A view is a [`Cursor`] over some base [`Iterable`]. The cursor decides what
//! a position is, where iteration begins and ends, and how to read and move a
//! position. [`View`](crate::View) turns any cursor into a sequence that
//! implements the [`Iterable`] traits matching the cursor traits it
//! implements, so a capability the cursor omits is a compile error for the
//! caller rather than a runtime failure.
//!
//! Most views keep the positions of their base unchanged and only change
//! what is read. Those implement [`Passthrough`] instead, supplying just
//! [`read`](Passthrough::read); every other cursor operation is derived from
//! the base.

use crate::{
    BidirectionalIterable, BoundedIterable, Capabilities, ForwardIterable, Iterable,
    RandomAccessIterable, SizedIterable,
};

/// The required operations of a view.
///
/// See the [module documentation](self) for how a cursor becomes a sequence.
pub trait Cursor {
    /// The adapted sequence.
    type Base: Iterable;

    /// A position within the view.
    type Position: Clone;

    /// The value produced when reading a position.
    type Item;

    /// Capabilities of the resulting [`View`](crate::View).
    const CAPABILITIES: Capabilities;

    fn base(&self) -> &Self::Base;

    fn begin(&self) -> Self::Position;

    fn current(&self, pos: &Self::Position) -> Self::Item;

    fn next(&self, pos: &mut Self::Position);

    /// The sentinel test: returns `true` if `pos` is past the last element.
    fn is_end(&self, pos: &Self::Position) -> bool;

    /// See [`Iterable::remaining_hint`].
    #[inline]
    fn remaining_hint(&self, pos: &Self::Position) -> (usize, Option<usize>) {
        let _ = pos;
        (0, None)
    }
}

/// A cursor whose positions can be compared and revisited.
pub trait ForwardCursor: Cursor {
    fn equal(&self, a: &Self::Position, b: &Self::Position) -> bool;
}

/// A cursor with a real end position.
pub trait BoundedCursor: ForwardCursor {
    fn end(&self) -> Self::Position;
}

pub trait BidirectionalCursor: ForwardCursor {
    fn prev(&self, pos: &mut Self::Position);

    /// Moves `pos` by `n` elements, backward when `n` is negative.
    ///
    /// Defaults to repeated [`next`](Cursor::next) or [`prev`](Self::prev).
    fn advance(&self, pos: &mut Self::Position, n: isize) {
        if n >= 0 {
            for _ in 0..n {
                self.next(pos);
            }
        } else {
            for _ in 0..n.unsigned_abs() {
                self.prev(pos);
            }
        }
    }
}

/// A cursor that can jump and measure in constant time.
///
/// Implementors must also override [`BidirectionalCursor::advance`].
pub trait RandomAccessCursor: BidirectionalCursor {
    /// Returns the number of `next` steps from `from` to `to`.
    fn distance_to(&self, from: &Self::Position, to: &Self::Position) -> isize;
}

pub trait SizedCursor: Cursor {
    fn size(&self) -> usize;
}

mod private {
    pub trait Sealed {}
    impl Sealed for super::SinglePass {}
    impl Sealed for super::MultiPass {}
}

/// How a [`Passthrough`] cursor affects the traversal of its base.
///
/// This trait is sealed; its implementors are [`SinglePass`] and
/// [`MultiPass`].
pub trait Traversal: private::Sealed {
    /// Capabilities of the base that the view gives up.
    const REMOVED: Capabilities;
    /// Capabilities the view adds on top of the base.
    const ADDED: Capabilities;
}

/// The view yields fresh values on every read.
///
/// Reading the same position twice would not produce the same object, so
/// the view is single-pass: it loses random access, backward traversal and
/// a bounded end, whatever the base supports. Size is kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SinglePass;

/// The view yields references to storage that outlives the view.
///
/// All capabilities of the base are kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MultiPass;

impl Traversal for SinglePass {
    const REMOVED: Capabilities = Capabilities::BOUNDED
        .union(Capabilities::BIDIRECTIONAL)
        .union(Capabilities::RANDOM_ACCESS);
    const ADDED: Capabilities = Capabilities::SINGLE_PASS;
}

impl Traversal for MultiPass {
    const REMOVED: Capabilities = Capabilities::empty();
    const ADDED: Capabilities = Capabilities::empty();
}

/// A cursor that keeps the positions of its base and only changes what is
/// read at them.
///
/// Implementing `Passthrough` implements [`Cursor`] and, depending on the
/// base and on [`Traversal`], every other cursor trait.
pub trait Passthrough {
    type Base: Iterable;
    type Item;
    type Traversal: Traversal;

    fn underlying(&self) -> &Self::Base;

    fn read(&self, pos: &<Self::Base as Iterable>::Position) -> Self::Item;
}

impl<A: Passthrough> Cursor for A {
    type Base = A::Base;
    type Position = <A::Base as Iterable>::Position;
    type Item = A::Item;

    const CAPABILITIES: Capabilities = <A::Base as Iterable>::CAPABILITIES
        .difference(<A::Traversal as Traversal>::REMOVED)
        .union(<A::Traversal as Traversal>::ADDED);

    #[inline]
    fn base(&self) -> &A::Base {
        self.underlying()
    }

    #[inline]
    fn begin(&self) -> Self::Position {
        self.underlying().begin()
    }

    #[inline]
    fn current(&self, pos: &Self::Position) -> A::Item {
        self.read(pos)
    }

    #[inline]
    fn next(&self, pos: &mut Self::Position) {
        self.underlying().next(pos)
    }

    #[inline]
    fn is_end(&self, pos: &Self::Position) -> bool {
        self.underlying().is_end(pos)
    }

    #[inline]
    fn remaining_hint(&self, pos: &Self::Position) -> (usize, Option<usize>) {
        self.underlying().remaining_hint(pos)
    }
}

impl<A> ForwardCursor for A
where
    A: Passthrough<Traversal = MultiPass>,
    A::Base: ForwardIterable,
{
    #[inline]
    fn equal(&self, a: &Self::Position, b: &Self::Position) -> bool {
        self.underlying().equal(a, b)
    }
}

impl<A> BoundedCursor for A
where
    A: Passthrough<Traversal = MultiPass>,
    A::Base: BoundedIterable,
{
    #[inline]
    fn end(&self) -> Self::Position {
        self.underlying().end()
    }
}

impl<A> BidirectionalCursor for A
where
    A: Passthrough<Traversal = MultiPass>,
    A::Base: BidirectionalIterable,
{
    #[inline]
    fn prev(&self, pos: &mut Self::Position) {
        self.underlying().prev(pos)
    }

    #[inline]
    fn advance(&self, pos: &mut Self::Position, n: isize) {
        self.underlying().advance(pos, n)
    }
}

impl<A> RandomAccessCursor for A
where
    A: Passthrough<Traversal = MultiPass>,
    A::Base: RandomAccessIterable,
{
    #[inline]
    fn distance_to(&self, from: &Self::Position, to: &Self::Position) -> isize {
        self.underlying().distance_to(from, to)
    }
}

impl<A> SizedCursor for A
where
    A: Passthrough,
    A::Base: SizedIterable,
{
    #[inline]
    fn size(&self) -> usize {
        self.underlying().size()
    }
}
