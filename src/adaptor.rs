use core::ops::BitOr;

use crate::pipe::Pipeable;
use crate::{
    BidirectionalCursor, BidirectionalIterable, BoundedCursor, BoundedIterable, Capabilities,
    Cursor, DoubleEndedIter, ForwardCursor, ForwardIterable, Iter, Iterable, RandomAccessCursor,
    RandomAccessIterable, SizedCursor, SizedIterable,
};

/// A lazy sequence described by a [`Cursor`].
///
/// `View` implements each [`Iterable`] trait exactly when its cursor
/// implements the matching cursor trait:
///
/// | `A` implements          | `View<A>` implements      |
/// |-------------------------|---------------------------|
/// | [`Cursor`]              | [`Iterable`]              |
/// | [`ForwardCursor`]       | [`ForwardIterable`]       |
/// | [`BoundedCursor`]       | [`BoundedIterable`]       |
/// | [`BidirectionalCursor`] | [`BidirectionalIterable`] |
/// | [`RandomAccessCursor`]  | [`RandomAccessIterable`]  |
/// | [`SizedCursor`]         | [`SizedIterable`]         |
///
/// The same holds for `&View<A>`, so a view can be adapted by reference
/// without giving it up.
///
/// # Examples
/// ```
/// use range_views::view;
///
/// let data = [1, 2, 3, 4, 5];
/// let reversed = view::reverse(&data);
///
/// assert_eq!(reversed.size(), 5);
/// assert_eq!(reversed.iter().copied().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
///
/// // Adapting by reference keeps `reversed` usable.
/// let restored = view::reverse(&reversed);
/// assert_eq!(restored.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
/// assert!(!reversed.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct View<A> {
    cursor: A,
}

impl<A: Cursor> View<A> {
    #[inline]
    pub fn new(cursor: A) -> Self {
        Self { cursor }
    }

    #[inline]
    pub fn cursor(&self) -> &A {
        &self.cursor
    }

    /// Returns the adapted sequence.
    #[inline]
    pub fn base(&self) -> &A::Base {
        self.cursor.base()
    }

    #[inline]
    pub fn into_cursor(self) -> A {
        self.cursor
    }

    /// Returns an iterator over the view that stops at the sentinel.
    #[inline]
    pub fn iter(&self) -> Iter<&Self> {
        Iter::new(self)
    }

    /// Returns an iterator that can also be consumed from the back.
    #[inline]
    pub fn double_ended(&self) -> DoubleEndedIter<&Self>
    where
        A: BidirectionalCursor + BoundedCursor,
    {
        DoubleEndedIter::new(self)
    }

    #[inline]
    pub fn size(&self) -> usize
    where
        A: SizedCursor,
    {
        self.cursor.size()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursor.is_end(&self.cursor.begin())
    }
}

impl<A: Cursor> Iterable for View<A> {
    type Position = A::Position;
    type Item = A::Item;

    const CAPABILITIES: Capabilities = A::CAPABILITIES;

    #[inline]
    fn begin(&self) -> A::Position {
        self.cursor.begin()
    }

    #[inline]
    fn is_end(&self, pos: &A::Position) -> bool {
        self.cursor.is_end(pos)
    }

    #[inline]
    fn current(&self, pos: &A::Position) -> A::Item {
        self.cursor.current(pos)
    }

    #[inline]
    fn next(&self, pos: &mut A::Position) {
        self.cursor.next(pos)
    }

    #[inline]
    fn remaining_hint(&self, pos: &A::Position) -> (usize, Option<usize>) {
        self.cursor.remaining_hint(pos)
    }
}

impl<A: ForwardCursor> ForwardIterable for View<A> {
    #[inline]
    fn equal(&self, a: &A::Position, b: &A::Position) -> bool {
        self.cursor.equal(a, b)
    }
}

impl<A: BoundedCursor> BoundedIterable for View<A> {
    #[inline]
    fn end(&self) -> A::Position {
        self.cursor.end()
    }
}

impl<A: BidirectionalCursor> BidirectionalIterable for View<A> {
    #[inline]
    fn prev(&self, pos: &mut A::Position) {
        self.cursor.prev(pos)
    }

    #[inline]
    fn advance(&self, pos: &mut A::Position, n: isize) {
        self.cursor.advance(pos, n)
    }
}

impl<A: RandomAccessCursor> RandomAccessIterable for View<A> {
    #[inline]
    fn distance_to(&self, from: &A::Position, to: &A::Position) -> isize {
        self.cursor.distance_to(from, to)
    }
}

impl<A: SizedCursor> SizedIterable for View<A> {
    #[inline]
    fn size(&self) -> usize {
        self.cursor.size()
    }
}

impl<'v, A: Cursor> Iterable for &'v View<A> {
    type Position = A::Position;
    type Item = A::Item;

    const CAPABILITIES: Capabilities = A::CAPABILITIES;

    #[inline]
    fn begin(&self) -> A::Position {
        self.cursor.begin()
    }

    #[inline]
    fn is_end(&self, pos: &A::Position) -> bool {
        self.cursor.is_end(pos)
    }

    #[inline]
    fn current(&self, pos: &A::Position) -> A::Item {
        self.cursor.current(pos)
    }

    #[inline]
    fn next(&self, pos: &mut A::Position) {
        self.cursor.next(pos)
    }

    #[inline]
    fn remaining_hint(&self, pos: &A::Position) -> (usize, Option<usize>) {
        self.cursor.remaining_hint(pos)
    }
}

impl<'v, A: ForwardCursor> ForwardIterable for &'v View<A> {
    #[inline]
    fn equal(&self, a: &A::Position, b: &A::Position) -> bool {
        self.cursor.equal(a, b)
    }
}

impl<'v, A: BoundedCursor> BoundedIterable for &'v View<A> {
    #[inline]
    fn end(&self) -> A::Position {
        self.cursor.end()
    }
}

impl<'v, A: BidirectionalCursor> BidirectionalIterable for &'v View<A> {
    #[inline]
    fn prev(&self, pos: &mut A::Position) {
        self.cursor.prev(pos)
    }

    #[inline]
    fn advance(&self, pos: &mut A::Position, n: isize) {
        self.cursor.advance(pos, n)
    }
}

impl<'v, A: RandomAccessCursor> RandomAccessIterable for &'v View<A> {
    #[inline]
    fn distance_to(&self, from: &A::Position, to: &A::Position) -> isize {
        self.cursor.distance_to(from, to)
    }
}

impl<'v, A: SizedCursor> SizedIterable for &'v View<A> {
    #[inline]
    fn size(&self) -> usize {
        self.cursor.size()
    }
}

impl<A: Cursor> IntoIterator for View<A> {
    type Item = A::Item;
    type IntoIter = Iter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

impl<'v, A: Cursor> IntoIterator for &'v View<A> {
    type Item = A::Item;
    type IntoIter = Iter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

impl<A: Cursor, P: Pipeable<Self>> BitOr<P> for View<A> {
    type Output = P::Output;

    #[inline]
    fn bitor(self, adaptor: P) -> P::Output {
        adaptor.apply(self)
    }
}

impl<'v, A: Cursor, P: Pipeable<Self>> BitOr<P> for &'v View<A> {
    type Output = P::Output;

    #[inline]
    fn bitor(self, adaptor: P) -> P::Output {
        adaptor.apply(self)
    }
}
